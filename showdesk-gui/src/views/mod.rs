pub mod access;
pub mod admin;
