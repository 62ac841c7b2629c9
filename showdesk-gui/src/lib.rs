//! showdesk GUI
//!
//! Desktop admin panel for a list of TV programmes, built on eframe/egui.
//! All programme state lives in one [`showdesk_core::AdminPanel`] owned by
//! [`ShowDeskApp`].

pub mod app;
pub mod settings;
pub mod state;
pub mod views;
pub mod widgets;

pub use app::ShowDeskApp;
