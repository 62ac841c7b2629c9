pub mod notice_bar;
pub mod show_form;
pub mod show_table;
pub mod stat_card;
