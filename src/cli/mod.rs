pub mod handler;
pub mod ui;
