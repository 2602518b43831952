pub mod app;
pub mod config;
pub mod labels;
pub mod ui;
