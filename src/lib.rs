pub mod config;
pub mod content;
pub mod diagram;
pub mod dom;
pub mod error;
pub mod prefs;
pub mod routes;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
