pub mod app;
pub mod catalog;
pub mod combo;
pub mod config;
pub mod error;
pub mod event;
pub mod matcher;
pub mod ui;
