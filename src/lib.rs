pub mod cli;
pub mod config;
pub mod document;
pub mod generation;
pub mod headless;
pub mod logging;
pub mod session;
pub mod ui;
