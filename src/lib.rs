pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod headless;
pub mod logging;
pub mod ui;
