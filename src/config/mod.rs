//! Configuration file loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, UiConfig};
