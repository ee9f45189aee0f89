pub mod config;

pub use config::{AppConfig, ImageConfig, CONFIG_ENV, DEFAULT_CONFIG_FILE};
