//! Kiosk configuration: TOML file with built-in defaults, validated at start-up.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    default_log_path, Config, DisplayConfig, LoggingConfig, PricingConfig, ScannerConfig,
    SpeechConfig,
};
