mod config;
mod error;
mod overrides;

pub use config::{AppConfig, DEFAULT_CONFIG_FILE};
pub use error::ConfigError;
pub use overrides::{ENV_OVERRIDES, EnvOverride};
