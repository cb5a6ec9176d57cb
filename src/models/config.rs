use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default location of the YAML configuration file, without extension.
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

/// Configuration options of the landing page service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Directory with the built front end; static hosting is disabled when unset.
    pub static_dir: Option<String>,
}

impl ServerConfig {
    /// Load settings from built-in defaults, the optional YAML file at `path`
    /// and `APP_*` environment variables, in that order of precedence.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 2022)?
            .set_default("database_url", "academy.db")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
