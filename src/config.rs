use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{ApplicationError, ConfigLoadSnafu};

/// Prefix of every environment variable read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "CAMPAIGN_";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the local key-value store
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Config, ApplicationError> {
        envy::prefixed(ENV_PREFIX)
            .from_env::<Config>()
            .context(ConfigLoadSnafu)
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_filter() -> String {
    "info".to_string()
}
