//! Layered configuration: defaults, then an optional YAML file, then
//! `CAMPUS_`-prefixed environment variables.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `CAMPUS_DATA_DIR`.
pub const ENV_PREFIX: &str = "CAMPUS_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the four collection documents.
    pub data_dir: PathBuf,
    /// Log at debug level when `RUST_LOG` is unset.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            debug: false,
        }
    }
}

impl Config {
    /// Resolve the configuration. A missing YAML file is skipped.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_file).extract().map_err(ConfigError::from)
    }

    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}

/// Configuration could not be resolved.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "configuration error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError(Box::new(err))
    }
}
