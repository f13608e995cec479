//! Host configuration
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. A TOML file: the explicit path, else `KEYSCRIPT_CONFIG_PATH`, else `./keyscript.toml`
//!    when present
//! 3. `KEYSCRIPT_*` environment variables (a `.env` file is read first)

use anyhow::{Context, Result};
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

use crate::executor::DEFAULT_MAX_CALL_DEPTH;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "KEYSCRIPT_CONFIG_PATH";

const ENV_PREFIX: &str = "KEYSCRIPT";
const DEFAULT_FILE: &str = "keyscript";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Bundled plugins imported before a script runs
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Maximum number of nested function calls
    #[serde(default = "default_max_call_depth")]
    pub max_call_depth: usize,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_call_depth() -> usize {
    DEFAULT_MAX_CALL_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            plugins: Vec::new(),
            max_call_depth: default_max_call_depth(),
        }
    }
}

impl Config {
    /// Load configuration from all sources
    ///
    /// `path` overrides `KEYSCRIPT_CONFIG_PATH`.
    pub fn load(path: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok());
        Self::load_from(path.as_deref())
    }

    /// Load configuration from an optional file plus the environment, without reading `.env`
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        let loader = ConfigLoader::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("plugins"),
            )
            .build()
            .with_context(|| match path {
                Some(path) => format!("Failed to read config file {}", path),
                None => "Failed to read configuration".to_string(),
            })?;

        loader
            .try_deserialize()
            .context("Invalid configuration")
    }
}
