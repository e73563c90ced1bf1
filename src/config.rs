//! Configuration loaded from `exprsql.toml`.
//!
//! ```toml
//! dialect = "clickhouse"
//! strict = false
//! log_level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dialect::DialectKind;
use crate::error::{QueryError, QueryResult};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "exprsql.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dialect used when none is given on the command line.
    #[serde(default)]
    pub dialect: DialectKind,

    /// Fail instead of dropping conditions that do not resolve.
    #[serde(default)]
    pub strict: bool,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: DialectKind::default(),
            strict: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load `./exprsql.toml`, then `<config dir>/exprsql/config.toml`,
    /// falling back to defaults when neither exists.
    pub fn load() -> QueryResult<Self> {
        match Self::locate() {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// First existing config file, if any.
    pub fn locate() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("exprsql").join("config.toml"))
            .filter(|path| path.exists())
    }

    pub fn from_path(path: &Path) -> QueryResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| QueryError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> QueryResult<Self> {
        toml::from_str(content).map_err(|e| QueryError::Config(e.to_string()))
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn dialect(mut self, dialect: DialectKind) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
