//! [`Config`]-related definitions.

use std::path::PathBuf;
use std::time;

use config::{builder::DefaultState, ConfigBuilder};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use smart_default::SmartDefault;

use crate::controller::SelectionMode;
use crate::error::Error;
use crate::paginator;

/// Configuration file read when none is given on the command line.
pub const DEFAULT_PATH: &str = "usertable.toml";

/// Prefix of the environment variables merged over the file.
pub const ENV_PREFIX: &str = "USERTABLE";

static INSTALLED: OnceCell<Config> = OnceCell::new();

/// Application configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Config {
    /// URL the user list is fetched from.
    #[default("http://127.0.0.1:3000/users".to_owned())]
    pub endpoint: String,

    /// Table configuration.
    pub table: Table,

    /// Search configuration.
    pub search: Search,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if it exists);
    /// - merging it with the `USERTABLE_*` environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, Error> {
        let config = ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("."))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Makes this the process-wide configuration. Only the first call wins;
    /// returns `false` if a configuration was already installed.
    pub fn install(self) -> bool {
        INSTALLED.set(self).is_ok()
    }

    /// The installed configuration, or the defaults when none was installed.
    pub fn current() -> Config {
        INSTALLED.get().cloned().unwrap_or_default()
    }
}

/// Table configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Table {
    /// Rows shown per page.
    #[default(paginator::DEFAULT_ITEMS_PER_PAGE)]
    pub items_per_page: usize,

    /// Page buttons shown at once.
    #[default(paginator::DEFAULT_PAGES_PER_VIEW)]
    pub pages_per_view: usize,

    /// How "select all" picks the rows of the current page.
    pub selection: SelectionMode,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Search {
    /// Pause in typing after which the search term is applied.
    #[default(crate::debounce::DEFAULT_DELAY)]
    #[serde(with = "humantime_serde")]
    pub debounce: time::Duration,
}

/// Log configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,

    /// File to write logs to. Nothing is logged without one, since the
    /// terminal belongs to the table.
    pub file: Option<PathBuf>,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
