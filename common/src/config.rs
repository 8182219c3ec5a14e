use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub view: ViewConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON array of product records. The built-in seed catalog is used when unset.
    #[serde(default)]
    pub source: Option<String>,
}

/// Initial toolbar state handed to the catalog screen.
#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClockConfig {
    /// Fixed reference instant, `YYYY-MM-DD` or RFC 3339.
    #[serde(default)]
    pub now: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: default_filter(),
            sort: default_sort(),
            mode: default_mode(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "name".to_string()
}

fn default_mode() -> String {
    "grid".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("CATALOG").separator("__"));

        // Build the configuration
        let config = builder.build()?;

        let settings: Settings = config.try_deserialize()?;

        Ok(settings)
    }

    /// Logs the effective settings. Call once a subscriber is installed.
    pub fn log_loaded(&self, path: &str) {
        debug!(
            config = path,
            source = ?self.catalog.source,
            filter = %self.view.filter,
            sort = %self.view.sort,
            mode = %self.view.mode,
            now = ?self.clock.now,
            log_level = %self.logging.level,
            "Loaded catalog settings"
        );
    }
}
