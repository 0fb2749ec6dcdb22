//! Configuration schema
//!
//! TOML-backed configuration for the booking toolkit. Every section has
//! serde defaults so a minimal file (or none of the optional sections) still
//! yields a runnable configuration; `validate()` catches the combinations
//! that cannot work.

use crate::domain::errors::AgendeiError;
use crate::domain::location::{
    LocationStrategy, RandomStrategy, RoundRobinStrategy, DEFAULT_UNITS,
};
use crate::domain::result::Result;
use crate::validation::{IdentifierPolicy, OpenHours};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgendeiConfig {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub booking: BookingPolicy,

    #[serde(default)]
    pub locations: LocationsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AgendeiConfig {
    /// Load and validate a configuration file
    ///
    /// Convenience wrapper over [`crate::config::load_config`].
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        super::loader::load_config(path)
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        let hours = &self.booking;
        if hours.open_hour >= hours.close_hour {
            return Err(AgendeiError::Configuration(format!(
                "booking.open_hour ({}) must be before booking.close_hour ({})",
                hours.open_hour, hours.close_hour
            )));
        }
        if hours.close_hour > 23 {
            return Err(AgendeiError::Configuration(format!(
                "booking.close_hour ({}) must be at most 23",
                hours.close_hour
            )));
        }

        match self.store.backend {
            StoreBackend::Rest => {
                let rest = self.store.rest.as_ref().ok_or_else(|| {
                    AgendeiError::Configuration(
                        "store.backend is 'rest' but the [store.rest] section is missing"
                            .to_string(),
                    )
                })?;
                url::Url::parse(&rest.base_url).map_err(|e| {
                    AgendeiError::Configuration(format!(
                        "store.rest.base_url '{}' is not a valid URL: {e}",
                        rest.base_url
                    ))
                })?;
                if rest.timeout_seconds == 0 {
                    return Err(AgendeiError::Configuration(
                        "store.rest.timeout_seconds must be greater than 0".to_string(),
                    ));
                }
            }
            StoreBackend::File => {
                if let Some(file) = &self.store.file {
                    if file.path.trim().is_empty() {
                        return Err(AgendeiError::Configuration(
                            "store.file.path must not be empty".to_string(),
                        ));
                    }
                }
            }
            StoreBackend::Memory => {}
        }

        if self.locations.units.is_empty() {
            return Err(AgendeiError::Configuration(
                "locations.units must list at least one clinic unit".to_string(),
            ));
        }

        if ![
            "trace", "debug", "info", "warn", "error",
        ]
        .contains(&self.application.log_level.to_lowercase().as_str())
        {
            return Err(AgendeiError::Configuration(format!(
                "application.log_level '{}' is invalid. Must be one of: trace, debug, info, warn, error",
                self.application.log_level
            )));
        }

        Ok(())
    }
}

/// Application identity and log level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "agendei".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Which `BookingStore` implementation backs the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreBackend {
    /// Volatile in-process store, mainly for tests and demos
    Memory,
    /// JSON file on the local filesystem
    File,
    /// Remote REST collection
    Rest,
}

/// Store selection plus backend-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    #[serde(default)]
    pub file: Option<FileStoreConfig>,

    #[serde(default)]
    pub rest: Option<RestStoreConfig>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            file: None,
            rest: None,
        }
    }
}

fn default_backend() -> StoreBackend {
    StoreBackend::File
}

/// Settings for the JSON file store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    #[serde(default = "default_file_path")]
    pub path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: default_file_path(),
        }
    }
}

fn default_file_path() -> String {
    "consultas.json".to_string()
}

/// Settings for the REST-backed store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestStoreConfig {
    pub base_url: String,

    /// Client-side request timeout; the original front-end had none
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Business rules applied to every booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPolicy {
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,

    #[serde(default = "default_close_hour")]
    pub close_hour: u32,

    #[serde(default = "default_min_age")]
    pub min_age: u32,

    /// Minutes of tolerance for late arrival, shown as "arrive by HH:MM"
    #[serde(default = "default_grace_minutes")]
    pub arrival_grace_minutes: i64,

    #[serde(default)]
    pub identifier_policy: IdentifierPolicy,
}

impl BookingPolicy {
    /// Open window for the slot predicate
    pub fn open_hours(&self) -> OpenHours {
        OpenHours {
            open_hour: self.open_hour,
            close_hour: self.close_hour,
        }
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            min_age: default_min_age(),
            arrival_grace_minutes: default_grace_minutes(),
            identifier_policy: IdentifierPolicy::default(),
        }
    }
}

fn default_open_hour() -> u32 {
    7
}

fn default_close_hour() -> u32 {
    18
}

fn default_min_age() -> u32 {
    crate::validation::DEFAULT_MIN_AGE
}

fn default_grace_minutes() -> i64 {
    10
}

/// How the clinic unit is assigned at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationStrategyKind {
    RoundRobin,
    Random,
}

/// Clinic units and the strategy picking among them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsConfig {
    #[serde(default = "default_location_strategy")]
    pub strategy: LocationStrategyKind,

    #[serde(default = "default_units")]
    pub units: Vec<String>,
}

impl LocationsConfig {
    /// Build the configured strategy
    pub fn build_strategy(&self) -> Box<dyn LocationStrategy> {
        match self.strategy {
            LocationStrategyKind::RoundRobin => {
                Box::new(RoundRobinStrategy::new(self.units.clone()))
            }
            LocationStrategyKind::Random => Box::new(RandomStrategy::new(self.units.clone())),
        }
    }
}

impl Default for LocationsConfig {
    fn default() -> Self {
        Self {
            strategy: default_location_strategy(),
            units: default_units(),
        }
    }
}

fn default_location_strategy() -> LocationStrategyKind {
    LocationStrategyKind::RoundRobin
}

fn default_units() -> Vec<String> {
    DEFAULT_UNITS.iter().map(|u| u.to_string()).collect()
}

/// Local logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub local_enabled: bool,

    #[serde(default = "default_log_path")]
    pub local_path: String,

    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
