//! Configuration management
//!
//! TOML configuration with `${VAR}` substitution and `AGENDEI_*` environment
//! overrides, mirroring how the rest of the toolkit is wired: pick a store
//! backend, set the booking policy, list the clinic units, tune logging.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    AgendeiConfig, ApplicationConfig, BookingPolicy, FileStoreConfig, LocationStrategyKind,
    LocationsConfig, LoggingConfig, RestStoreConfig, StoreBackend, StoreConfig,
};
