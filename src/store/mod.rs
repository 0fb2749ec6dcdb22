//! Booking store abstraction and backends
//!
//! This module defines the trait every booking store implements, plus three
//! backends: an in-memory store for tests and demos, a JSON file store (the
//! local-persistence variant), and a REST-backed store (the remote variant).
//! A config-driven factory picks one.

pub mod file;
pub mod memory;
pub mod rest;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::config::{AgendeiConfig, StoreBackend};
use crate::domain::result::Result;
use crate::domain::{Booking, NewBooking};
use async_trait::async_trait;
use std::sync::Arc;

/// Durable collection of bookings
///
/// Every mutating operation persists the full updated list atomically from
/// the caller's perspective: a write either fully succeeds or leaves prior
/// state intact.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// All bookings, most recently created first (id descending)
    async fn list(&self) -> Result<Vec<Booking>>;

    /// Validate, assign the next id and default status, persist
    ///
    /// # Errors
    ///
    /// Returns a validation error when any field fails the booking policy.
    async fn create(&self, input: NewBooking) -> Result<Booking>;

    /// Bookings whose normalized phone equals the given one
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the phone itself is not valid.
    async fn find_by_phone(&self, phone: &str) -> Result<Vec<Booking>>;

    /// Move a booking to a new date and time
    ///
    /// # Errors
    ///
    /// Not-found when the id is absent; validation error when the new slot
    /// fails the open-hours predicate or the date does not parse.
    async fn reschedule(&self, id: u64, date: &str, time: &str) -> Result<Booking>;

    /// Cancel a booking, recording the reason
    ///
    /// # Errors
    ///
    /// Not-found when the id is absent; terminal-state error when the
    /// booking is already cancelled or completed.
    async fn cancel(&self, id: u64, reason: &str) -> Result<Booking>;

    /// Permanently remove a booking
    ///
    /// # Errors
    ///
    /// Not-found when the id is absent.
    async fn delete(&self, id: u64) -> Result<()>;
}

/// Create a booking store based on the configuration
///
/// Examines `store.backend` and builds the matching implementation.
pub fn create_store(config: &AgendeiConfig) -> Result<Arc<dyn BookingStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!(backend = "memory", "Creating booking store");
            Ok(Arc::new(MemoryStore::new(config.booking.clone())))
        }
        StoreBackend::File => {
            let file_config = config.store.file.clone().unwrap_or_default();
            tracing::info!(backend = "file", path = %file_config.path, "Creating booking store");
            Ok(Arc::new(FileStore::new(
                &file_config.path,
                config.booking.clone(),
            )))
        }
        StoreBackend::Rest => {
            let rest_config = config.store.rest.as_ref().ok_or_else(|| {
                crate::domain::AgendeiError::Configuration(
                    "REST store selected but [store.rest] is not configured".to_string(),
                )
            })?;
            tracing::info!(backend = "rest", base_url = %rest_config.base_url, "Creating booking store");
            let store = RestStore::new(rest_config, config.booking.clone())?;
            Ok(Arc::new(store))
        }
    }
}
