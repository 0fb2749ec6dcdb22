//! JSON file booking store
//!
//! The local-persistence variant: the whole booking list lives in one JSON
//! array in a text file. Reads are tolerant (a missing or malformed file is
//! an empty list, never an error); writes go through a temp file and an
//! atomic rename so a failed write leaves the previous state intact.

use crate::config::BookingPolicy;
use crate::domain::result::Result;
use crate::domain::{next_id, AgendeiError, Booking, NewBooking, StoreError};
use crate::store::BookingStore;
use crate::validation::{self, is_slot_available, normalize_phone};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Booking store backed by a single JSON file
pub struct FileStore {
    path: PathBuf,
    policy: BookingPolicy,
    // Serializes read-modify-write cycles within this process
    guard: Mutex<()>,
}

impl FileStore {
    /// Create a store over the given file path
    ///
    /// The file is created lazily on the first write.
    pub fn new(path: impl AsRef<Path>, policy: BookingPolicy) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            policy,
            guard: Mutex::new(()),
        }
    }

    /// Read the booking list, tolerating a missing or malformed file
    fn load(&self) -> Vec<Booking> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Booking>>(&contents) {
            Ok(bookings) => bookings,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Booking file is malformed, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Persist the full list atomically: write a temp file, then rename
    fn persist(&self, bookings: &[Booking]) -> Result<()> {
        let json = serde_json::to_string_pretty(bookings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.guard
            .lock()
            .map_err(|e| AgendeiError::Other(format!("Store lock poisoned: {e}")))
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

#[async_trait]
impl BookingStore for FileStore {
    async fn list(&self) -> Result<Vec<Booking>> {
        let _guard = self.lock()?;
        let mut bookings = self.load();
        bookings.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(bookings)
    }

    async fn create(&self, input: NewBooking) -> Result<Booking> {
        validation::validate_new_booking(&input, &self.policy.open_hours(), Self::today())
            .map_err(AgendeiError::Validation)?;

        let _guard = self.lock()?;
        let mut bookings = self.load();
        let id = next_id(&bookings);
        let booking = input.into_booking(id);
        bookings.insert(0, booking.clone());
        self.persist(&bookings)?;

        tracing::info!(booking_id = id, path = %self.path.display(), "Booking created");
        Ok(booking)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Vec<Booking>> {
        let normalized = normalize_phone(phone)
            .ok_or_else(|| AgendeiError::Validation("Telefone inválido.".to_string()))?;
        let all = self.list().await?;
        Ok(all.into_iter().filter(|b| b.phone == normalized).collect())
    }

    async fn reschedule(&self, id: u64, date: &str, time: &str) -> Result<Booking> {
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(AgendeiError::Validation("Data inválida.".to_string()));
        }
        if !is_slot_available(time, &self.policy.open_hours()) {
            return Err(AgendeiError::Validation("Horário indisponível.".to_string()));
        }

        let _guard = self.lock()?;
        let mut bookings = self.load();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound { id })?;

        booking.date = date.to_string();
        booking.time = time.to_string();
        let updated = booking.clone();
        self.persist(&bookings)?;

        tracing::info!(booking_id = id, date = %date, time = %time, "Booking rescheduled");
        Ok(updated)
    }

    async fn cancel(&self, id: u64, reason: &str) -> Result<Booking> {
        let _guard = self.lock()?;
        let mut bookings = self.load();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound { id })?;

        if booking.status.is_terminal() {
            return Err(StoreError::TerminalState {
                id,
                status: booking.status,
            }
            .into());
        }

        booking.status = crate::domain::BookingStatus::Cancelled;
        booking.cancel_reason = Some(reason.to_string());
        let updated = booking.clone();
        self.persist(&bookings)?;

        tracing::info!(booking_id = id, "Booking cancelled");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let _guard = self.lock()?;
        let mut bookings = self.load();
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            return Err(StoreError::NotFound { id }.into());
        }
        self.persist(&bookings)?;

        tracing::info!(booking_id = id, "Booking deleted");
        Ok(())
    }
}
