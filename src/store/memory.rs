//! In-memory booking store
//!
//! Volatile backend used by tests and demos, and the reference for the
//! behavior the persistent backends must match.

use crate::config::BookingPolicy;
use crate::domain::result::Result;
use crate::domain::{next_id, AgendeiError, Booking, NewBooking, StoreError};
use crate::store::BookingStore;
use crate::validation::{self, is_slot_available, normalize_phone};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::sync::RwLock;

/// Booking store holding its list behind an `RwLock`
pub struct MemoryStore {
    bookings: RwLock<Vec<Booking>>,
    policy: BookingPolicy,
}

impl MemoryStore {
    /// Create an empty store with the given policy
    pub fn new(policy: BookingPolicy) -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
            policy,
        }
    }

    /// Create a store pre-seeded with bookings (test helper)
    pub fn with_bookings(policy: BookingPolicy, bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
            policy,
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Booking>> {
        let guard = self
            .bookings
            .read()
            .map_err(|e| AgendeiError::Other(format!("Store lock poisoned: {e}")))?;
        let mut bookings = guard.clone();
        bookings.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(bookings)
    }

    async fn create(&self, input: NewBooking) -> Result<Booking> {
        validation::validate_new_booking(&input, &self.policy.open_hours(), Self::today())
            .map_err(AgendeiError::Validation)?;

        let mut guard = self
            .bookings
            .write()
            .map_err(|e| AgendeiError::Other(format!("Store lock poisoned: {e}")))?;
        let id = next_id(&guard);
        let booking = input.into_booking(id);
        guard.insert(0, booking.clone());

        tracing::info!(booking_id = id, "Booking created");
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

        let mut guard = self
            .bookings
            .write()
            .map_err(|e| AgendeiError::Other(format!("Store lock poisoned: {e}")))?;
        let booking = guard
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound { id })?;

        booking.date = date.to_string();
        booking.time = time.to_string();

        tracing::info!(booking_id = id, date = %date, time = %time, "Booking rescheduled");
        Ok(booking.clone())
    }

    async fn cancel(&self, id: u64, reason: &str) -> Result<Booking> {
        let mut guard = self
            .bookings
            .write()
            .map_err(|e| AgendeiError::Other(format!("Store lock poisoned: {e}")))?;
        let booking = guard
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

        tracing::info!(booking_id = id, "Booking cancelled");
        Ok(booking.clone())
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut guard = self
            .bookings
            .write()
            .map_err(|e| AgendeiError::Other(format!("Store lock poisoned: {e}")))?;
        let before = guard.len();
        guard.retain(|b| b.id != id);
        if guard.len() == before {
            return Err(StoreError::NotFound { id }.into());
        }

        tracing::info!(booking_id = id, "Booking deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingKind, BookingStatus, Modality};

    fn store() -> MemoryStore {
        MemoryStore::new(BookingPolicy::default())
    }

    fn ana() -> NewBooking {
        NewBooking {
            patient_name: "Ana".to_string(),
            age: 30,
            phone: "11987654321".to_string(),
            kind: BookingKind::Consultation,
            modality: Modality::InPerson,
            procedure: "Fisioterapia".to_string(),
            date: "2099-01-01".to_string(),
            time: "09:00".to_string(),
            location: "Rua Guaicurus 1274, São Paulo, SP, 05756-360".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let store = store();
        let created = store.create(ana()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.status, BookingStatus::Scheduled);

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
        assert_eq!(all[0].patient_name, "Ana");
        assert_eq!(all[0].time, "09:00");
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = store();
        store.create(ana()).await.unwrap();
        let mut second = ana();
        second.patient_name = "Bruno".to_string();
        store.create(second).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let store = store();
        let mut input = ana();
        input.time = "19:00".to_string();
        let err = store.create(input).await.unwrap_err();
        assert!(matches!(err, AgendeiError::Validation(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_phone() {
        let store = store();
        store.create(ana()).await.unwrap();

        let hits = store.find_by_phone("(11) 98765-4321").await.unwrap();
        assert_eq!(hits.len(), 1);

        let misses = store.find_by_phone("11900000000").await.unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_phone_rejects_invalid_phone() {
        let store = store();
        let err = store.find_by_phone("123").await.unwrap_err();
        assert!(matches!(err, AgendeiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_reschedule_moves_slot() {
        let store = store();
        let created = store.create(ana()).await.unwrap();

        let updated = store
            .reschedule(created.id, "2099-02-02", "10:30")
            .await
            .unwrap();
        assert_eq!(updated.date, "2099-02-02");
        assert_eq!(updated.time, "10:30");
        assert_eq!(store.list().await.unwrap()[0].time, "10:30");
    }

    #[tokio::test]
    async fn test_reschedule_missing_id_leaves_store_unchanged() {
        let store = store();
        store.create(ana()).await.unwrap();
        let before = store.list().await.unwrap();

        let err = store.reschedule(99, "2099-02-02", "10:30").await.unwrap_err();
        assert!(matches!(
            err,
            AgendeiError::Store(StoreError::NotFound { id: 99 })
        ));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_reschedule_rejects_bad_slot() {
        let store = store();
        let created = store.create(ana()).await.unwrap();
        let err = store
            .reschedule(created.id, "2099-02-02", "18:01")
            .await
            .unwrap_err();
        assert!(matches!(err, AgendeiError::Validation(_)));
        assert_eq!(store.list().await.unwrap()[0].time, "09:00");
    }

    #[tokio::test]
    async fn test_cancel_sets_status_and_reason() {
        let store = store();
        let created = store.create(ana()).await.unwrap();
        let cancelled = store.cancel(created.id, "viagem").await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(cancelled.cancel_reason, Some("viagem".to_string()));
    }

    #[tokio::test]
    async fn test_cancel_twice_fails_and_keeps_first_reason() {
        let store = store();
        let created = store.create(ana()).await.unwrap();
        store.cancel(created.id, "viagem").await.unwrap();

        let err = store.cancel(created.id, "outro motivo").await.unwrap_err();
        assert!(matches!(
            err,
            AgendeiError::Store(StoreError::TerminalState { .. })
        ));

        let all = store.list().await.unwrap();
        assert_eq!(all[0].status, BookingStatus::Cancelled);
        assert_eq!(all[0].cancel_reason, Some("viagem".to_string()));
    }

    #[tokio::test]
    async fn test_cancel_missing_id() {
        let store = store();
        let err = store.cancel(5, "motivo").await.unwrap_err();
        assert!(matches!(
            err,
            AgendeiError::Store(StoreError::NotFound { id: 5 })
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = store();
        let created = store.create(ana()).await.unwrap();
        store.delete(created.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let store = store();
        let err = store.delete(1).await.unwrap_err();
        assert!(matches!(
            err,
            AgendeiError::Store(StoreError::NotFound { id: 1 })
        ));
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_after_delete() {
        let store = store();
        store.create(ana()).await.unwrap();
        let second = store.create(ana()).await.unwrap();
        store.delete(1).await.unwrap();
        let third = store.create(ana()).await.unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }
}
