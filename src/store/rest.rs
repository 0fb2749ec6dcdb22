//! REST-backed booking store
//!
//! The remote variant: bookings live in a REST collection and every
//! operation maps to one request. Non-2xx responses surface as transport
//! errors carrying the HTTP status and the response body text; responses
//! without a JSON content type are treated as empty. Unlike the original
//! client, requests carry a client-side timeout.

use crate::config::{BookingPolicy, RestStoreConfig};
use crate::domain::result::Result;
use crate::domain::{AgendeiError, Booking, NewBooking, StoreError};
use crate::store::BookingStore;
use crate::validation::{self, is_slot_available, normalize_phone};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Booking store speaking the `/consultas` collection contract
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    policy: BookingPolicy,
}

impl RestStore {
    /// Create a store targeting the configured base URL
    pub fn new(config: &RestStoreConfig, policy: BookingPolicy) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|e| {
            AgendeiError::Configuration(format!(
                "Invalid booking backend URL '{}': {e}",
                config.base_url
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AgendeiError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            policy,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Raise non-2xx responses as transport errors with status and body
    ///
    /// A 404 becomes `NotFound` when the request targeted a specific id.
    async fn check(
        response: reqwest::Response,
        id: Option<u64>,
    ) -> std::result::Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(StoreError::NotFound { id });
            }
        }

        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Transport {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a JSON body; `None` when the response carries no JSON
    async fn json_body<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> std::result::Result<Option<T>, StoreError> {
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        if !is_json {
            return Ok(None);
        }

        let body = response.json::<T>().await?;
        Ok(Some(body))
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

#[async_trait]
impl BookingStore for RestStore {
    async fn list(&self) -> Result<Vec<Booking>> {
        let response = self
            .client
            .get(self.endpoint("consultas"))
            .send()
            .await
            .map_err(StoreError::from)?;
        let response = Self::check(response, None).await?;

        let mut bookings: Vec<Booking> = Self::json_body(response)
            .await?
            .ok_or_else(|| StoreError::InvalidResponse("expected a JSON array".to_string()))?;
        bookings.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(bookings)
    }

    async fn create(&self, input: NewBooking) -> Result<Booking> {
        // Validate before going to the wire so a bad form never leaves the client
        validation::validate_new_booking(&input, &self.policy.open_hours(), Self::today())
            .map_err(AgendeiError::Validation)?;

        let response = self
            .client
            .post(self.endpoint("consultas"))
            .json(&input)
            .send()
            .await
            .map_err(StoreError::from)?;
        let response = Self::check(response, None).await?;

        let booking: Booking = Self::json_body(response)
            .await?
            .ok_or_else(|| StoreError::InvalidResponse("expected the created booking".to_string()))?;

        tracing::info!(booking_id = booking.id, "Booking created on remote backend");
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

        let response = self
            .client
            .put(self.endpoint(&format!("consultas/{id}/reagendar")))
            .json(&serde_json::json!({ "date": date, "time": time }))
            .send()
            .await
            .map_err(StoreError::from)?;
        let response = Self::check(response, Some(id)).await?;

        let booking: Booking = Self::json_body(response)
            .await?
            .ok_or_else(|| StoreError::InvalidResponse("expected the updated booking".to_string()))?;

        tracing::info!(booking_id = id, date = %date, time = %time, "Booking rescheduled on remote backend");
        Ok(booking)
    }

    async fn cancel(&self, id: u64, reason: &str) -> Result<Booking> {
        let response = self
            .client
            .put(self.endpoint(&format!("consultas/{id}/cancelar")))
            .json(&serde_json::json!({ "reason": reason }))
            .send()
            .await
            .map_err(StoreError::from)?;
        let response = Self::check(response, Some(id)).await?;

        let booking: Booking = Self::json_body(response)
            .await?
            .ok_or_else(|| StoreError::InvalidResponse("expected the cancelled booking".to_string()))?;

        tracing::info!(booking_id = id, "Booking cancelled on remote backend");
        Ok(booking)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let response = self
            .client
            .delete(self.endpoint(&format!("consultas/{id}")))
            .send()
            .await
            .map_err(StoreError::from)?;
        Self::check(response, Some(id)).await?;

        tracing::info!(booking_id = id, "Booking deleted on remote backend");
        Ok(())
    }
}
