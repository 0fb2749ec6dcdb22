//! Booking form controller
//!
//! Orchestrates user input for the booking workflow: applies the input
//! discipline of the original form (masking, digit caps), runs the aggregate
//! validation, assigns the clinic unit, and drives the store. The form
//! lifecycle is an explicit tagged-union state instead of ad hoc flags, so
//! transitions are enumerable and testable.

use crate::config::BookingPolicy;
use crate::domain::location::LocationStrategy;
use crate::domain::result::Result;
use crate::domain::{AgendeiError, Booking, BookingKind, Modality, NewBooking};
use crate::format::{mask_phone, only_digits};
use crate::store::BookingStore;
use crate::validation::{self, is_slot_available};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Form lifecycle state
///
/// Transitions:
/// - `SelectingType -> FillingDetails` on choosing a kind
/// - `FillingDetails -> Submitting -> Success` on a valid submit
/// - any failure lands in `Error`; the next edit returns to `FillingDetails`
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// Waiting for the user to choose Consultation or Exam
    SelectingType,
    /// Collecting booking fields
    FillingDetails,
    /// Store call in flight
    Submitting,
    /// Booking created; transient fields cleared
    Success,
    /// Validation or store failure, message surfaced verbatim
    Error(String),
}

/// Current form fields, kept as the user typed them (masked phone, raw age)
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub kind: Option<BookingKind>,
    pub modality: Modality,
    pub procedure: String,
    pub date: String,
    pub time: String,
}

/// Controller over the booking form
pub struct BookingForm {
    store: Arc<dyn BookingStore>,
    policy: BookingPolicy,
    locations: Box<dyn LocationStrategy>,
    state: FormState,
    fields: FormFields,
}

impl BookingForm {
    /// Create a fresh form over the given store and policy
    pub fn new(
        store: Arc<dyn BookingStore>,
        policy: BookingPolicy,
        locations: Box<dyn LocationStrategy>,
    ) -> Self {
        Self {
            store,
            policy,
            locations,
            state: FormState::SelectingType,
            fields: FormFields::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Choose Consultation or Exam; resets the chosen procedure
    pub fn select_kind(&mut self, kind: BookingKind) {
        self.fields.kind = Some(kind);
        self.fields.procedure.clear();
        self.state = FormState::FillingDetails;
    }

    pub fn set_name(&mut self, name: &str) {
        self.resume_editing();
        self.fields.name = name.to_string();
    }

    /// Age input keeps digits only, capped at three
    pub fn set_age(&mut self, age: &str) {
        self.resume_editing();
        self.fields.age = only_digits(age).chars().take(3).collect();
    }

    /// Phone input is progressively masked as the user types
    pub fn set_phone(&mut self, phone: &str) {
        self.resume_editing();
        self.fields.phone = mask_phone(phone);
    }

    pub fn set_modality(&mut self, modality: Modality) {
        self.resume_editing();
        self.fields.modality = modality;
    }

    pub fn set_procedure(&mut self, procedure: &str) {
        self.resume_editing();
        self.fields.procedure = procedure.to_string();
    }

    pub fn set_date(&mut self, date: &str) {
        self.resume_editing();
        self.fields.date = date.to_string();
    }

    /// Set the time; answers whether the slot is inside the open window
    pub fn set_time(&mut self, time: &str) -> bool {
        self.resume_editing();
        self.fields.time = time.to_string();
        is_slot_available(time, &self.policy.open_hours())
    }

    /// Editing after a failure returns the form to `FillingDetails`
    fn resume_editing(&mut self) {
        if matches!(self.state, FormState::Error(_)) {
            self.state = FormState::FillingDetails;
        }
    }

    /// Submit the form
    ///
    /// Runs the aggregate validation, creates the booking through the store,
    /// and reports the outcome through the form state. On success the
    /// transient fields (procedure, date, time) are cleared while the
    /// identity fields (name, phone) are kept for the next booking. No
    /// automatic retry: a failure waits for the user to resubmit.
    pub async fn submit(&mut self) -> &FormState {
        let Some(kind) = self.fields.kind else {
            self.state = FormState::Error("Escolha o tipo de atendimento.".to_string());
            return &self.state;
        };

        let input = NewBooking {
            patient_name: self.fields.name.trim().to_string(),
            age: self.fields.age.parse().unwrap_or(0),
            phone: only_digits(&self.fields.phone),
            kind,
            modality: self.fields.modality,
            procedure: self.fields.procedure.clone(),
            date: self.fields.date.clone(),
            time: self.fields.time.clone(),
            location: self.locations.next_location(),
        };

        if let Err(msg) =
            validation::validate_new_booking(&input, &self.policy.open_hours(), Self::today())
        {
            self.state = FormState::Error(msg);
            return &self.state;
        }

        self.state = FormState::Submitting;

        match self.store.create(input).await {
            Ok(booking) => {
                tracing::info!(booking_id = booking.id, "Form submitted successfully");
                self.fields.procedure.clear();
                self.fields.date.clear();
                self.fields.time.clear();
                self.state = FormState::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Form submission failed");
                self.state = FormState::Error(user_message(e));
            }
        }

        &self.state
    }

    /// All bookings, newest first
    pub async fn my_bookings(&self) -> Result<Vec<Booking>> {
        self.store.list().await
    }

    /// Bookings for a phone number
    pub async fn find_by_phone(&self, phone: &str) -> Result<Vec<Booking>> {
        self.store.find_by_phone(phone).await
    }

    /// Move a booking to a new slot
    pub async fn reschedule(&self, id: u64, date: &str, time: &str) -> Result<Booking> {
        self.store.reschedule(id, date, time).await
    }

    /// Cancel a booking with a reason
    pub async fn cancel(&self, id: u64, reason: &str) -> Result<Booking> {
        self.store.cancel(id, reason).await
    }

    /// Permanently remove a booking
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.store.delete(id).await
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

/// User-facing message for a failure, verbatim where one exists
fn user_message(err: AgendeiError) -> String {
    match err {
        AgendeiError::Validation(msg) => msg,
        AgendeiError::Store(store_err) => store_err.to_string(),
        other => other.to_string(),
    }
}
