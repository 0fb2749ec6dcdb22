//! End-to-end booking workflow tests against the in-memory store

use agendei::config::BookingPolicy;
use agendei::controller::{BookingForm, FormState};
use agendei::domain::location::RoundRobinStrategy;
use agendei::domain::{AgendeiError, BookingKind, BookingStatus, Modality, StoreError};
use agendei::store::{BookingStore, MemoryStore};
use std::sync::Arc;

fn new_form(store: Arc<MemoryStore>) -> BookingForm {
    BookingForm::new(
        store,
        BookingPolicy::default(),
        Box::new(RoundRobinStrategy::new(vec![
            "Unidade Centro".to_string(),
            "Unidade Sul".to_string(),
        ])),
    )
}

fn fill_valid(form: &mut BookingForm) {
    form.select_kind(BookingKind::Consultation);
    form.set_name("Ana");
    form.set_age("30");
    form.set_phone("11987654321");
    form.set_modality(Modality::InPerson);
    form.set_procedure("Fisioterapia");
    form.set_date("2099-01-01");
    form.set_time("09:00");
}

#[tokio::test]
async fn test_full_booking_lifecycle() {
    let store = Arc::new(MemoryStore::new(BookingPolicy::default()));
    let mut form = new_form(store.clone());

    fill_valid(&mut form);
    assert_eq!(*form.submit().await, FormState::Success);

    // Book a second appointment reusing the kept identity fields
    form.set_procedure("Psicologia");
    form.set_date("2099-01-02");
    form.set_time("14:00");
    assert_eq!(*form.submit().await, FormState::Success);

    let bookings = store.list().await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, 2);
    assert_eq!(bookings[0].procedure, "Psicologia");
    assert_eq!(bookings[1].procedure, "Fisioterapia");

    // Units alternate round-robin across creations
    assert_eq!(bookings[1].location, "Unidade Centro");
    assert_eq!(bookings[0].location, "Unidade Sul");

    // Reschedule the first, cancel the second, delete the first
    let moved = store.reschedule(1, "2099-02-01", "10:00").await.unwrap();
    assert_eq!(moved.date, "2099-02-01");

    let cancelled = store.cancel(2, "viagem").await.unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.cancel_reason, Some("viagem".to_string()));

    store.delete(1).await.unwrap();
    let remaining = store.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
}

#[tokio::test]
async fn test_search_by_phone_accepts_masked_input() {
    let store = Arc::new(MemoryStore::new(BookingPolicy::default()));
    let mut form = new_form(store.clone());
    fill_valid(&mut form);
    form.submit().await;

    let masked = form.find_by_phone("(11) 98765-4321").await.unwrap();
    assert_eq!(masked.len(), 1);

    let bare = form.find_by_phone("11987654321").await.unwrap();
    assert_eq!(bare.len(), 1);
    assert_eq!(masked, bare);
}

#[tokio::test]
async fn test_invalid_submission_reports_first_failure() {
    let store = Arc::new(MemoryStore::new(BookingPolicy::default()));
    let mut form = new_form(store.clone());

    form.select_kind(BookingKind::Exam);
    form.set_name("");
    form.set_age("30");
    form.set_phone("11987654321");
    form.set_procedure("Hidroterapia");
    form.set_date("2099-01-01");
    form.set_time("09:00");

    assert_eq!(
        *form.submit().await,
        FormState::Error("Informe o nome do paciente.".to_string())
    );
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_exam_procedure_must_match_kind() {
    let store = Arc::new(MemoryStore::new(BookingPolicy::default()));
    let mut form = new_form(store.clone());

    // Fisioterapia is a consultation, not an exam
    form.select_kind(BookingKind::Exam);
    form.set_name("Ana");
    form.set_age("30");
    form.set_phone("11987654321");
    form.set_procedure("Fisioterapia");
    form.set_date("2099-01-01");
    form.set_time("09:00");

    assert_eq!(
        *form.submit().await,
        FormState::Error("Procedimento inválido para o tipo selecionado.".to_string())
    );
}

#[tokio::test]
async fn test_cancel_is_idempotent_only_in_effect() {
    let store = Arc::new(MemoryStore::new(BookingPolicy::default()));
    let mut form = new_form(store.clone());
    fill_valid(&mut form);
    form.submit().await;

    store.cancel(1, "imprevisto").await.unwrap();
    let err = store.cancel(1, "outro motivo").await.unwrap_err();
    assert!(matches!(
        err,
        AgendeiError::Store(StoreError::TerminalState { id: 1, .. })
    ));

    // First reason survives
    let bookings = store.list().await.unwrap();
    assert_eq!(bookings[0].cancel_reason, Some("imprevisto".to_string()));
}
