//! Pure validation predicates
//!
//! Side-effect-free checks for phone numbers, time slots, ages, and patient
//! identifiers, plus the aggregate check applied to a whole booking before it
//! is persisted. No function here panics or throws; everything answers with
//! a boolean, an `Option`, or a user-facing message.

pub mod age;
pub mod identifier;
pub mod phone;
pub mod slot;

pub use age::{age_in_years, is_adult_enough, DEFAULT_MIN_AGE};
pub use identifier::{is_identifier_valid, IdentifierPolicy};
pub use phone::{is_phone_valid, normalize_phone};
pub use slot::{is_slot_available, OpenHours};

use crate::domain::catalogue;
use crate::domain::NewBooking;
use chrono::NaiveDate;

/// Aggregate validation for a new booking
///
/// Checks run in form order and the first failure wins, so the message
/// matches what the user last touched. Messages are surfaced verbatim to the
/// presentation layer.
pub fn validate_new_booking(
    input: &NewBooking,
    hours: &OpenHours,
    today: NaiveDate,
) -> std::result::Result<(), String> {
    if input.patient_name.trim().is_empty() {
        return Err("Informe o nome do paciente.".to_string());
    }
    if input.age == 0 || input.age > 999 {
        return Err("Idade inválida.".to_string());
    }
    if !is_phone_valid(&input.phone) {
        return Err("Telefone inválido.".to_string());
    }
    if input.procedure.is_empty() {
        return Err("Escolha um procedimento.".to_string());
    }
    if !catalogue::is_in_catalogue(input.kind, &input.procedure) {
        return Err("Procedimento inválido para o tipo selecionado.".to_string());
    }
    if input.date.is_empty() {
        return Err("Escolha a data.".to_string());
    }
    match NaiveDate::parse_from_str(&input.date, "%Y-%m-%d") {
        Ok(date) if date >= today => {}
        Ok(_) => return Err("A data deve ser hoje ou futura.".to_string()),
        Err(_) => return Err("Data inválida.".to_string()),
    }
    if input.time.is_empty() {
        return Err("Escolha o horário.".to_string());
    }
    if !is_slot_available(&input.time, hours) {
        return Err("Horário indisponível.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingKind, Modality};

    fn valid_input() -> NewBooking {
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn test_valid_booking_passes() {
        let result = validate_new_booking(&valid_input(), &OpenHours::default(), today());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = valid_input();
        input.patient_name = "   ".to_string();
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(result, Err("Informe o nome do paciente.".to_string()));
    }

    #[test]
    fn test_zero_age_rejected() {
        let mut input = valid_input();
        input.age = 0;
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(result, Err("Idade inválida.".to_string()));
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let mut input = valid_input();
        input.phone = "123".to_string();
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(result, Err("Telefone inválido.".to_string()));
    }

    #[test]
    fn test_procedure_must_match_kind() {
        let mut input = valid_input();
        input.procedure = "Hidroterapia".to_string(); // exam procedure on a consultation
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(
            result,
            Err("Procedimento inválido para o tipo selecionado.".to_string())
        );
    }

    #[test]
    fn test_past_date_rejected() {
        let mut input = valid_input();
        input.date = "2020-01-01".to_string();
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(result, Err("A data deve ser hoje ou futura.".to_string()));
    }

    #[test]
    fn test_today_is_accepted() {
        let mut input = valid_input();
        input.date = "2026-08-24".to_string();
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_unavailable_slot_rejected() {
        let mut input = valid_input();
        input.time = "19:00".to_string();
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(result, Err("Horário indisponível.".to_string()));
    }

    #[test]
    fn test_first_failure_wins() {
        let mut input = valid_input();
        input.patient_name = String::new();
        input.phone = "bad".to_string();
        let result = validate_new_booking(&input, &OpenHours::default(), today());
        assert_eq!(result, Err("Informe o nome do paciente.".to_string()));
    }
}
