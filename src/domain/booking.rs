//! Booking entity and related enums
//!
//! A booking is a scheduled consultation or exam record. This is the only
//! entity with real structure in the system; every store backend persists
//! the same shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    /// Clinical consultation (Fisioterapia, Psicologia, ...)
    Consultation,
    /// Exam or therapeutic activity (Nutrição, Hidroterapia, ...)
    Exam,
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingKind::Consultation => write!(f, "Consultation"),
            BookingKind::Exam => write!(f, "Exam"),
        }
    }
}

impl FromStr for BookingKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "consultation" | "consulta" => Ok(BookingKind::Consultation),
            "exam" | "exame" => Ok(BookingKind::Exam),
            _ => Err(format!(
                "Invalid booking kind: {s}. Must be one of: consultation, exam"
            )),
        }
    }
}

/// How the patient attends the appointment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    /// At one of the clinic units
    #[default]
    InPerson,
    /// Remote video appointment
    Telemedicine,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modality::InPerson => write!(f, "InPerson"),
            Modality::Telemedicine => write!(f, "Telemedicine"),
        }
    }
}

impl FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in-person" | "inperson" | "presencial" => Ok(Modality::InPerson),
            "telemedicine" | "telemedicina" => Ok(Modality::Telemedicine),
            _ => Err(format!(
                "Invalid modality: {s}. Must be one of: in-person, telemedicine"
            )),
        }
    }
}

/// Lifecycle status of a booking
///
/// `Scheduled` is the only non-terminal state. Transitions are limited to
/// `Scheduled -> Cancelled` and `Scheduled -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Scheduled,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Returns true if no further transition is permitted from this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Scheduled => write!(f, "Scheduled"),
            BookingStatus::Cancelled => write!(f, "Cancelled"),
            BookingStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A stored booking record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique, immutable, monotonically assigned id
    pub id: u64,

    /// Patient name, non-empty
    pub patient_name: String,

    /// Patient age in years, parsed from digit-only input
    pub age: u32,

    /// Normalized phone: digits only, 10 or 11 of them
    pub phone: String,

    pub kind: BookingKind,

    pub modality: Modality,

    /// One of the fixed catalogue entries for `kind`
    pub procedure: String,

    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,

    /// 24-hour `HH:MM`, inside the clinic's open window
    pub time: String,

    /// Clinic unit assigned at creation time
    pub location: String,

    pub status: BookingStatus,

    /// Reason recorded when the booking is cancelled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
}

/// Input for creating a booking: a `Booking` minus `id` and `status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub patient_name: String,
    pub age: u32,
    pub phone: String,
    pub kind: BookingKind,
    pub modality: Modality,
    pub procedure: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl NewBooking {
    /// Materialize a stored record from this input
    ///
    /// The id comes from the store's `next_id`; status always starts at
    /// `Scheduled`.
    pub fn into_booking(self, id: u64) -> Booking {
        Booking {
            id,
            patient_name: self.patient_name,
            age: self.age,
            phone: self.phone,
            kind: self.kind,
            modality: self.modality,
            procedure: self.procedure,
            date: self.date,
            time: self.time,
            location: self.location,
            status: BookingStatus::Scheduled,
            cancel_reason: None,
        }
    }
}

/// Next id for a booking list: `max(existing) + 1`, or 1 when empty
pub fn next_id(bookings: &[Booking]) -> u64 {
    bookings.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_with_id(id: u64) -> Booking {
        Booking {
            id,
            patient_name: "Ana".to_string(),
            age: 30,
            phone: "11987654321".to_string(),
            kind: BookingKind::Consultation,
            modality: Modality::InPerson,
            procedure: "Fisioterapia".to_string(),
            date: "2099-01-01".to_string(),
            time: "09:00".to_string(),
            location: "Rua Guaicurus 1274, São Paulo, SP, 05756-360".to_string(),
            status: BookingStatus::Scheduled,
            cancel_reason: None,
        }
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_with_gaps() {
        let list = vec![booking_with_id(1), booking_with_id(3), booking_with_id(5)];
        assert_eq!(next_id(&list), 6);
    }

    #[test]
    fn test_status_terminality() {
        assert!(!BookingStatus::Scheduled.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "consultation".parse::<BookingKind>().unwrap(),
            BookingKind::Consultation
        );
        assert_eq!("Exame".parse::<BookingKind>().unwrap(), BookingKind::Exam);
        assert!("surgery".parse::<BookingKind>().is_err());
    }

    #[test]
    fn test_modality_from_str() {
        assert_eq!(
            "telemedicina".parse::<Modality>().unwrap(),
            Modality::Telemedicine
        );
        assert_eq!(
            "in-person".parse::<Modality>().unwrap(),
            Modality::InPerson
        );
        assert!("hybrid".parse::<Modality>().is_err());
    }

    #[test]
    fn test_into_booking_assigns_defaults() {
        let input = NewBooking {
            patient_name: "Ana".to_string(),
            age: 30,
            phone: "11987654321".to_string(),
            kind: BookingKind::Consultation,
            modality: Modality::Telemedicine,
            procedure: "Psicologia".to_string(),
            date: "2099-01-01".to_string(),
            time: "10:30".to_string(),
            location: "Rua Guaicurus 1274, São Paulo, SP, 05756-360".to_string(),
        };

        let booking = input.into_booking(7);
        assert_eq!(booking.id, 7);
        assert_eq!(booking.status, BookingStatus::Scheduled);
        assert_eq!(booking.cancel_reason, None);
    }

    #[test]
    fn test_booking_serialization_round_trip() {
        let booking = booking_with_id(2);
        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(booking, back);
    }

    #[test]
    fn test_cancel_reason_omitted_when_none() {
        let booking = booking_with_id(1);
        let json = serde_json::to_string(&booking).unwrap();
        assert!(!json.contains("cancel_reason"));
    }
}
