//! Fixed procedure catalogue
//!
//! The clinic offers a fixed set of procedures per booking kind. A booking's
//! `procedure` must be a member of the catalogue for its `kind`.

use super::booking::BookingKind;

/// Procedures bookable as a consultation
pub const CONSULTATIONS: &[&str] = &[
    "Fisioterapia",
    "Terapia Ocupacional",
    "Fonoaudiologia",
    "Psicologia",
];

/// Procedures bookable as an exam or therapeutic activity
pub const EXAMS: &[&str] = &[
    "Nutrição",
    "Odontologia",
    "Condicionamento Físico",
    "Hidroterapia",
    "Oficinas Terapêuticas",
    "Habilitação e Reabilitação Profissional",
];

/// Catalogue active for a booking kind
pub fn procedures_for(kind: BookingKind) -> &'static [&'static str] {
    match kind {
        BookingKind::Consultation => CONSULTATIONS,
        BookingKind::Exam => EXAMS,
    }
}

/// Whether a procedure belongs to the catalogue of the given kind
pub fn is_in_catalogue(kind: BookingKind, procedure: &str) -> bool {
    procedures_for(kind).contains(&procedure)
}
