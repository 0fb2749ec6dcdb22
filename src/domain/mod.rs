//! Core domain types and models
//!
//! This module contains the booking entity, the fixed procedure catalogue,
//! clinic unit selection strategies, and the error hierarchy.

pub mod booking;
pub mod catalogue;
pub mod errors;
pub mod location;
pub mod result;

pub use booking::{next_id, Booking, BookingKind, BookingStatus, Modality, NewBooking};
pub use errors::{AgendeiError, StoreError};
pub use result::Result;
