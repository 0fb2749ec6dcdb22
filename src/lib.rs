// Agendei - Clinic Appointment Booking Tool
// Copyright (c) 2025 Agendei Contributors
// Licensed under the MIT License

//! # Agendei - Clinic Appointment Booking
//!
//! Agendei books consultations and exams for a rehabilitation clinic. It
//! validates patient input against the clinic's business rules, assigns a
//! clinic unit, and persists bookings to a configurable backend.
//!
//! ## Architecture
//!
//! Agendei follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`controller`] - Booking form state machine
//! - [`store`] - Booking persistence backends (memory, file, REST)
//! - [`validation`] - Business-rule predicates and aggregate validation
//! - [`format`] - Input masks and display formatting
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agendei::config::AgendeiConfig;
//! use agendei::store::create_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AgendeiConfig::from_file("agendei.toml")?;
//!     let store = create_store(&config)?;
//!
//!     for booking in store.list().await? {
//!         println!("{}: {} at {}", booking.id, booking.procedure, booking.time);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Agendei uses the [`domain::AgendeiError`] type for all errors:
//!
//! ```rust,no_run
//! use agendei::domain::AgendeiError;
//!
//! fn example() -> Result<(), AgendeiError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = agendei::config::AgendeiConfig::from_file("agendei.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Agendei uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting booking");
//! warn!(booking_id = 3, "Slot outside open window");
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod domain;
pub mod format;
pub mod logging;
pub mod store;
pub mod validation;
