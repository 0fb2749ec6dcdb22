//! Book command implementation
//!
//! This module implements the `book` command for creating a booking
//! through the form controller.

use crate::config::load_config;
use crate::controller::{BookingForm, FormState};
use crate::domain::{BookingKind, Modality};
use crate::format::{add_minutes, format_date_local, mask_phone};
use crate::store::create_store;
use clap::Args;

/// Arguments for the book command
#[derive(Args, Debug)]
pub struct BookArgs {
    /// Patient name
    #[arg(long)]
    pub name: String,

    /// Patient age in years
    #[arg(long)]
    pub age: String,

    /// Patient phone, with or without mask
    #[arg(long)]
    pub phone: String,

    /// Kind of appointment (consultation or exam)
    #[arg(long)]
    pub kind: BookingKind,

    /// Modality (in-person or telemedicine)
    #[arg(long, default_value = "in-person")]
    pub modality: Modality,

    /// Procedure, one of the catalogue entries for the kind
    #[arg(long)]
    pub procedure: String,

    /// Appointment date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Appointment time, HH:MM
    #[arg(long)]
    pub time: String,
}

impl BookArgs {
    /// Execute the book command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(procedure = %self.procedure, "Booking appointment");

        println!("📅 Booking appointment");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let store = match create_store(&config) {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to create booking store");
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        let mut form = BookingForm::new(
            store,
            config.booking.clone(),
            config.locations.build_strategy(),
        );
        form.select_kind(self.kind);
        form.set_name(&self.name);
        form.set_age(&self.age);
        form.set_phone(&self.phone);
        form.set_modality(self.modality);
        form.set_procedure(&self.procedure);
        form.set_date(&self.date);
        if !form.set_time(&self.time) {
            println!("⚠️  Horário fora da janela de atendimento");
        }

        match form.submit().await {
            FormState::Success => {}
            FormState::Error(msg) => {
                println!("❌ {msg}");
                return Ok(1); // Validation error exit code
            }
            other => {
                println!("❌ Unexpected form state: {other:?}");
                return Ok(5);
            }
        }

        let bookings = match form.my_bookings().await {
            Ok(b) => b,
            Err(e) => {
                println!("❌ Failed to read back bookings");
                println!("   Error: {e}");
                return Ok(5);
            }
        };
        let Some(booking) = bookings.first() else {
            println!("❌ Booking was not persisted");
            return Ok(5);
        };

        println!("✅ Agendamento confirmado");
        println!();
        println!("  Id:           {}", booking.id);
        println!("  Paciente:     {}", booking.patient_name);
        println!("  Telefone:     {}", mask_phone(&booking.phone));
        println!("  Procedimento: {} ({})", booking.procedure, booking.kind);
        println!("  Data:         {}", format_date_local(&booking.date));
        println!("  Horário:      {}", booking.time);
        match booking.modality {
            Modality::InPerson => {
                println!("  Local:        {}", booking.location);
                println!(
                    "  Chegada até:  {}",
                    add_minutes(&booking.time, config.booking.arrival_grace_minutes)
                );
            }
            Modality::Telemedicine => {
                println!("  Modalidade:   Telemedicina (link enviado por telefone)");
            }
        }
        println!();
        Ok(0)
    }
}
