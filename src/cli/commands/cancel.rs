//! Cancel command implementation
//!
//! This module implements the `cancel` command for cancelling a booking
//! with a recorded reason.

use crate::config::load_config;
use crate::domain::{AgendeiError, StoreError};
use crate::store::create_store;
use clap::Args;

/// Arguments for the cancel command
#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Booking id
    pub id: u64,

    /// Cancellation reason
    #[arg(long)]
    pub reason: String,
}

impl CancelArgs {
    /// Execute the cancel command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(booking_id = self.id, "Cancelling booking");

        println!("🚫 Cancelling booking {}", self.id);
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

        match store.cancel(self.id, &self.reason).await {
            Ok(booking) => {
                println!("✅ Agendamento cancelado");
                println!();
                println!("  Id:       {}", booking.id);
                println!("  Paciente: {}", booking.patient_name);
                println!(
                    "  Motivo:   {}",
                    booking.cancel_reason.as_deref().unwrap_or("-")
                );
                println!();
                Ok(0)
            }
            Err(AgendeiError::Store(StoreError::NotFound { id })) => {
                println!("❌ Booking {id} not found");
                Ok(1) // Validation error exit code
            }
            Err(AgendeiError::Store(StoreError::TerminalState { id, status })) => {
                println!("❌ Booking {id} is already {status}");
                Ok(1)
            }
            Err(e) => {
                println!("❌ Failed to cancel booking");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}
