//! Reschedule command implementation
//!
//! This module implements the `reschedule` command for moving a booking
//! to a new date and time.

use crate::config::load_config;
use crate::domain::{AgendeiError, StoreError};
use crate::format::format_date_local;
use crate::store::create_store;
use clap::Args;

/// Arguments for the reschedule command
#[derive(Args, Debug)]
pub struct RescheduleArgs {
    /// Booking id
    pub id: u64,

    /// New date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// New time, HH:MM
    #[arg(long)]
    pub time: String,
}

impl RescheduleArgs {
    /// Execute the reschedule command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(booking_id = self.id, "Rescheduling booking");

        println!("🔄 Rescheduling booking {}", self.id);
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

        match store.reschedule(self.id, &self.date, &self.time).await {
            Ok(booking) => {
                println!("✅ Agendamento remarcado");
                println!();
                println!("  Id:       {}", booking.id);
                println!("  Paciente: {}", booking.patient_name);
                println!("  Data:     {}", format_date_local(&booking.date));
                println!("  Horário:  {}", booking.time);
                println!();
                Ok(0)
            }
            Err(AgendeiError::Validation(msg)) => {
                println!("❌ {msg}");
                Ok(1) // Validation error exit code
            }
            Err(AgendeiError::Store(StoreError::NotFound { id })) => {
                println!("❌ Booking {id} not found");
                Ok(1)
            }
            Err(e) => {
                println!("❌ Failed to reschedule booking");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reschedule_args_creation() {
        let args = RescheduleArgs {
            id: 3,
            date: "2099-02-02".to_string(),
            time: "10:00".to_string(),
        };
        assert_eq!(args.id, 3);
    }
}
