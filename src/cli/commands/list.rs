//! List command implementation
//!
//! This module implements the `list` command for displaying bookings,
//! optionally filtered by patient phone.

use crate::config::load_config;
use crate::format::{format_date_local, mask_phone};
use crate::store::create_store;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by patient phone
    #[arg(long)]
    pub phone: Option<String>,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing bookings");

        println!("📋 Bookings");
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

        let bookings = match &self.phone {
            Some(phone) => store.find_by_phone(phone).await,
            None => store.list().await,
        };
        let bookings = match bookings {
            Ok(b) => b,
            Err(e) => {
                println!("❌ Failed to load bookings");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        if bookings.is_empty() {
            println!("No bookings found.");
            println!("Run 'agendei book' to create one.");
            return Ok(0);
        }

        println!("Found {} booking(s):", bookings.len());
        println!();
        println!(
            "{:<6} {:<20} {:<16} {:<28} {:<12} {:<7} {:<12}",
            "Id", "Patient", "Phone", "Procedure", "Date", "Time", "Status"
        );
        println!("{}", "-".repeat(105));

        for booking in &bookings {
            let status = match booking.status {
                crate::domain::BookingStatus::Scheduled => "🗓️  Scheduled".to_string(),
                crate::domain::BookingStatus::Completed => "✅ Completed".to_string(),
                crate::domain::BookingStatus::Cancelled => match &booking.cancel_reason {
                    Some(reason) => format!("❌ Cancelled ({reason})"),
                    None => "❌ Cancelled".to_string(),
                },
            };

            println!(
                "{:<6} {:<20} {:<16} {:<28} {:<12} {:<7} {:<12}",
                booking.id,
                booking.patient_name,
                mask_phone(&booking.phone),
                booking.procedure,
                format_date_local(&booking.date),
                booking.time,
                status
            );
        }

        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_defaults() {
        let args = ListArgs { phone: None };
        assert!(args.phone.is_none());
    }

    #[test]
    fn test_list_args_with_phone() {
        let args = ListArgs {
            phone: Some("(11) 98765-4321".to_string()),
        };
        assert_eq!(args.phone, Some("(11) 98765-4321".to_string()));
    }
}
