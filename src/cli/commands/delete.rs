//! Delete command implementation
//!
//! This module implements the `delete` command for permanently removing
//! a booking record.

use crate::config::load_config;
use crate::domain::{AgendeiError, StoreError};
use crate::store::create_store;
use clap::Args;

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Booking id
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

impl DeleteArgs {
    /// Execute the delete command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(booking_id = self.id, "Deleting booking");

        println!("🗑️  Deleting booking {}", self.id);
        println!();

        if !self.yes {
            println!("❌ Deletion is permanent");
            println!("   Re-run with --yes to confirm");
            return Ok(1); // Validation error exit code
        }

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

        match store.delete(self.id).await {
            Ok(()) => {
                println!("✅ Booking {} deleted", self.id);
                println!();
                Ok(0)
            }
            Err(AgendeiError::Store(StoreError::NotFound { id })) => {
                println!("❌ Booking {id} not found");
                Ok(1)
            }
            Err(e) => {
                println!("❌ Failed to delete booking");
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
    fn test_delete_args_requires_confirmation() {
        let args = DeleteArgs { id: 3, yes: false };
        assert!(!args.yes);
    }
}
