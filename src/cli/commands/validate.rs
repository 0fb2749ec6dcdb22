//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Agendei configuration file.

use crate::config::load_config;
use crate::config::schema::StoreBackend;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration (load_config already validates)
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Version: {}", config.application.version);
        println!("  Log Level: {}", config.application.log_level);

        match config.store.backend {
            StoreBackend::Memory => {
                println!("  Store Backend: memory (volatile)");
            }
            StoreBackend::File => {
                let file = config.store.file.clone().unwrap_or_default();
                println!("  Store Backend: file");
                println!("  Store Path: {}", file.path);
            }
            StoreBackend::Rest => {
                if let Some(ref rest) = config.store.rest {
                    println!("  Store Backend: rest");
                    println!("  Store URL: {}", rest.base_url);
                    println!("  Request Timeout: {}s", rest.timeout_seconds);
                }
            }
        }

        println!(
            "  Open Hours: {:02}:00 - {:02}:00",
            config.booking.open_hour, config.booking.close_hour
        );
        println!("  Minimum Age: {}", config.booking.min_age);
        println!(
            "  Arrival Grace: {} minutes",
            config.booking.arrival_grace_minutes
        );
        println!("  Identifier Policy: {:?}", config.booking.identifier_policy);
        println!("  Location Strategy: {:?}", config.locations.strategy);
        println!("  Clinic Units: {}", config.locations.units.len());
        for unit in &config.locations.units {
            println!("    - {unit}");
        }
        println!();
        Ok(0)
    }
}
