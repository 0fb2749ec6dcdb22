//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "agendei.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Agendei configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set store.backend to 'file', 'rest' or 'memory'");
                println!("  3. For the REST backend, set AGENDEI_STORE_REST_BASE_URL");
                println!("     or fill in [store.rest] base_url");
                println!("  4. Validate configuration: agendei validate-config");
                println!("  5. Book an appointment: agendei book --help");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Agendei Configuration File
# Clinic appointment booking tool

[application]
name = "agendei"
log_level = "info"

[store]
backend = "file"  # file | rest | memory

[store.file]
path = "consultas.json"

# [store.rest]
# base_url = "http://localhost:8080/api"
# timeout_seconds = 30

[booking]
open_hour = 7
close_hour = 18
min_age = 13
arrival_grace_minutes = 10
identifier_policy = "check-digit"

[locations]
strategy = "round-robin"
units = [
    "Rua Domingo de Soto 100 (Jardim Vila Mariana), São Paulo, SP",
    "Rua Guaicurus 1274, São Paulo, SP, 05756-360",
]

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Agendei Configuration File
# Clinic appointment booking tool
#
# This file contains all configuration options with examples and explanations.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Application name (used in logging)
name = "agendei"

# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Booking Store
# ============================================================================
[store]
# Which backend persists bookings:
#   - file: single JSON file on the local filesystem
#   - rest: remote /consultas collection over HTTP
#   - memory: volatile, for tests and demos
backend = "file"

[store.file]
# Path to the JSON file (created on first write)
path = "consultas.json"

# Uncomment this section if using the REST backend (store.backend = "rest")
#
# [store.rest]
# # Base URL of the booking API (use environment variable if preferred)
# base_url = "${AGENDEI_API_URL}"
#
# # Client-side request timeout in seconds
# timeout_seconds = 30

# ============================================================================
# Booking Policy
# ============================================================================
[booking]
# Clinic open window. A slot at exactly close_hour:00 is the last valid one.
open_hour = 7
close_hour = 18

# Minimum patient age in whole years
min_age = 13

# Minutes of tolerance for late arrival, shown on the booking receipt
arrival_grace_minutes = 10

# Patient identifier validation:
#   - check-digit: full modulus-11 check digit verification
#   - lenient: length and repeated-digit checks only
identifier_policy = "check-digit"

# ============================================================================
# Clinic Units
# ============================================================================
[locations]
# How the unit is assigned at creation time (round-robin or random)
strategy = "round-robin"

units = [
    "Rua Domingo de Soto 100 (Jardim Vila Mariana), São Paulo, SP",
    "Rua Guaicurus 1274, São Paulo, SP, 05756-360",
]

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (JSON lines with rotation)
local_enabled = false

# Local log directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
