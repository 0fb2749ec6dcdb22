//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{AgendeiConfig, FileStoreConfig, RestStoreConfig, StoreBackend};
use crate::domain::errors::AgendeiError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AgendeiConfig
/// 4. Applies environment variable overrides (AGENDEI_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is missing, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<AgendeiConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AgendeiError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AgendeiError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AgendeiConfig = toml::from_str(&contents)
        .map_err(|e| AgendeiError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate()?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Returns an error naming every missing
/// variable at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AgendeiError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the AGENDEI_* prefix
///
/// Variables follow the pattern AGENDEI_<SECTION>_<KEY>, for example
/// AGENDEI_STORE_BACKEND or AGENDEI_BOOKING_OPEN_HOUR.
fn apply_env_overrides(config: &mut AgendeiConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("AGENDEI_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Store overrides
    if let Ok(val) = std::env::var("AGENDEI_STORE_BACKEND") {
        config.store.backend = match val.to_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "file" => StoreBackend::File,
            "rest" => StoreBackend::Rest,
            other => {
                return Err(AgendeiError::Configuration(format!(
                    "AGENDEI_STORE_BACKEND '{other}' is invalid. Must be one of: memory, file, rest"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("AGENDEI_STORE_FILE_PATH") {
        config
            .store
            .file
            .get_or_insert_with(FileStoreConfig::default)
            .path = val;
    }
    if let Ok(val) = std::env::var("AGENDEI_STORE_REST_BASE_URL") {
        match config.store.rest.as_mut() {
            Some(rest) => rest.base_url = val,
            None => {
                config.store.rest = Some(RestStoreConfig {
                    base_url: val,
                    timeout_seconds: 30,
                })
            }
        }
    }
    if let Ok(val) = std::env::var("AGENDEI_STORE_REST_TIMEOUT_SECONDS") {
        if let (Some(rest), Ok(seconds)) = (config.store.rest.as_mut(), val.parse()) {
            rest.timeout_seconds = seconds;
        }
    }

    // Booking policy overrides
    if let Ok(val) = std::env::var("AGENDEI_BOOKING_OPEN_HOUR") {
        if let Ok(hour) = val.parse() {
            config.booking.open_hour = hour;
        }
    }
    if let Ok(val) = std::env::var("AGENDEI_BOOKING_CLOSE_HOUR") {
        if let Ok(hour) = val.parse() {
            config.booking.close_hour = hour;
        }
    }
    if let Ok(val) = std::env::var("AGENDEI_BOOKING_MIN_AGE") {
        if let Ok(age) = val.parse() {
            config.booking.min_age = age;
        }
    }
    if let Ok(val) = std::env::var("AGENDEI_BOOKING_IDENTIFIER_POLICY") {
        config.booking.identifier_policy = match val.to_lowercase().as_str() {
            "check-digit" | "checkdigit" => crate::validation::IdentifierPolicy::CheckDigit,
            "lenient" => crate::validation::IdentifierPolicy::Lenient,
            other => {
                return Err(AgendeiError::Configuration(format!(
                    "AGENDEI_BOOKING_IDENTIFIER_POLICY '{other}' is invalid. Must be one of: check-digit, lenient"
                )))
            }
        };
    }

    // Logging overrides
    if let Ok(val) = std::env::var("AGENDEI_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("AGENDEI_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
