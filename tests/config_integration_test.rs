//! Configuration loading integration tests

use agendei::config::schema::{LocationStrategyKind, StoreBackend};
use agendei::config::{load_config, AgendeiConfig};
use agendei::validation::IdentifierPolicy;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.name, "agendei");
    assert_eq!(config.store.backend, StoreBackend::File);
    assert_eq!(config.booking.open_hour, 7);
    assert_eq!(config.booking.close_hour, 18);
    assert_eq!(config.booking.min_age, 13);
    assert_eq!(config.booking.identifier_policy, IdentifierPolicy::CheckDigit);
    assert_eq!(config.locations.strategy, LocationStrategyKind::RoundRobin);
    assert_eq!(config.locations.units.len(), 2);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_full_file_round_trip() {
    let file = write_config(
        r#"
[application]
name = "agendei"
log_level = "debug"

[store]
backend = "rest"

[store.rest]
base_url = "http://localhost:8080/api"
timeout_seconds = 10

[booking]
open_hour = 8
close_hour = 17
min_age = 18
arrival_grace_minutes = 15
identifier_policy = "lenient"

[locations]
strategy = "random"
units = ["Unidade Centro"]

[logging]
local_enabled = true
local_path = "/tmp/agendei-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.store.backend, StoreBackend::Rest);
    assert_eq!(
        config.store.rest.as_ref().unwrap().base_url,
        "http://localhost:8080/api"
    );
    assert_eq!(config.store.rest.as_ref().unwrap().timeout_seconds, 10);
    assert_eq!(config.booking.min_age, 18);
    assert_eq!(config.booking.arrival_grace_minutes, 15);
    assert_eq!(config.booking.identifier_policy, IdentifierPolicy::Lenient);
    assert_eq!(config.locations.strategy, LocationStrategyKind::Random);
    assert!(config.logging.local_enabled);
}

#[test]
fn test_env_substitution_in_values() {
    std::env::set_var("AGENDEI_IT_BASE_URL", "http://example.com/api");
    let file = write_config(
        r#"
[store]
backend = "rest"

[store.rest]
base_url = "${AGENDEI_IT_BASE_URL}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.store.rest.unwrap().base_url,
        "http://example.com/api"
    );
    std::env::remove_var("AGENDEI_IT_BASE_URL");
}

#[test]
fn test_missing_env_variable_is_an_error() {
    std::env::remove_var("AGENDEI_IT_ABSENT_URL");
    let file = write_config(
        r#"
[store]
backend = "rest"

[store.rest]
base_url = "${AGENDEI_IT_ABSENT_URL}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("AGENDEI_IT_ABSENT_URL"));
}

#[test]
fn test_rest_backend_without_section_is_rejected() {
    let file = write_config(
        r#"
[store]
backend = "rest"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_inverted_open_window_is_rejected() {
    let file = write_config(
        r#"
[booking]
open_hour = 18
close_hour = 7
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_validate_catches_empty_units() {
    let file = write_config(
        r#"
[locations]
units = []
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_default_config_builds_strategy() {
    let config = AgendeiConfig::default();
    let mut strategy = config.locations.build_strategy();
    let first = strategy.next_location();
    let second = strategy.next_location();
    assert_ne!(first, second);
    assert_eq!(first, strategy.next_location());
}
