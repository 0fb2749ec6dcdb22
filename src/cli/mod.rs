//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Agendei using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Agendei - clinic appointment booking tool
#[derive(Parser, Debug)]
#[command(name = "agendei")]
#[command(version, about, long_about = None)]
#[command(author = "Agendei Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "agendei.toml", env = "AGENDEI_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "AGENDEI_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Book a consultation or exam
    Book(commands::book::BookArgs),

    /// List bookings, newest first
    List(commands::list::ListArgs),

    /// Move a booking to a new date and time
    Reschedule(commands::reschedule::RescheduleArgs),

    /// Cancel a booking, recording the reason
    Cancel(commands::cancel::CancelArgs),

    /// Permanently remove a booking
    Delete(commands::delete::DeleteArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
