//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the LiveDDM
//! demonstration binary using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// LiveDDM API demonstration client
#[derive(Parser, Debug)]
#[command(name = "liveddm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "liveddm.toml", env = "LIVEDDM_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LIVEDDM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a page of patient records
    Patients(commands::patients::PatientsArgs),

    /// List the appointments for a calendar date
    Appointments(commands::appointments::AppointmentsArgs),

    /// Create or update an appointment from a JSON file
    Upsert(commands::upsert::UpsertArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
