//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for phi-surrogates using clap.

pub mod commands;

use crate::config::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use clap::{Parser, Subcommand};

/// phi-surrogates - replace redaction placeholders with synthetic surrogates
#[derive(Parser, Debug)]
#[command(name = "phi-surrogates")]
#[command(version, about, long_about = None)]
#[command(author = "phi-surrogates Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = CONFIG_ENV_VAR)]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PHI_SURROGATES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace placeholders across a corpus and write the rewritten copy
    Replace(commands::replace::ReplaceArgs),

    /// Validate configuration file and reference lists
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Show how each placeholder in a file or string is classified
    Inspect(commands::inspect::InspectArgs),
}
