//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_SUCCESS};
use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing phi-surrogates configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your corpus and list locations", self.output);
                println!("  2. Validate configuration: phi-surrogates validate-config");
                println!("  3. Preview placeholders: phi-surrogates replace --dry-run");
                println!("  4. Run: phi-surrogates replace");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}

/// Sample configuration with every setting at its default
pub fn sample_config() -> &'static str {
    r#"# phi-surrogates configuration
# Replaces redaction placeholders in clinical notes with synthetic values

[application]
log_level = "info"          # trace | debug | info | warn | error
dry_run = false

[reference]
lists_dir = "./lists"

[replace]
input_dir = "./corpus"
output_dir = "./corpus-surrogates"   # must not exist yet
file_extension = "txt"
workers = 4                 # 1..=256
progress_interval = 1000

[surrogate]
# seed = 1234               # set for reproducible output
cache_bare_placeholders = false

[verification]
enable_verification = false

[audit]
enabled = false
log_path = "./audit/surrogates.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"    # daily | hourly
"#
}
