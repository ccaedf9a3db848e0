//! Validate config command implementation
//!
//! This module implements the `validate-config` command, which checks the
//! configuration file and loads every reference list it points to.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_SUCCESS};
use crate::config::load_config;
use crate::surrogate::reference::{load_reference_lists, ListKind};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Skip loading the reference lists
    #[arg(long)]
    pub skip_lists: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates every section
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let display_dir = |dir: &Option<std::path::PathBuf>| {
            dir.as_ref()
                .map_or_else(|| "(not set)".to_string(), |d| d.display().to_string())
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Reference Lists: {}", config.reference.lists_dir.display());
        println!("  Input: {}", display_dir(&config.replace.input_dir));
        println!("  Output: {}", display_dir(&config.replace.output_dir));
        println!("  File Extension: {}", config.replace.file_extension);
        println!("  Workers: {}", config.replace.workers);
        println!(
            "  Seed: {}",
            config
                .surrogate
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string())
        );
        println!(
            "  Cache Bare Placeholders: {}",
            config.surrogate.cache_bare_placeholders
        );
        println!(
            "  Verification: {}",
            config.verification.enable_verification
        );
        println!("  Audit Log: {}", config.audit.enabled);
        println!();

        if self.skip_lists {
            return Ok(EXIT_SUCCESS);
        }

        match load_reference_lists(&config.reference.lists_dir) {
            Ok(lists) => {
                println!("✅ Reference lists loaded");
                for kind in ListKind::ALL {
                    println!("  {:24} {:>8}", kind.name(), lists.len(kind));
                }
                let empty = lists.empty_lists();
                if !empty.is_empty() {
                    println!();
                    println!("⚠️  Empty lists (placeholders needing them will fail):");
                    for kind in empty {
                        println!("  - {kind}");
                    }
                }
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to load reference lists");
                println!("   Error: {e}");
                println!();
                Ok(EXIT_FATAL)
            }
        }
    }
}
