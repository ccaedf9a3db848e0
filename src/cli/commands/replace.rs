//! Replace command implementation
//!
//! This module implements the `replace` command, which rewrites every
//! document of a corpus into a new output directory.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_INTERRUPTED, EXIT_PARTIAL, EXIT_SUCCESS};
use crate::config::{load_config_or_default, PhiSurrogatesConfig};
use crate::core::replace::{planned_documents, ReplaceCoordinator, ReplaceSummary};
use crate::domain::SurrogateError;
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Failures listed individually before the rest are summarized
const MAX_LISTED_FAILURES: usize = 10;

/// Arguments for the replace command
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Corpus root (overrides replace.input_dir)
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output root, must not exist (overrides replace.output_dir)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reference list directory (overrides reference.lists_dir)
    #[arg(long, value_name = "DIR")]
    pub list_dir: Option<PathBuf>,

    /// Number of documents rewritten concurrently
    #[arg(long)]
    pub workers: Option<usize>,

    /// Run seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Classify placeholders and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run report as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ReplaceArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut PhiSurrogatesConfig) {
        if let Some(dir) = &self.input_dir {
            tracing::info!(input_dir = %dir.display(), "Overriding input directory from CLI");
            config.replace.input_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir.display(), "Overriding output directory from CLI");
            config.replace.output_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.list_dir {
            tracing::info!(lists_dir = %dir.display(), "Overriding reference list directory from CLI");
            config.reference.lists_dir = dir.clone();
        }
        if let Some(workers) = self.workers {
            tracing::info!(workers = workers, "Overriding worker count from CLI");
            config.replace.workers = workers;
        }
        if let Some(seed) = self.seed {
            tracing::info!(seed = seed, "Overriding run seed from CLI");
            config.surrogate.seed = Some(seed);
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }

    /// Execute the replace command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting replace command");

        let mut config = match load_config_or_default(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG);
        }

        let (input_dir, output_dir) = match config.replace.directories() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let dry_run = config.application.dry_run;
        // With a JSON report, stdout carries nothing but the report
        let quiet_stdout = dry_run && self.json;
        if dry_run {
            tracing::info!("Dry run mode enabled - no output will be written");
            status(quiet_stdout, "🔍 DRY RUN MODE - No output will be written");
            status(quiet_stdout, "");
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !dry_run {
            let documents = match planned_documents(&config) {
                Ok(documents) => documents.len(),
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(EXIT_CONFIG);
                }
            };

            println!("Replace Configuration:");
            println!("  Input: {}", input_dir.display());
            println!("  Output: {}", output_dir.display());
            println!("  Reference lists: {}", config.reference.lists_dir.display());
            println!("  Documents: {documents}");
            println!("  Workers: {}", config.replace.workers);
            println!(
                "  Seed: {}",
                config
                    .surrogate
                    .seed
                    .map_or_else(|| "random".to_string(), |s| s.to_string())
            );
            println!();
            print!("Proceed with replace? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Replace cancelled.");
                return Ok(EXIT_SUCCESS);
            }
        }

        tracing::info!("Loading reference lists and rules");
        let coordinator = match ReplaceCoordinator::new(config, shutdown_signal) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize replace");
                eprintln!("Failed to initialize replace: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if !dry_run {
            println!("🚀 Starting replace...");
            println!();
        }

        let summary = match coordinator.execute_replace().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Replace failed");
                eprintln!("Replace failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        summary.log_summary();

        if let Some(report) = &summary.dry_run_report {
            if self.json {
                println!("{}", report.format_json()?);
            } else {
                println!("{}", report.format_console());
            }
        } else {
            print_summary(&summary);
        }

        let exit_code = if summary.interrupted {
            status(quiet_stdout, "");
            status(quiet_stdout, "⚠️  Replace interrupted gracefully.");
            status(
                quiet_stdout,
                "   Documents already written are complete; the output directory is partial.",
            );
            status(quiet_stdout, "");
            tracing::info!("Replace interrupted by user signal");
            EXIT_INTERRUPTED
        } else if summary.is_successful() {
            status(quiet_stdout, "✅ Replace completed successfully!");
            EXIT_SUCCESS
        } else {
            status(quiet_stdout, "⚠️  Replace completed with failures");
            EXIT_PARTIAL
        };

        Ok(exit_code)
    }
}

/// Status line for the operator, on stderr when stdout is reserved for a report
fn status(to_stderr: bool, line: &str) {
    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Configuration problems exit with 2, everything else that stops a run with 5
fn exit_code_for(error: &SurrogateError) -> i32 {
    match error {
        SurrogateError::Configuration(_) => EXIT_CONFIG,
        _ => EXIT_FATAL,
    }
}

fn print_summary(summary: &ReplaceSummary) {
    println!();
    println!("📊 Replace Summary:");
    println!("  Total Documents: {}", summary.total_documents);
    println!("  Successful: {}", summary.successful_documents);
    println!("  Failed: {}", summary.failed_documents);
    println!("  Placeholders: {}", summary.total_placeholders);
    println!("  Unrecognized (emptied): {}", summary.fallback_placeholders);
    println!("  Cache Hits: {}", summary.cache_hits);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!("  Success Rate: {:.2}%", summary.success_rate());
    println!();

    if let Some(verification_report) = &summary.verification_report {
        println!("{}", verification_report.format_summary());
    }

    if !summary.errors.is_empty() {
        println!("⚠️  Errors encountered:");
        for error in summary.errors.iter().take(MAX_LISTED_FAILURES) {
            println!(
                "  - {:?} {}: {}",
                error.error_type,
                error.document.as_deref().unwrap_or("-"),
                error.message
            );
        }
        if summary.errors.len() > MAX_LISTED_FAILURES {
            println!(
                "  ... and {} more failures",
                summary.errors.len() - MAX_LISTED_FAILURES
            );
        }
        println!();
    }
}
