//! Core orchestration for phi-surrogates.
//!
//! # Modules
//!
//! - [`corpus`] - Discovery of the documents under the input root
//! - [`replace`] - Batch replacement on a bounded worker pool
//! - [`verification`] - Post-run output verification with checksums
//!
//! # Replace Workflow
//!
//! 1. **Load**: Read every reference list and compile the rule registry
//! 2. **Discover**: Walk the input root for matching files
//! 3. **Rewrite**: Replace placeholders document by document, in parallel
//! 4. **Write**: Mirror each document under the output root
//! 5. **Verify** (optional): Re-read outputs and compare checksums
//! 6. **Report**: Produce a [`replace::ReplaceSummary`]
//!
//! # Example
//!
//! ```rust,no_run
//! use phi_surrogates::config::load_config;
//! use phi_surrogates::core::replace::ReplaceCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("phi-surrogates.toml")?;
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = ReplaceCoordinator::new(config, shutdown_rx)?;
//!
//! let summary = coordinator.execute_replace().await?;
//!
//! println!("Total: {}", summary.total_documents);
//! println!("Successful: {}", summary.successful_documents);
//! println!("Failed: {}", summary.failed_documents);
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod replace;
pub mod verification;
