//! Configuration management for phi-surrogates.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `PHI_SURROGATES_<SECTION>_<KEY>` environment overrides
//! - Validation of every section
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use phi_surrogates::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("phi-surrogates.toml")?;
//!
//! println!("Lists: {}", config.reference.lists_dir.display());
//! println!("Workers: {}", config.replace.workers);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`ReferenceConfig`] - Location of the candidate lists
//! - [`ReplaceConfig`] - Corpus locations and worker pool
//! - [`SurrogateConfig`] - Seed and caching of bare placeholders
//! - [`VerificationConfig`] - Post-run output verification
//! - [`AuditConfig`] - Per-document audit log
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [reference]
//! lists_dir = "${PHI_LISTS_DIR}"
//!
//! [replace]
//! input_dir = "./corpus"
//! output_dir = "./corpus-surrogates"
//! workers = 8
//!
//! [surrogate]
//! seed = 1234
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::surrogate::config::SurrogateConfig;
pub use loader::{load_config, load_config_or_default, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, AuditConfig, LoggingConfig, PhiSurrogatesConfig, ReferenceConfig,
    ReplaceConfig, VerificationConfig,
};
