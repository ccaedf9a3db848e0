// phi-surrogates - Clinical text placeholder surrogation
// Copyright (c) 2025 phi-surrogates Contributors
// Licensed under the MIT License

//! # phi-surrogates - Clinical text placeholder surrogation
//!
//! De-identified clinical notes mark every removed identifier with a
//! placeholder such as `[**Hospital1 4**]` or `[**Age over 90 13**]`. This
//! library replaces those placeholders with plausible synthetic values so the
//! text reads naturally again, keeping repeated placeholders consistent within
//! each document.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Corpus discovery, batch replacement, verification
//! - [`surrogate`] - Classification, generation and rewriting of placeholders
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phi_surrogates::domain::DocumentId;
//! use phi_surrogates::surrogate::{SurrogateConfig, SurrogateEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = SurrogateEngine::load("./lists", SurrogateConfig::default())?;
//!
//!     let id = DocumentId::new("note.txt")?;
//!     let outcome = engine.rewrite_document(&id, "Patient is [**Age over 90 13**] years old.")?;
//!
//!     println!("{}", outcome.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency
//!
//! Within one document, every occurrence of the same numbered placeholder
//! (`[**Hospital1 4**]`) or literal date (`[**2150-3-5**]`) receives the same
//! surrogate. Nothing is shared between documents.
//!
//! ## Reproducibility
//!
//! With `surrogate.seed` set, each document's generator is seeded from the run
//! seed and the document's relative path, so reruns produce identical output
//! regardless of how documents are scheduled.
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`]. An unrecognized placeholder
//! is never an error: it is replaced with an empty string.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod surrogate;
