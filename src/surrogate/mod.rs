//! Placeholder surrogation
//!
//! Replaces redaction placeholders such as `[**Hospital1 4**]` with plausible
//! synthetic values while keeping every repeated placeholder consistent
//! within its document.
//!
//! # Architecture
//!
//! - **Reference data**: candidate lists loaded once and shared read-only
//! - **Classification**: ordered rule cascade, first match wins
//! - **Generation**: one policy per category
//! - **Rewriting**: span scan with a per-document consistency cache
//! - **Audit**: hashed per-document records
//!
//! # Usage
//!
//! ```rust,ignore
//! use phi_surrogates::surrogate::{SurrogateConfig, SurrogateEngine};
//! use phi_surrogates::domain::DocumentId;
//!
//! let engine = SurrogateEngine::load("./lists", SurrogateConfig::default())?;
//! let id = DocumentId::new("note.txt")?;
//! let outcome = engine.rewrite_document(&id, "Seen at [**Hospital1 4**].")?;
//! ```

pub mod audit;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod generator;
pub mod reference;
pub mod report;
pub mod rewriter;

pub use classifier::{Category, Classification, PlaceholderClassifier, PlaceholderForm, RuleRegistry};
pub use config::SurrogateConfig;
pub use engine::SurrogateEngine;
pub use reference::{ListKind, ReferenceLists};
pub use report::DryRunReport;
pub use rewriter::{DocumentRewriter, RewriteOutcome, RewriteStats};
