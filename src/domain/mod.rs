//! Domain models and types for phi-surrogates.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Document identity** ([`DocumentId`], [`Document`])
//! - **Error types** ([`SurrogateError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, SurrogateError>`]:
//!
//! ```rust
//! use phi_surrogates::domain::{Result, SurrogateError};
//!
//! fn example() -> Result<()> {
//!     let config = phi_surrogates::config::load_config("phi-surrogates.toml")?;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod errors;
pub mod result;

pub use document::{Document, DocumentId};
pub use errors::SurrogateError;
pub use result::Result;
