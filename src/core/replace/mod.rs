//! Batch replacement over a document corpus

pub mod coordinator;
pub mod summary;

pub use coordinator::{planned_documents, ReplaceCoordinator};
pub use summary::{ReplaceError, ReplaceErrorType, ReplaceSummary, WrittenDocument};
