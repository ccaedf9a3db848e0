//! Audit logging module
//!
//! Provides an append-only record of every rewritten document.

pub mod logger;

pub use logger::AuditLogger;
