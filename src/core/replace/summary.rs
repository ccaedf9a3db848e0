//! Replace summary and reporting
//!
//! This module defines structures for tracking and reporting replace results.

use crate::core::verification::report::VerificationReport;
use crate::domain::DocumentId;
use crate::surrogate::classifier::Category;
use crate::surrogate::report::DryRunReport;
use crate::surrogate::rewriter::RewriteStats;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// A document whose output was written, kept for verification
#[derive(Debug, Clone)]
pub struct WrittenDocument {
    pub id: DocumentId,

    /// Path of the rewritten output
    pub target: PathBuf,

    /// SHA-256 of the bytes written
    pub checksum: String,
}

/// Summary of a replace run
#[derive(Debug, Clone)]
pub struct ReplaceSummary {
    /// Documents discovered in the input corpus
    pub total_documents: usize,

    /// Documents rewritten and written out
    pub successful_documents: usize,

    /// Documents that failed; the rest of the batch is unaffected
    pub failed_documents: usize,

    /// Placeholder spans found in successful documents
    pub total_placeholders: usize,

    /// Spans matched by a rule
    pub recognized_placeholders: usize,

    /// Spans no rule matched, replaced with an empty string
    pub fallback_placeholders: usize,

    /// Spans answered from a document's consistency cache
    pub cache_hits: usize,

    pub by_category: BTreeMap<Category, usize>,

    /// Duration of the run
    pub duration: Duration,

    /// Errors encountered during the run
    pub errors: Vec<ReplaceError>,

    /// Outputs written, for verification
    pub written_documents: Vec<WrittenDocument>,

    /// Verification report (if verification was run)
    pub verification_report: Option<VerificationReport>,

    /// Classification report (dry runs only)
    pub dry_run_report: Option<DryRunReport>,

    /// Scheduling stopped early on a shutdown signal
    pub interrupted: bool,
}

impl ReplaceSummary {
    /// Create a new empty replace summary
    pub fn new() -> Self {
        Self {
            total_documents: 0,
            successful_documents: 0,
            failed_documents: 0,
            total_placeholders: 0,
            recognized_placeholders: 0,
            fallback_placeholders: 0,
            cache_hits: 0,
            by_category: BTreeMap::new(),
            duration: Duration::from_secs(0),
            errors: Vec::new(),
            written_documents: Vec::new(),
            verification_report: None,
            dry_run_report: None,
            interrupted: false,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a document written successfully
    pub fn record_success(&mut self, written: WrittenDocument, stats: &RewriteStats) {
        self.successful_documents += 1;
        self.total_placeholders += stats.placeholders;
        self.recognized_placeholders += stats.recognized;
        self.fallback_placeholders += stats.fallbacks;
        self.cache_hits += stats.cache_hits;
        for (category, count) in &stats.by_category {
            *self.by_category.entry(*category).or_insert(0) += count;
        }
        self.written_documents.push(written);
    }

    /// Record a failed document
    pub fn record_failure(&mut self, error: ReplaceError) {
        self.failed_documents += 1;
        self.errors.push(error);
    }

    /// Documents that reached a terminal state
    pub fn processed_documents(&self) -> usize {
        self.successful_documents + self.failed_documents
    }

    /// Set the verification report
    pub fn set_verification_report(&mut self, report: VerificationReport) {
        self.verification_report = Some(report);
    }

    /// Check if the run was successful (no failures, nothing skipped)
    pub fn is_successful(&self) -> bool {
        self.failed_documents == 0
            && self.errors.is_empty()
            && !self.interrupted
            && self
                .verification_report
                .as_ref()
                .map_or(true, VerificationReport::is_success)
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_documents == 0 {
            return 100.0;
        }
        (self.successful_documents as f64 / self.total_documents as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_documents = self.total_documents,
            successful = self.successful_documents,
            failed = self.failed_documents,
            placeholders = self.total_placeholders,
            fallbacks = self.fallback_placeholders,
            cache_hits = self.cache_hits,
            interrupted = self.interrupted,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Replace completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Replace completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    document = error.document.as_deref().unwrap_or("-"),
                    message = %error.message,
                    "Replace error"
                );
            }
        }
    }
}

impl Default for ReplaceSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage at which a document failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceErrorType {
    /// Source could not be read
    Read,
    /// Source is not valid UTF-8
    Decode,
    /// Surrogate generation failed (e.g. an empty reference list)
    Rewrite,
    /// Output could not be written
    Write,
    /// Worker task panicked or was cancelled
    Worker,
    /// Unknown error
    Unknown,
}

/// Replace error with context
#[derive(Debug, Clone)]
pub struct ReplaceError {
    /// Type of error
    pub error_type: ReplaceErrorType,

    /// Error message
    pub message: String,

    /// Relative path of the document, when the error belongs to one
    pub document: Option<String>,
}

impl ReplaceError {
    /// Create a new replace error
    pub fn new(error_type: ReplaceErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            document: None,
        }
    }

    /// Attach the document the error belongs to
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }
}
