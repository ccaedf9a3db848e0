//! Verification report structures
//!
//! This module defines the structures for reporting verification results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verification report containing results of post-run validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// When the verification was performed
    pub verified_at: DateTime<Utc>,

    /// Total number of outputs verified
    pub total_verified: usize,

    /// Number of outputs that passed verification
    pub passed: usize,

    /// Number of outputs that failed verification
    pub failed: usize,

    /// List of failed verifications with details
    pub failures: Vec<VerificationFailure>,

    /// Duration of verification in milliseconds
    pub duration_ms: u64,
}

/// Why an output failed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationFailureKind {
    /// The output file is gone or unreadable
    Missing,
    /// The content changed after it was written
    ChecksumMismatch,
    /// A placeholder span survived the rewrite
    ResidualPlaceholder,
}

/// Details of a failed verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Relative document path
    pub document: String,

    pub kind: VerificationFailureKind,

    /// Checksum recorded when the output was written
    pub expected_checksum: String,

    /// Checksum of the content found on disk, if it could be read
    pub actual_checksum: Option<String>,

    /// Reason for failure
    pub reason: String,
}

impl VerificationReport {
    /// Create a new verification report
    pub fn new() -> Self {
        Self {
            verified_at: Utc::now(),
            total_verified: 0,
            passed: 0,
            failed: 0,
            failures: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Record a successful verification
    pub fn record_pass(&mut self) {
        self.total_verified += 1;
        self.passed += 1;
    }

    /// Record a failed verification
    pub fn record_failure(&mut self, failure: VerificationFailure) {
        self.total_verified += 1;
        self.failed += 1;
        self.failures.push(failure);
    }

    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// Check if all verifications passed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Get the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_verified == 0 {
            return 100.0;
        }
        (self.passed as f64 / self.total_verified as f64) * 100.0
    }

    /// Format the report as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("📊 Verification Report\n");
        summary.push_str(&format!("  Verified at: {}\n", self.verified_at));
        summary.push_str(&format!("  Duration: {} ms\n", self.duration_ms));
        summary.push_str(&format!("  Total verified: {}\n", self.total_verified));
        summary.push_str(&format!("  ✅ Passed: {}\n", self.passed));
        summary.push_str(&format!("  ❌ Failed: {}\n", self.failed));
        summary.push_str(&format!("  Success rate: {:.2}%\n", self.success_rate()));

        if !self.failures.is_empty() {
            summary.push_str("\n❌ Failures:\n");
            for (i, failure) in self.failures.iter().enumerate() {
                summary.push_str(&format!("  {}. Document: {}\n", i + 1, failure.document));
                summary.push_str(&format!("     Reason: {}\n", failure.reason));
            }
        }

        summary
    }
}

impl Default for VerificationReport {
    fn default() -> Self {
        Self::new()
    }
}
