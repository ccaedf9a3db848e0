//! Verification logic for post-run validation
//!
//! Every written output is read back and checked against the checksum taken
//! at write time. A rewritten document must also be free of placeholder
//! spans.

use crate::core::replace::summary::{ReplaceSummary, WrittenDocument};
use crate::core::verification::checksum::calculate_checksum_bytes;
use crate::core::verification::report::{
    VerificationFailure, VerificationFailureKind, VerificationReport,
};
use crate::domain::Result;
use crate::surrogate::rewriter::has_residual_placeholders;
use std::time::Instant;

/// Verifier for post-run validation
#[derive(Debug, Default)]
pub struct Verifier;

impl Verifier {
    /// Create a new verifier
    pub fn new() -> Self {
        Self
    }

    /// Verify every output recorded in `summary`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use phi_surrogates::core::replace::ReplaceSummary;
    /// use phi_surrogates::core::verification::Verifier;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let summary = ReplaceSummary::new();
    /// let report = Verifier::new().verify_replace(&summary).await?;
    /// println!("{}", report.format_summary());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn verify_replace(&self, summary: &ReplaceSummary) -> Result<VerificationReport> {
        let start = Instant::now();
        let mut report = VerificationReport::new();

        tracing::info!(
            total_outputs = summary.written_documents.len(),
            "Starting post-run verification"
        );

        for written in &summary.written_documents {
            match self.verify_document(written).await? {
                Ok(()) => report.record_pass(),
                Err(failure) => {
                    tracing::warn!(
                        document = %failure.document,
                        kind = ?failure.kind,
                        reason = %failure.reason,
                        "Verification failed"
                    );
                    report.record_failure(failure);
                }
            }
        }

        report.set_duration(start.elapsed().as_millis() as u64);

        tracing::info!(
            passed = report.passed,
            failed = report.failed,
            duration_ms = report.duration_ms,
            "Verification completed"
        );

        Ok(report)
    }

    /// Verify a single output
    ///
    /// The outer `Result` is reserved for internal errors; a document that does
    /// not pass yields `Ok(Err(failure))`.
    pub async fn verify_document(
        &self,
        written: &WrittenDocument,
    ) -> Result<std::result::Result<(), VerificationFailure>> {
        let failure = |kind, actual: Option<String>, reason: String| VerificationFailure {
            document: written.id.to_string(),
            kind,
            expected_checksum: written.checksum.clone(),
            actual_checksum: actual,
            reason,
        };

        let bytes = match tokio::fs::read(&written.target).await {
            Ok(bytes) => bytes,
            Err(e) => {
                return Ok(Err(failure(
                    VerificationFailureKind::Missing,
                    None,
                    format!("Output {} unreadable: {}", written.target.display(), e),
                )))
            }
        };

        let actual = calculate_checksum_bytes(&bytes);
        if actual != written.checksum {
            return Ok(Err(failure(
                VerificationFailureKind::ChecksumMismatch,
                Some(actual),
                "Checksum mismatch".to_string(),
            )));
        }

        let text = String::from_utf8_lossy(&bytes);
        if has_residual_placeholders(&text)? {
            return Ok(Err(failure(
                VerificationFailureKind::ResidualPlaceholder,
                Some(actual),
                "Output still contains a placeholder span".to_string(),
            )));
        }

        Ok(Ok(()))
    }
}
