//! Replace coordinator - main orchestrator for a batch run
//!
//! Documents are independent: each one is read, rewritten with its own
//! generator and cache, and written on a blocking worker. A bounded number of
//! workers run at once and a failure only affects its own document.

use crate::config::PhiSurrogatesConfig;
use crate::core::corpus::discover_documents;
use crate::core::replace::summary::{ReplaceError, ReplaceErrorType, ReplaceSummary, WrittenDocument};
use crate::core::verification::checksum::calculate_checksum_bytes;
use crate::core::verification::Verifier;
use crate::domain::{Document, DocumentId, Result, SurrogateError};
use crate::surrogate::audit::AuditLogger;
use crate::surrogate::report::DryRunReport;
use crate::surrogate::rewriter::RewriteStats;
use crate::surrogate::SurrogateEngine;
use crate::{log_document_failed, log_progress, log_replace_complete, log_replace_start};
use futures::{future, stream, StreamExt};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Result of one successfully rewritten document
struct ProcessedDocument {
    written: WrittenDocument,
    stats: RewriteStats,
}

/// Replace coordinator
pub struct ReplaceCoordinator {
    config: PhiSurrogatesConfig,
    engine: SurrogateEngine,
    audit: Arc<AuditLogger>,
    shutdown_signal: watch::Receiver<bool>,
}

impl ReplaceCoordinator {
    /// Create a new replace coordinator
    ///
    /// Loads every reference list and compiles the rules up front; a missing
    /// list aborts here, before any document is touched.
    pub fn new(config: PhiSurrogatesConfig, shutdown_signal: watch::Receiver<bool>) -> Result<Self> {
        config.validate().map_err(SurrogateError::Configuration)?;

        let engine = SurrogateEngine::load(&config.reference.lists_dir, config.surrogate.clone())?;

        let audit = if config.audit.enabled && !config.application.dry_run {
            AuditLogger::new(config.audit.log_path.clone(), config.audit.json_format, true)?
        } else {
            AuditLogger::disabled()
        };

        Ok(Self::with_engine(config, engine, audit, shutdown_signal))
    }

    /// Create a coordinator around an already loaded engine
    pub fn with_engine(
        config: PhiSurrogatesConfig,
        engine: SurrogateEngine,
        audit: AuditLogger,
        shutdown_signal: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            engine,
            audit: Arc::new(audit),
            shutdown_signal,
        }
    }

    pub fn engine(&self) -> &SurrogateEngine {
        &self.engine
    }

    /// Execute the replace run
    ///
    /// 1. Resolves the input and output roots
    /// 2. Refuses to run if the output root already exists
    /// 3. Discovers the corpus
    /// 4. Rewrites documents on the worker pool until done or interrupted
    /// 5. Verifies the outputs when enabled
    ///
    /// # Errors
    ///
    /// Only run-level problems are errors. Per-document failures are recorded
    /// in the returned summary.
    pub async fn execute_replace(&self) -> Result<ReplaceSummary> {
        let start_time = Instant::now();

        let (input_dir, output_dir) = self
            .config
            .replace
            .directories()
            .map_err(SurrogateError::Configuration)?;

        if self.config.application.dry_run {
            return self.execute_dry_run(&input_dir, &output_dir, start_time).await;
        }

        if output_dir.exists() {
            return Err(SurrogateError::Configuration(format!(
                "Output directory already exists: {}",
                output_dir.display()
            )));
        }

        let documents = discover_documents(
            &input_dir,
            &output_dir,
            &self.config.replace.file_extension,
        )?;
        let total = documents.len();
        let workers = self.config.replace.workers;
        let progress_interval = self.config.replace.progress_interval;

        let mut summary = ReplaceSummary::new();
        summary.total_documents = total;

        log_replace_start!(input_dir.display(), total, workers);

        tokio::fs::create_dir_all(&output_dir).await.map_err(|e| {
            SurrogateError::Io(format!(
                "Failed to create output directory {}: {}",
                output_dir.display(),
                e
            ))
        })?;

        let shutdown = self.shutdown_signal.clone();
        let mut results = stream::iter(documents)
            .take_while(move |_| future::ready(!*shutdown.borrow()))
            .map(|document| {
                let engine = self.engine.clone();
                let audit = Arc::clone(&self.audit);
                async move {
                    let id = document.id.clone();
                    let joined = tokio::task::spawn_blocking(move || {
                        process_document(&engine, &audit, &document)
                    })
                    .await;
                    (id, joined)
                }
            })
            .buffer_unordered(workers);

        while let Some((id, joined)) = results.next().await {
            match joined {
                Ok(Ok(processed)) => {
                    summary.record_success(processed.written, &processed.stats);
                }
                Ok(Err(error)) => {
                    log_document_failed!(id, error.message);
                    summary.record_failure(error.with_document(id.as_str()));
                }
                Err(join_error) => {
                    log_document_failed!(id, join_error);
                    summary.record_failure(
                        ReplaceError::new(
                            ReplaceErrorType::Worker,
                            format!("Worker task failed: {join_error}"),
                        )
                        .with_document(id.as_str()),
                    );
                }
            }

            let processed = summary.processed_documents();
            if processed % progress_interval == 0 {
                log_progress!(processed, total);
            }
        }
        drop(results);

        let processed = summary.processed_documents();
        log_progress!(processed, total);

        if processed < total && *self.shutdown_signal.borrow() {
            tracing::warn!(
                processed = processed,
                remaining = total - processed,
                "Shutdown requested, remaining documents were not scheduled"
            );
            summary.interrupted = true;
        }

        if self.config.verification.enable_verification {
            let report = Verifier::new().verify_replace(&summary).await?;
            summary.set_verification_report(report);
        }

        let summary = summary.with_duration(start_time.elapsed());
        log_replace_complete!(
            summary.successful_documents,
            summary.failed_documents,
            summary.duration
        );

        Ok(summary)
    }

    /// Classify every document without writing anything
    async fn execute_dry_run(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        start_time: Instant,
    ) -> Result<ReplaceSummary> {
        let documents = discover_documents(
            input_dir,
            output_dir,
            &self.config.replace.file_extension,
        )?;

        tracing::info!(
            documents = documents.len(),
            "Dry run: classifying placeholders, no output will be written"
        );

        let mut summary = ReplaceSummary::new();
        summary.total_documents = documents.len();
        let mut report = DryRunReport::new();

        for document in &documents {
            if *self.shutdown_signal.borrow() {
                summary.interrupted = true;
                break;
            }

            let text = match read_text(document).await {
                Ok(text) => text,
                Err(error) => {
                    log_document_failed!(document.id, error.message);
                    report.add_warning(format!("{}: {}", document.id, error.message));
                    summary.record_failure(error.with_document(document.id.as_str()));
                    continue;
                }
            };

            let found = self.engine.classify_all(&text)?;
            report.add_document(found.iter().map(|(raw, classification)| (*raw, classification)));
            summary.successful_documents += 1;
        }

        summary.total_placeholders = report.total_placeholders;
        summary.fallback_placeholders = report.unrecognized;
        summary.recognized_placeholders = report.total_placeholders - report.unrecognized;
        summary.by_category = report.by_category.clone();
        summary.dry_run_report = Some(report);

        Ok(summary.with_duration(start_time.elapsed()))
    }
}

async fn read_text(document: &Document) -> std::result::Result<String, ReplaceError> {
    let bytes = tokio::fs::read(&document.source).await.map_err(|e| {
        ReplaceError::new(
            ReplaceErrorType::Read,
            format!("Failed to read {}: {}", document.source.display(), e),
        )
    })?;
    String::from_utf8(bytes)
        .map_err(|e| ReplaceError::new(ReplaceErrorType::Decode, format!("Invalid UTF-8: {e}")))
}

/// Rewrite one document and write its output
///
/// Runs on a blocking worker. Bytes outside placeholder spans are written
/// back unchanged.
fn process_document(
    engine: &SurrogateEngine,
    audit: &AuditLogger,
    document: &Document,
) -> std::result::Result<ProcessedDocument, ReplaceError> {
    let bytes = std::fs::read(&document.source).map_err(|e| {
        ReplaceError::new(
            ReplaceErrorType::Read,
            format!("Failed to read {}: {}", document.source.display(), e),
        )
    })?;

    let text = std::str::from_utf8(&bytes)
        .map_err(|e| ReplaceError::new(ReplaceErrorType::Decode, format!("Invalid UTF-8: {e}")))?;

    let outcome = engine
        .rewrite_document(&document.id, text)
        .map_err(|e| ReplaceError::new(ReplaceErrorType::Rewrite, e.to_string()))?;

    write_output(&document.target, outcome.text.as_bytes())?;

    if let Err(e) = audit.log_document(&document.id, &outcome.stats, &bytes, outcome.text.as_bytes())
    {
        tracing::warn!(document = %document.id, error = %e, "Failed to write audit entry");
    }

    tracing::debug!(
        document = %document.id,
        placeholders = outcome.stats.placeholders,
        fallbacks = outcome.stats.fallbacks,
        cache_hits = outcome.stats.cache_hits,
        "Document rewritten"
    );

    Ok(ProcessedDocument {
        written: WrittenDocument {
            id: document.id.clone(),
            target: document.target.clone(),
            checksum: calculate_checksum_bytes(outcome.text.as_bytes()),
        },
        stats: outcome.stats,
    })
}

fn write_output(target: &Path, content: &[u8]) -> std::result::Result<(), ReplaceError> {
    let write_error = |e: std::io::Error| {
        ReplaceError::new(
            ReplaceErrorType::Write,
            format!("Failed to write {}: {}", target.display(), e),
        )
    };

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(target, content).map_err(write_error)
}

/// Identifiers of the documents a run would process, in processing order
pub fn planned_documents(config: &PhiSurrogatesConfig) -> Result<Vec<DocumentId>> {
    let (input_dir, output_dir) = config
        .replace
        .directories()
        .map_err(SurrogateError::Configuration)?;
    Ok(
        discover_documents(&input_dir, &output_dir, &config.replace.file_extension)?
            .into_iter()
            .map(|d| d.id)
            .collect(),
    )
}
