//! Logging and observability
//!
//! Structured logging with configurable levels, optional JSON file output
//! with rotation, and macros for the events every replace run emits.
//!
//! # Example
//!
//! ```no_run
//! use phi_surrogates::logging::init_logging;
//! use phi_surrogates::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a replace run
///
/// # Example
///
/// ```no_run
/// use phi_surrogates::log_replace_start;
/// use std::path::Path;
///
/// log_replace_start!(Path::new("./corpus").display(), 1200, 4);
/// ```
#[macro_export]
macro_rules! log_replace_start {
    ($input_dir:expr, $documents:expr, $workers:expr) => {
        tracing::info!(
            input_dir = %$input_dir,
            documents = $documents,
            workers = $workers,
            "Starting replace"
        );
    };
}

/// Log the completion of a replace run
///
/// # Example
///
/// ```no_run
/// use phi_surrogates::log_replace_complete;
/// use std::time::Duration;
///
/// log_replace_complete!(1198, 2, Duration::from_secs(40));
/// ```
#[macro_export]
macro_rules! log_replace_complete {
    ($successful:expr, $failed:expr, $duration:expr) => {
        tracing::info!(
            successful = $successful,
            failed = $failed,
            duration_ms = $duration.as_millis() as u64,
            "Replace finished"
        );
    };
}

/// Log progress through the corpus
///
/// # Example
///
/// ```no_run
/// use phi_surrogates::log_progress;
///
/// log_progress!(1000, 1200);
/// ```
#[macro_export]
macro_rules! log_progress {
    ($current:expr, $total:expr) => {
        tracing::info!(
            processed = $current,
            total = $total,
            progress_pct = if $total == 0 {
                100.0
            } else {
                $current as f64 / $total as f64 * 100.0
            },
            "Replace progress"
        );
    };
}

/// Log a document that failed; the run continues
///
/// # Example
///
/// ```no_run
/// use phi_surrogates::log_document_failed;
///
/// log_document_failed!("01/00042/note.txt", "invalid UTF-8");
/// ```
#[macro_export]
macro_rules! log_document_failed {
    ($document:expr, $error:expr) => {
        tracing::error!(
            document = %$document,
            error = %$error,
            "Document failed"
        );
    };
}
