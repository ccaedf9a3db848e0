//! Audit logger for surrogate replacement

use crate::domain::{DocumentId, Result, SurrogateError};
use crate::surrogate::rewriter::RewriteStats;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Audit log entry
///
/// Placeholder text and surrogate values are never written; inputs and
/// outputs are identified by their SHA-256 digest only.
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    document: &'a str,
    placeholders: usize,
    replaced: usize,
    fallbacks: usize,
    input_sha256: String,
    output_sha256: String,
}

/// Appends one entry per processed document
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    file: Option<Mutex<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; nothing is opened when disabled
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        let file = if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SurrogateError::Io(format!(
                        "Failed to create audit log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .map_err(|e| {
                    SurrogateError::Io(format!(
                        "Failed to open audit log {}: {}",
                        log_path.display(),
                        e
                    ))
                })?;
            Some(Mutex::new(file))
        } else {
            None
        };

        Ok(Self {
            log_path,
            json_format,
            file,
        })
    }

    /// Logger that records nothing
    pub fn disabled() -> Self {
        Self {
            log_path: PathBuf::new(),
            json_format: true,
            file: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn log_path(&self) -> &std::path::Path {
        &self.log_path
    }

    /// Record one rewritten document
    pub fn log_document(
        &self,
        id: &DocumentId,
        stats: &RewriteStats,
        input: &[u8],
        output: &[u8],
    ) -> Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            document: id.as_str(),
            placeholders: stats.placeholders,
            replaced: stats.recognized,
            fallbacks: stats.fallbacks,
            input_sha256: hash_bytes(input),
            output_sha256: hash_bytes(output),
        };

        let line = if self.json_format {
            serde_json::to_string(&entry)?
        } else {
            format!(
                "[{}] Document: {} | Placeholders: {} | Replaced: {} | Fallbacks: {} | In: {} | Out: {}",
                entry.timestamp,
                entry.document,
                entry.placeholders,
                entry.replaced,
                entry.fallbacks,
                entry.input_sha256,
                entry.output_sha256
            )
        };

        let mut file = file
            .lock()
            .map_err(|_| SurrogateError::Other("Audit log lock poisoned".to_string()))?;
        writeln!(file, "{line}")?;

        Ok(())
    }
}

/// Hex SHA-256 of a byte slice
fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
