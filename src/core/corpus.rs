//! Corpus discovery
//!
//! Walks the input directory recursively and maps every selected file to its
//! target under the output directory at the same relative location.

use crate::domain::{Document, Result, SurrogateError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every file under `input_dir` whose name ends with `.{extension}`, sorted by
/// path
///
/// # Errors
///
/// Fails when `input_dir` is not a directory. Unreadable entries below it are
/// logged and skipped.
pub fn discover_documents(
    input_dir: &Path,
    output_dir: &Path,
    extension: &str,
) -> Result<Vec<Document>> {
    if !input_dir.is_dir() {
        return Err(SurrogateError::Configuration(format!(
            "Input directory not found: {}",
            input_dir.display()
        )));
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut candidates: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(input_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable corpus entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            candidates.push(entry.into_path());
        }
    }
    candidates.sort();

    let documents = candidates
        .iter()
        .map(|path| {
            Document::locate(input_dir, path, output_dir).map_err(SurrogateError::Configuration)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        input_dir = %input_dir.display(),
        count = documents.len(),
        extension = %extension,
        "Discovered corpus documents"
    );

    Ok(documents)
}
