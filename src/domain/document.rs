//! Document identity and location types
//!
//! A unit of work is one document: a source file inside the input corpus and
//! the target file it is written to under the output root, at the same
//! relative location.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Document identifier newtype wrapper
///
/// The identifier is the document's path relative to the corpus root, with
/// `/` separators on every platform. It keys outputs, audit entries and the
/// per-document random seed.
///
/// # Examples
///
/// ```
/// use phi_surrogates::domain::DocumentId;
/// use std::str::FromStr;
///
/// let id = DocumentId::from_str("01/00042/note-1.txt").unwrap();
/// assert_eq!(id.file_name(), "note-1.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new DocumentId from a relative path string
    ///
    /// # Returns
    ///
    /// Returns `Err` for empty or absolute paths
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into().replace('\\', "/");
        if id.trim().is_empty() {
            return Err("Document ID cannot be empty".to_string());
        }
        if id.starts_with('/') {
            return Err(format!("Document ID must be a relative path, got: {id}"));
        }
        Ok(Self(id))
    }

    /// Builds the identifier of `path` relative to `root`
    pub fn from_relative(root: &Path, path: &Path) -> Result<Self, String> {
        let relative = path.strip_prefix(root).map_err(|_| {
            format!(
                "{} is not inside corpus root {}",
                path.display(),
                root.display()
            )
        })?;
        let joined = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Self::new(joined)
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Directory part relative to the corpus root (empty for top-level files)
    pub fn subdir(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One document scheduled for rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Relative identifier
    pub id: DocumentId,

    /// Absolute or root-relative source path
    pub source: PathBuf,

    /// Path the rewritten document is written to
    pub target: PathBuf,
}

impl Document {
    /// Locates a source file under `input_root` and maps it under `output_root`
    pub fn locate(input_root: &Path, source: &Path, output_root: &Path) -> Result<Self, String> {
        let id = DocumentId::from_relative(input_root, source)?;
        let mut target = output_root.to_path_buf();
        for segment in id.as_str().split('/') {
            target.push(segment);
        }
        Ok(Self {
            id,
            source: source.to_path_buf(),
            target,
        })
    }
}
