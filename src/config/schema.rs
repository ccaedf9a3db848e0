//! Configuration schema types
//!
//! This module defines the configuration structure mapped from
//! `phi-surrogates.toml`. Every section is optional and falls back to its
//! defaults.

use crate::surrogate::config::SurrogateConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `replace.workers`
pub const MAX_WORKERS: usize = 256;

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhiSurrogatesConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Reference data location
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Batch replacement settings
    #[serde(default)]
    pub replace: ReplaceConfig,

    /// Surrogate generation settings
    #[serde(default)]
    pub surrogate: SurrogateConfig,

    /// Output verification configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PhiSurrogatesConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.reference.validate()?;
        self.replace.validate()?;
        self.surrogate.validate()?;
        self.verification.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;

        // The output root must not exist when a run starts, so nothing else
        // may create it first
        if self.audit.enabled {
            if let Some(output_dir) = &self.replace.output_dir {
                if self.audit.log_path.starts_with(output_dir) {
                    return Err(format!(
                        "audit.log_path ({}) must not be inside replace.output_dir ({})",
                        self.audit.log_path.display(),
                        output_dir.display()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Classify and report without writing any output
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Reference data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Directory holding the candidate list files
    #[serde(default = "default_lists_dir")]
    pub lists_dir: PathBuf,
}

impl ReferenceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.lists_dir.as_os_str().is_empty() {
            return Err("reference.lists_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            lists_dir: default_lists_dir(),
        }
    }
}

/// Batch replacement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceConfig {
    /// Corpus root; may instead come from `--input-dir`
    #[serde(default)]
    pub input_dir: Option<PathBuf>,

    /// Output root, which must not exist yet; may instead come from
    /// `--output-dir`
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Extension of the files selected from the corpus
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Documents rewritten concurrently
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Log progress every this many documents
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl ReplaceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file_extension.trim_start_matches('.').is_empty() {
            return Err("replace.file_extension cannot be empty".to_string());
        }

        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(format!(
                "replace.workers must be between 1 and {}, got {}",
                MAX_WORKERS, self.workers
            ));
        }

        if self.progress_interval == 0 {
            return Err("replace.progress_interval must be > 0".to_string());
        }

        if let (Some(input), Some(output)) = (&self.input_dir, &self.output_dir) {
            if input == output {
                return Err(format!(
                    "replace.output_dir must differ from replace.input_dir ({})",
                    input.display()
                ));
            }
        }

        Ok(())
    }

    /// Input and output roots, both of which must be set before a run
    pub fn directories(&self) -> Result<(PathBuf, PathBuf), String> {
        let input = self.input_dir.clone().ok_or_else(|| {
            "replace.input_dir is not set (use --input-dir or the config file)".to_string()
        })?;
        let output = self.output_dir.clone().ok_or_else(|| {
            "replace.output_dir is not set (use --output-dir or the config file)".to_string()
        })?;
        Ok((input, output))
    }
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            input_dir: None,
            output_dir: None,
            file_extension: default_file_extension(),
            workers: default_workers(),
            progress_interval: default_progress_interval(),
        }
    }
}

/// Output verification configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VerificationConfig {
    /// Re-read and check every output after the run
    #[serde(default)]
    pub enable_verification: bool,
}

impl VerificationConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Append one entry per processed document
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// JSON lines when true, plain text otherwise
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path is required when audit.enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_lists_dir() -> PathBuf {
    PathBuf::from("./lists")
}

fn default_file_extension() -> String {
    "txt".to_string()
}

fn default_workers() -> usize {
    4
}

fn default_progress_interval() -> usize {
    1000
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/surrogates.log")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PhiSurrogatesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.replace.workers, 4);
        assert_eq!(config.replace.progress_interval, 1000);
        assert_eq!(config.replace.file_extension, "txt");
        assert_eq!(config.reference.lists_dir, PathBuf::from("./lists"));
        assert!(config.audit.json_format);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PhiSurrogatesConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert!(config.replace.input_dir.is_none());
        assert!(config.surrogate.seed.is_none());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = PhiSurrogatesConfig::default();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level 'verbose'"));
    }

    #[test]
    fn test_workers_bounds() {
        let mut config = ReplaceConfig::default();
        config.workers = 0;
        assert!(config.validate().is_err());

        config.workers = MAX_WORKERS + 1;
        assert!(config.validate().is_err());

        config.workers = MAX_WORKERS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_progress_interval_zero() {
        let config = ReplaceConfig {
            progress_interval: 0,
            ..Default::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .contains("progress_interval"));
    }

    #[test]
    fn test_audit_log_inside_output_rejected() {
        let mut config = PhiSurrogatesConfig::default();
        config.replace.output_dir = Some(PathBuf::from("/data/out"));
        config.audit.log_path = PathBuf::from("/data/out/audit/surrogates.log");
        assert!(config.validate().is_ok());

        config.audit.enabled = true;
        assert!(config.validate().unwrap_err().contains("audit.log_path"));

        config.audit.log_path = PathBuf::from("/data/out-audit/surrogates.log");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let config = ReplaceConfig {
            input_dir: Some(PathBuf::from("./corpus")),
            output_dir: Some(PathBuf::from("./corpus")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_directories_required() {
        let config = ReplaceConfig::default();
        assert!(config.directories().unwrap_err().contains("input_dir"));

        let config = ReplaceConfig {
            input_dir: Some(PathBuf::from("in")),
            output_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert_eq!(
            config.directories().unwrap(),
            (PathBuf::from("in"), PathBuf::from("out"))
        );
    }

    #[test]
    fn test_invalid_rotation() {
        let config = LoggingConfig {
            local_rotation: "size".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
