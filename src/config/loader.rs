//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PhiSurrogatesConfig;
use crate::domain::errors::SurrogateError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration file used when none is given
pub const DEFAULT_CONFIG_FILE: &str = "phi-surrogates.toml";

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "PHI_SURROGATES_CONFIG";

/// Prefix of per-key environment overrides
const ENV_PREFIX: &str = "PHI_SURROGATES";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PhiSurrogatesConfig
/// 4. Applies environment variable overrides (PHI_SURROGATES_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use phi_surrogates::config::loader::load_config;
///
/// let config = load_config("phi-surrogates.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PhiSurrogatesConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SurrogateError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SurrogateError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");

    Ok(config)
}

/// Loads `path` when it exists, otherwise starts from the defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PhiSurrogatesConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );

    let mut config = PhiSurrogatesConfig::default();
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Parses configuration text: substitution, TOML, overrides, validation
pub fn parse_config(contents: &str) -> Result<PhiSurrogatesConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: PhiSurrogatesConfig = toml::from_str(&contents)
        .map_err(|e| SurrogateError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &PhiSurrogatesConfig) -> Result<()> {
    config.validate().map_err(|e| {
        SurrogateError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SurrogateError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Reads `PHI_SURROGATES_<SECTION>_<KEY>` if set
fn env_override(section: &str, key: &str) -> Option<(String, String)> {
    let name = format!("{ENV_PREFIX}_{section}_{key}");
    std::env::var(&name).ok().map(|value| (name, value))
}

fn parse_override<T: FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        SurrogateError::Configuration(format!("Invalid value '{value}' for {name}: {e}"))
    })
}

/// Applies environment variable overrides using the PHI_SURROGATES_* prefix
///
/// Environment variables follow the pattern: PHI_SURROGATES_<SECTION>_<KEY>
/// For example: PHI_SURROGATES_REPLACE_WORKERS, PHI_SURROGATES_SURROGATE_SEED
fn apply_env_overrides(config: &mut PhiSurrogatesConfig) -> Result<()> {
    // Application overrides
    if let Some((_, val)) = env_override("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some((name, val)) = env_override("APPLICATION", "DRY_RUN") {
        config.application.dry_run = parse_override(&name, &val)?;
    }

    // Reference overrides
    if let Some((_, val)) = env_override("REFERENCE", "LISTS_DIR") {
        config.reference.lists_dir = PathBuf::from(val);
    }

    // Replace overrides
    if let Some((_, val)) = env_override("REPLACE", "INPUT_DIR") {
        config.replace.input_dir = Some(PathBuf::from(val));
    }
    if let Some((_, val)) = env_override("REPLACE", "OUTPUT_DIR") {
        config.replace.output_dir = Some(PathBuf::from(val));
    }
    if let Some((_, val)) = env_override("REPLACE", "FILE_EXTENSION") {
        config.replace.file_extension = val;
    }
    if let Some((name, val)) = env_override("REPLACE", "WORKERS") {
        config.replace.workers = parse_override(&name, &val)?;
    }
    if let Some((name, val)) = env_override("REPLACE", "PROGRESS_INTERVAL") {
        config.replace.progress_interval = parse_override(&name, &val)?;
    }

    // Surrogate overrides
    if let Some((name, val)) = env_override("SURROGATE", "SEED") {
        config.surrogate.seed = Some(parse_override(&name, &val)?);
    }
    if let Some((name, val)) = env_override("SURROGATE", "CACHE_BARE_PLACEHOLDERS") {
        config.surrogate.cache_bare_placeholders = parse_override(&name, &val)?;
    }

    // Verification overrides
    if let Some((name, val)) = env_override("VERIFICATION", "ENABLE_VERIFICATION") {
        config.verification.enable_verification = parse_override(&name, &val)?;
    }

    // Audit overrides
    if let Some((name, val)) = env_override("AUDIT", "ENABLED") {
        config.audit.enabled = parse_override(&name, &val)?;
    }
    if let Some((_, val)) = env_override("AUDIT", "LOG_PATH") {
        config.audit.log_path = PathBuf::from(val);
    }
    if let Some((name, val)) = env_override("AUDIT", "JSON_FORMAT") {
        config.audit.json_format = parse_override(&name, &val)?;
    }

    // Logging overrides
    if let Some((name, val)) = env_override("LOGGING", "LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override(&name, &val)?;
    }
    if let Some((_, val)) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some((_, val)) = env_override("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
