//! Surrogate generation configuration

use serde::{Deserialize, Serialize};

/// `[surrogate]` configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurrogateConfig {
    /// Run seed; when set, every document's generator is derived from it and
    /// the document's relative path, making runs reproducible
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reuse one surrogate for repeated placeholders written without a
    /// multiplicity suffix
    #[serde(default)]
    pub cache_bare_placeholders: bool,
}

impl SurrogateConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Every combination is meaningful
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SurrogateConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.cache_bare_placeholders);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_section() {
        let config: SurrogateConfig =
            toml::from_str("seed = 1234\ncache_bare_placeholders = true\n").unwrap();
        assert_eq!(config.seed, Some(1234));
        assert!(config.cache_bare_placeholders);
    }
}
