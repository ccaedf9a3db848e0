//! Surrogate engine
//!
//! Bundles the shared, read-only state (reference lists and compiled rules)
//! with the generation settings. Cloning is cheap, so each worker gets its
//! own handle.

use crate::domain::{DocumentId, Result};
use crate::surrogate::classifier::{Classification, PlaceholderClassifier, RuleRegistry};
use crate::surrogate::config::SurrogateConfig;
use crate::surrogate::reference::{load_reference_lists, ReferenceLists};
use crate::surrogate::rewriter::{find_placeholders, DocumentRewriter, RewriteOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Arc;

/// Shared surrogate engine
#[derive(Debug, Clone)]
pub struct SurrogateEngine {
    lists: Arc<ReferenceLists>,
    rules: Arc<RuleRegistry>,
    config: SurrogateConfig,
}

impl SurrogateEngine {
    pub fn new(lists: ReferenceLists, rules: RuleRegistry, config: SurrogateConfig) -> Self {
        Self {
            lists: Arc::new(lists),
            rules: Arc::new(rules),
            config,
        }
    }

    /// Load the reference lists from `lists_dir` and compile the built-in rules
    ///
    /// # Errors
    ///
    /// Fails if any list file is missing or a rule does not compile; both abort
    /// the run.
    pub fn load(lists_dir: impl AsRef<Path>, config: SurrogateConfig) -> Result<Self> {
        let rules = RuleRegistry::builtin()?;
        let lists = load_reference_lists(lists_dir)?;
        Ok(Self::new(lists, rules, config))
    }

    pub fn lists(&self) -> &ReferenceLists {
        &self.lists
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    pub fn config(&self) -> &SurrogateConfig {
        &self.config
    }

    /// Random generator for one document
    ///
    /// With a run seed the generator depends only on the seed and the
    /// document's relative path, never on scheduling order.
    pub fn document_rng(&self, id: &DocumentId) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::from_seed(derive_document_seed(seed, id)),
            None => StdRng::from_entropy(),
        }
    }

    /// Rewrite one document with its own generator and a fresh cache
    pub fn rewrite_document(&self, id: &DocumentId, text: &str) -> Result<RewriteOutcome> {
        let mut rng = self.document_rng(id);
        self.rewrite_with(text, &mut rng)
    }

    /// Rewrite text with a caller-supplied generator
    pub fn rewrite_with(&self, text: &str, rng: &mut StdRng) -> Result<RewriteOutcome> {
        DocumentRewriter::new(self.rules.as_ref(), self.lists.as_ref())
            .with_bare_caching(self.config.cache_bare_placeholders)
            .rewrite(text, rng)
    }

    /// Classify every placeholder in `text` without generating anything
    pub fn classify_all<'t>(&self, text: &'t str) -> Result<Vec<(&'t str, Classification)>> {
        Ok(find_placeholders(text)?
            .into_iter()
            .map(|raw| (raw, self.rules.classify(raw)))
            .collect())
    }
}

/// SHA-256 of the run seed and the document's relative path
pub fn derive_document_seed(seed: u64, id: &DocumentId) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(id.as_str().as_bytes());
    let digest = hasher.finalize();

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
