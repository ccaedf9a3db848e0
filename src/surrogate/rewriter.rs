//! Document rewriting
//!
//! Scans a document left to right for placeholder spans and splices in their
//! surrogates. Text between spans is copied unchanged.

use crate::domain::Result;
use crate::surrogate::cache::DocumentCache;
use crate::surrogate::classifier::{Category, Classification, PlaceholderClassifier};
use crate::surrogate::generator::generate;
use crate::surrogate::reference::ReferenceLists;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Pattern of a placeholder span: `[**`, no `[`, then `**]`
pub const PLACEHOLDER_SPAN: &str = r"\[\*\*[^\[]*\*\*\]";

/// Compiled [`PLACEHOLDER_SPAN`]
pub fn span_regex() -> Result<&'static Regex> {
    static SPAN: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = SPAN.get() {
        return Ok(re);
    }
    let re = Regex::new(PLACEHOLDER_SPAN)?;
    Ok(SPAN.get_or_init(|| re))
}

/// Every placeholder span in `text`, in document order
pub fn find_placeholders(text: &str) -> Result<Vec<&str>> {
    Ok(span_regex()?.find_iter(text).map(|m| m.as_str()).collect())
}

/// Whether `text` still contains a placeholder span
pub fn has_residual_placeholders(text: &str) -> Result<bool> {
    Ok(span_regex()?.is_match(text))
}

/// Counters gathered while rewriting one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    /// Spans found
    pub placeholders: usize,
    /// Spans recognized by a rule
    pub recognized: usize,
    /// Spans no rule recognized
    pub fallbacks: usize,
    /// Spans answered from the per-document cache
    pub cache_hits: usize,
    pub by_category: BTreeMap<Category, usize>,
}

impl RewriteStats {
    fn record(&mut self, classification: &Classification) {
        self.placeholders += 1;
        if classification.is_fallback() {
            self.fallbacks += 1;
        } else {
            self.recognized += 1;
        }
        *self.by_category.entry(classification.category).or_insert(0) += 1;
    }
}

/// Rewritten text and its counters
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub text: String,
    pub stats: RewriteStats,
}

/// Rewrites documents against one classifier and one set of reference lists
pub struct DocumentRewriter<'a, C: PlaceholderClassifier + ?Sized> {
    classifier: &'a C,
    lists: &'a ReferenceLists,
    cache_bare: bool,
}

impl<'a, C: PlaceholderClassifier + ?Sized> DocumentRewriter<'a, C> {
    pub fn new(classifier: &'a C, lists: &'a ReferenceLists) -> Self {
        Self {
            classifier,
            lists,
            cache_bare: false,
        }
    }

    /// Also cache placeholders written without a multiplicity suffix
    pub fn with_bare_caching(mut self, cache_bare: bool) -> Self {
        self.cache_bare = cache_bare;
        self
    }

    /// Rewrite one document with a fresh cache
    ///
    /// # Errors
    ///
    /// Fails when a placeholder needs a reference list that is empty.
    pub fn rewrite<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<RewriteOutcome> {
        let span = span_regex()?;
        let mut cache = DocumentCache::new();
        let mut stats = RewriteStats::default();
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for m in span.find_iter(text) {
            out.push_str(&text[last..m.start()]);

            let raw = m.as_str();
            let classification = self.classifier.classify(raw);
            stats.record(&classification);

            let surrogate = if classification.form.is_cacheable(self.cache_bare) {
                cache.get_or_try_insert(raw, || generate(&classification, self.lists, &mut *rng))?
            } else {
                generate(&classification, self.lists, rng)?
            };

            out.push_str(&surrogate);
            last = m.end();
        }
        out.push_str(&text[last..]);

        stats.cache_hits = cache.hits();

        Ok(RewriteOutcome { text: out, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SurrogateError;
    use crate::surrogate::classifier::RuleRegistry;
    use crate::surrogate::reference::ListKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lists() -> ReferenceLists {
        ReferenceLists::from_lists([
            (
                ListKind::Hospitals,
                vec!["Mercy", "County", "General", "St. Luke", "Riverside"],
            ),
            (ListKind::LastNames, vec!["SMITH", "JONES", "BROWN"]),
            (ListKind::FemaleFirstNames, vec!["MARY"]),
            (ListKind::MaleFirstNames, vec!["JAMES"]),
        ])
    }

    fn rewrite(text: &str, seed: u64) -> RewriteOutcome {
        let registry = RuleRegistry::builtin().unwrap();
        let lists = lists();
        let rewriter = DocumentRewriter::new(&registry, &lists);
        rewriter
            .rewrite(text, &mut StdRng::seed_from_u64(seed))
            .unwrap()
    }

    #[test]
    fn test_age_over_90() {
        let out = rewrite("Patient is [**Age over 90 13**] years old.", 1);
        let age = out
            .text
            .strip_prefix("Patient is ")
            .and_then(|s| s.strip_suffix(" years old."))
            .unwrap();
        assert!((90..=100).contains(&age.parse::<u32>().unwrap()));
    }

    #[test]
    fn test_numbered_placeholder_is_consistent() {
        let out = rewrite("[**Hospital1 4**] then [**Hospital1 4**]", 2);
        let (a, b) = out.text.split_once(" then ").unwrap();
        assert_eq!(a, b);
        assert_eq!(out.stats.cache_hits, 1);
    }

    #[test]
    fn test_literal_and_unknown() {
        let out = rewrite("on [**2150-3-5**] at [**Unknown Category Xyz**].", 3);
        assert_eq!(out.text, "on 2150-3-5 at .");
        assert_eq!(out.stats.placeholders, 2);
        assert_eq!(out.stats.fallbacks, 1);
    }

    #[test]
    fn test_year_four_digits() {
        let out = rewrite("[**Year (4 digits) 7**]", 4);
        assert_eq!(out.text.len(), 4);
        let year: u32 = out.text.parse().unwrap();
        assert!((1950..=2016).contains(&year));
    }

    #[test]
    fn test_text_outside_spans_preserved() {
        let text = "Line one\n\n   \n\tDr. [**Last Name (NamePattern1) 2**] saw him.\r\nEnd [** **]";
        let out = rewrite(text, 5);

        assert!(out.text.starts_with("Line one\n\n   \n\tDr. "));
        assert!(out.text.contains(" saw him.\r\nEnd "));
        assert!(out.text.ends_with("End "));
        assert!(!has_residual_placeholders(&out.text).unwrap());
    }

    #[test]
    fn test_bare_forms_fresh_unless_configured() {
        let registry = RuleRegistry::builtin().unwrap();
        let lists = lists();
        let text = "[**Hospital **]|".repeat(40);

        let fresh = DocumentRewriter::new(&registry, &lists)
            .rewrite(&text, &mut StdRng::seed_from_u64(6))
            .unwrap();
        let values: std::collections::HashSet<&str> =
            fresh.text.split('|').filter(|s| !s.is_empty()).collect();
        assert!(values.len() > 1);

        let cached = DocumentRewriter::new(&registry, &lists)
            .with_bare_caching(true)
            .rewrite(&text, &mut StdRng::seed_from_u64(6))
            .unwrap();
        let values: std::collections::HashSet<&str> =
            cached.text.split('|').filter(|s| !s.is_empty()).collect();
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_empty_list_fails_document() {
        let registry = RuleRegistry::builtin().unwrap();
        let lists = lists();
        let err = DocumentRewriter::new(&registry, &lists)
            .rewrite("[**Country 1**]", &mut StdRng::seed_from_u64(7))
            .unwrap_err();
        assert!(matches!(err, SurrogateError::EmptyReferenceList(ListKind::Countries)));
    }

    #[test]
    fn test_find_placeholders() {
        let spans = find_placeholders("a [**Name 1**] b [**3/4**] [* not *]").unwrap();
        assert_eq!(spans, vec!["[**Name 1**]", "[**3/4**]"]);
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        let text = "Nothing to replace here.\n";
        let out = rewrite(text, 8);
        assert_eq!(out.text, text);
        assert_eq!(out.stats, RewriteStats::default());
    }
}
