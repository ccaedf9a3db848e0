//! Per-document consistency cache

use std::collections::HashMap;

/// Raw placeholder text to the surrogate first generated for it
///
/// Created empty for each document and dropped when the document is done, so
/// identity never carries over between documents.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: HashMap<String, String>,
    hits: usize,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored surrogate for `raw`, counting the hit
    pub fn lookup(&mut self, raw: &str) -> Option<&str> {
        let found = self.entries.get(raw).map(String::as_str);
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    /// Remember the surrogate for `raw`; an existing entry is kept
    pub fn store(&mut self, raw: &str, surrogate: &str) {
        self.entries
            .entry(raw.to_string())
            .or_insert_with(|| surrogate.to_string());
    }

    /// Return the cached surrogate or compute, store and return a new one
    pub fn get_or_try_insert<E>(
        &mut self,
        raw: &str,
        make: impl FnOnce() -> Result<String, E>,
    ) -> Result<String, E> {
        if let Some(value) = self.lookup(raw) {
            return Ok(value.to_string());
        }
        let value = make()?;
        self.store(raw, &value);
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_lookup_returns_first_value() {
        let mut cache = DocumentCache::new();
        let first: Result<String, ()> =
            cache.get_or_try_insert("[**Hospital1 4**]", || Ok("Mercy".to_string()));
        let second: Result<String, ()> =
            cache.get_or_try_insert("[**Hospital1 4**]", || Ok("Other".to_string()));

        assert_eq!(first.unwrap(), "Mercy");
        assert_eq!(second.unwrap(), "Mercy");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_distinct_suffixes_are_independent() {
        let mut cache = DocumentCache::new();
        cache.store("[**Hospital1 4**]", "Mercy");
        cache.store("[**Hospital1 5**]", "County");

        assert_eq!(cache.lookup("[**Hospital1 4**]"), Some("Mercy"));
        assert_eq!(cache.lookup("[**Hospital1 5**]"), Some("County"));
    }

    #[test]
    fn test_failed_generation_is_not_stored() {
        let mut cache = DocumentCache::new();
        let result: Result<String, &str> = cache.get_or_try_insert("[**State 1**]", || Err("empty"));

        assert!(result.is_err());
        assert!(cache.is_empty());
    }
}
