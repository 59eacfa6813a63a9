//! Session cache for extraction results.
//!
//! Navigating back and forth between files and models must not re-run
//! extraction, so results are memoized per (model, file identity). Entries
//! never expire within a session and are only overwritten when the same key
//! is re-submitted. Failed extractions are never stored, so a retry is
//! always possible on the next access.
//!
//! The file identity is name-based, not content-based: two different files
//! sharing a name silently collide. Callers wanting stronger identity
//! should pass a content hash or a server-issued document id as the file
//! identity instead of the bare name.

use indexmap::IndexMap;

use crate::block::ExtractionResult;
use crate::error::Result;

/// Memoizes extraction results per (model, file identity).
///
/// Plain owned state with no interior mutability: the embedding application
/// runs a single-threaded event loop, so at most one lookup-then-store
/// sequence is in flight at a time. Concurrent misses for the same key are
/// not de-duplicated; in a multi-threaded port, add an in-flight map keyed
/// like the cache.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    entries: IndexMap<String, ExtractionResult>,
}

impl ResultCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The cache key for a (model, file identity) pair.
    pub fn key(model: &str, file_identity: &str) -> String {
        format!("{}::{}", model, file_identity)
    }

    /// Look up a cached result.
    pub fn get(&self, model: &str, file_identity: &str) -> Option<&ExtractionResult> {
        self.entries.get(&Self::key(model, file_identity))
    }

    /// Store a result, overwriting any previous entry for the same key.
    pub fn put(&mut self, model: &str, file_identity: &str, result: ExtractionResult) {
        self.entries.insert(Self::key(model, file_identity), result);
    }

    /// Look up a result, invoking `fetch` on a miss.
    ///
    /// A successful fetch is stored unconditionally; a failed fetch is
    /// returned as-is and nothing is cached, so the next access retries.
    pub fn get_or_fetch<F>(
        &mut self,
        model: &str,
        file_identity: &str,
        fetch: F,
    ) -> Result<&ExtractionResult>
    where
        F: FnOnce() -> Result<ExtractionResult>,
    {
        let key = Self::key(model, file_identity);
        if !self.entries.contains_key(&key) {
            log::debug!("cache miss for {}", key);
            let result = fetch()?;
            self.entries.insert(key.clone(), result);
        } else {
            log::trace!("cache hit for {}", key);
        }
        Ok(&self.entries[key.as_str()])
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no results.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn result_with_model(model: &str) -> ExtractionResult {
        ExtractionResult {
            model: Some(model.to_string()),
            metadata: Default::default(),
            content: Default::default(),
        }
    }

    #[test]
    fn test_key_format() {
        assert_eq!(ResultCache::key("docling", "report.pdf"), "docling::report.pdf");
    }

    #[test]
    fn test_get_miss_and_put() {
        let mut cache = ResultCache::new();
        assert!(cache.get("m", "f.pdf").is_none());
        cache.put("m", "f.pdf", result_with_model("m"));
        assert!(cache.get("m", "f.pdf").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_models_do_not_collide() {
        let mut cache = ResultCache::new();
        cache.put("omnidocs", "f.pdf", result_with_model("omnidocs"));
        assert!(cache.get("docling", "f.pdf").is_none());
    }

    #[test]
    fn test_put_overwrites_same_key() {
        let mut cache = ResultCache::new();
        cache.put("m", "f.pdf", result_with_model("old"));
        cache.put("m", "f.pdf", result_with_model("new"));
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get("m", "f.pdf").and_then(|r| r.model.as_deref()),
            Some("new")
        );
    }

    #[test]
    fn test_get_or_fetch_only_fetches_on_miss() {
        let mut cache = ResultCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let fetched = cache.get_or_fetch("m", "f.pdf", || {
                calls += 1;
                Ok(result_with_model("m"))
            });
            assert!(fetched.is_ok());
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_failed_fetch_is_not_cached() {
        let mut cache = ResultCache::new();
        let failed = cache.get_or_fetch("m", "f.pdf", || {
            Err(Error::Extraction {
                file: "f.pdf".to_string(),
                reason: "status 502".to_string(),
            })
        });
        assert!(failed.is_err());
        assert!(cache.is_empty());

        // Retry succeeds and is cached
        let retried = cache.get_or_fetch("m", "f.pdf", || Ok(result_with_model("m")));
        assert!(retried.is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_in_insertion_order() {
        let mut cache = ResultCache::new();
        cache.put("m", "b.pdf", result_with_model("m"));
        cache.put("m", "a.pdf", result_with_model("m"));
        let keys: Vec<&str> = cache.keys().collect();
        assert_eq!(keys, vec!["m::b.pdf", "m::a.pdf"]);
    }
}
