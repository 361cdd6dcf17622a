//! Tokenized pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::formatter::{tokenize, Piece};
use crate::registry::TokenRegistry;

const CACHE_SIZE: usize = 100;

/// Cache of tokenized patterns, keyed by the post-expansion pattern string.
pub(crate) struct PatternCache {
    inner: Mutex<LruCache<String, Vec<Piece>>>,
}

impl PatternCache {
    pub(crate) fn new() -> Self {
        PatternCache {
            inner: Mutex::new(LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap())),
        }
    }

    /// Get or tokenize a pattern, using the cache.
    pub(crate) fn get_or_tokenize(&self, pattern: &str, registry: &TokenRegistry) -> Vec<Piece> {
        let mut cache = self.inner.lock().unwrap();

        if let Some(pieces) = cache.get(pattern) {
            return pieces.clone();
        }

        let pieces = tokenize(pattern, registry);
        cache.put(pattern.to_string(), pieces.clone());
        pieces
    }

    /// Drops every cached tokenization. Called after a token registration,
    /// which can change how existing patterns split.
    pub(crate) fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}
