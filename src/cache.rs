#![allow(missing_docs)]
//! Interaction token cache
//!
//! Maps short opaque tokens to appraisal payloads so follow-up controls can
//! replay an appraisal without re-sending the item list through the control
//! identifier (platforms cap identifier length). The store is bounded:
//! inserting past capacity evicts the oldest entry, and a stale token
//! surfaces as the recoverable `TokenNotFound` path rather than a crash.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::constants::{DEFAULT_CACHE_CAPACITY, TOKEN_PREFIX};

struct CacheInner {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
}

/// Bounded token → payload store shared between concurrent handlers.
///
/// The token counter is owned by the cache instance; `fetch_add` keeps tokens
/// unique even when handlers insert concurrently.
pub struct TokenCache {
    inner: Mutex<CacheInner>,
    counter: AtomicU64,
    capacity: usize,
}

impl TokenCache {
    /// Create a cache holding at most `capacity` payloads.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            counter: AtomicU64::new(0),
            capacity: capacity.max(1),
        }
    }

    /// Store a payload and return the freshly allocated token.
    pub fn put(&self, payload: impl Into<String>) -> String {
        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        let token = format!("{TOKEN_PREFIX}{id}");

        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        while inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            } else {
                break;
            }
        }
        inner.order.push_back(token.clone());
        inner.entries.insert(token.clone(), payload.into());
        token
    }

    /// Look up the payload behind a token. A miss is `None`, never a panic.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.entries.get(token).cloned()
    }

    /// Number of payloads currently cached.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
