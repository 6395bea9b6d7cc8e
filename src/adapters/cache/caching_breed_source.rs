//! Caching wrapper for BreedSource.
//!
//! Successful lookups are memoized for the lifetime of the wrapper. Failures
//! are never cached, so an unknown breed reaches the inner source on every
//! call. Every delegation to the inner source is counted.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::{BreedError, BreedResult};
use crate::domain::ports::BreedSource;

/// Caching breed source decorator.
///
/// Wraps any `BreedSource` with an unbounded, exact-match memo of successful
/// lookups. Cached entries are never replaced or evicted.
///
/// The wrapper is single-threaded: cache and counter live in `RefCell`/`Cell`
/// so it can serve the `&self` lookup of the port, which makes it `!Sync`.
pub struct CachingBreedSource<S: BreedSource + ?Sized> {
    inner: Arc<S>,
    /// Cache keyed by breed name -> sub-breeds.
    cache: RefCell<HashMap<String, Vec<String>>>,
    calls_made: Cell<usize>,
}

impl<S: BreedSource + ?Sized> CachingBreedSource<S> {
    /// Wrap a shared breed source with an empty cache.
    pub fn new(inner: Arc<S>) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
            calls_made: Cell::new(0),
        }
    }

    /// Number of lookups delegated to the inner source so far.
    ///
    /// Cache hits are not counted; failed delegations are.
    pub fn calls_made(&self) -> usize {
        self.calls_made.get()
    }

    /// Whether a successful lookup for exactly `breed` is cached.
    pub fn is_cached(&self, breed: &str) -> bool {
        self.cache.borrow().contains_key(breed)
    }

    /// Number of cached breeds.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// The wrapped source.
    pub const fn inner(&self) -> &Arc<S> {
        &self.inner
    }
}

impl<S: BreedSource> CachingBreedSource<S> {
    /// Wrap an owned breed source.
    pub fn from_source(inner: S) -> Self {
        Self::new(Arc::new(inner))
    }
}

impl<S: BreedSource + ?Sized> BreedSource for CachingBreedSource<S> {
    fn sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        if let Some(cached) = self.cache.borrow().get(breed) {
            debug!(breed, "breed cache hit");
            return Ok(cached.clone());
        }

        self.calls_made.set(self.calls_made.get() + 1);
        debug!(breed, calls_made = self.calls_made.get(), "breed cache miss, delegating");

        match self.inner.sub_breeds(breed) {
            Ok(sub_breeds) => {
                // First write wins if the inner source re-entered us for the same breed.
                let mut cache = self.cache.borrow_mut();
                let stored = cache
                    .entry(breed.to_string())
                    .or_insert(sub_breeds)
                    .clone();
                debug!(breed, count = stored.len(), "cached sub-breeds");
                Ok(stored)
            }
            Err(err @ BreedError::NotFound(_)) => {
                debug!(breed, "breed not found, not caching");
                Err(err)
            }
            Err(err) => {
                warn!(breed, error = %err, "breed source failed, not caching");
                Err(err)
            }
        }
    }
}

impl<S: BreedSource + ?Sized> std::fmt::Debug for CachingBreedSource<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingBreedSource")
            .field("cached_len", &self.cached_len())
            .field("calls_made", &self.calls_made())
            .finish_non_exhaustive()
    }
}
