//! Lazy per-symbol fetching
//!
//! Multi-symbol operations issue one request per page (usually one per
//! symbol) only when the consumer pulls past the current page. Stopping
//! early skips the remaining requests.

use crate::error::RestResult;
use std::collections::VecDeque;

type Resolve<'a, K> = Box<dyn FnOnce() -> RestResult<Vec<K>> + 'a>;
type Fetch<'a, K, T> = Box<dyn FnMut(&K) -> RestResult<Vec<T>> + 'a>;

/// Pull-based iterator over paged results
///
/// Page keys are resolved on the first pull (e.g. the market list when the
/// caller passed no symbols). The first error is yielded once and ends the
/// iteration; no later page is requested.
pub struct Pages<'a, K, T> {
    resolve: Option<Resolve<'a, K>>,
    pending: VecDeque<K>,
    fetch: Fetch<'a, K, T>,
    current: std::vec::IntoIter<T>,
    requests: usize,
    finished: bool,
}

impl<'a, K, T> Pages<'a, K, T> {
    /// Pages whose keys are produced lazily by `resolve`
    pub fn new<R, F>(resolve: R, fetch: F) -> Self
    where
        R: FnOnce() -> RestResult<Vec<K>> + 'a,
        F: FnMut(&K) -> RestResult<Vec<T>> + 'a,
    {
        Self {
            resolve: Some(Box::new(resolve)),
            pending: VecDeque::new(),
            fetch: Box::new(fetch),
            current: Vec::new().into_iter(),
            requests: 0,
            finished: false,
        }
    }

    /// Pages over a known list of keys
    pub fn from_keys<F>(keys: Vec<K>, fetch: F) -> Self
    where
        K: 'a,
        F: FnMut(&K) -> RestResult<Vec<T>> + 'a,
    {
        Self::new(move || Ok(keys), fetch)
    }

    /// Number of page requests issued so far
    pub fn requests_made(&self) -> usize {
        self.requests
    }

    /// Keys not fetched yet (zero until keys are resolved)
    pub fn pages_remaining(&self) -> usize {
        self.pending.len()
    }

    fn fail<E>(&mut self, err: E) -> Option<Result<T, E>> {
        self.finished = true;
        self.pending.clear();
        Some(Err(err))
    }
}

impl<K, T> Iterator for Pages<'_, K, T> {
    type Item = RestResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            if let Some(resolve) = self.resolve.take() {
                match resolve() {
                    Ok(keys) => self.pending = keys.into(),
                    Err(err) => return self.fail(err),
                }
            }

            let Some(key) = self.pending.pop_front() else {
                self.finished = true;
                return None;
            };

            self.requests += 1;
            match (self.fetch)(&key) {
                Ok(items) => self.current = items.into_iter(),
                Err(err) => return self.fail(err),
            }
        }
    }
}

impl<K, T> std::fmt::Debug for Pages<'_, K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pages")
            .field("requests", &self.requests)
            .field("pages_remaining", &self.pending.len())
            .field("finished", &self.finished)
            .finish()
    }
}
