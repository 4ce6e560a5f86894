//! Memoized query execution.
//!
//! The catalog never changes after load, so an output depends only on the
//! query state and is safe to reuse.

use crate::query::executor::{QueryEngine, QueryOutput};
use crate::query::state::QueryState;
use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of query outputs keyed on the full query state
pub struct QueryCache<'a> {
    engine: QueryEngine<'a>,
    outputs: LruCache<QueryState, QueryOutput<'a>>,
    stats: CacheStats,
}

impl<'a> QueryCache<'a> {
    /// Capacity 0 is treated as 1
    pub fn new(engine: QueryEngine<'a>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            engine,
            outputs: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Return the cached output for `state`, running the query on a miss
    pub fn get_or_run(&mut self, state: &QueryState) -> &QueryOutput<'a> {
        if self.outputs.contains(state) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            tracing::trace!(term = %state.search_term, "query cache miss");
        }

        let engine = &self.engine;
        self.outputs
            .get_or_insert(state.clone(), || engine.execute(state))
    }

    pub fn engine(&self) -> &QueryEngine<'a> {
        &self.engine
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn clear(&mut self) {
        self.outputs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Facet};
    use crate::query::state::SortOrder;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_hit_returns_identical_output() {
        let catalog = catalog();
        let engine = QueryEngine::new(&catalog);
        let mut cache = QueryCache::new(engine.clone(), 4);
        let state = QueryState::new().with_search("temple");

        let first = cache.get_or_run(&state).clone();
        let second = cache.get_or_run(&state).clone();

        assert_eq!(first, second);
        assert_eq!(first, engine.execute(&state));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.stats().hit_rate(), 0.5);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_states_are_distinct_entries() {
        let catalog = catalog();
        let mut cache = QueryCache::new(QueryEngine::new(&catalog), 8);

        let by_relevance = QueryState::new();
        let by_age = QueryState::new().with_sort(SortOrder::Oldest);
        let filtered = QueryState::new().with_selection(Facet::Region, "South Asia");

        cache.get_or_run(&by_relevance);
        cache.get_or_run(&by_age);
        cache.get_or_run(&filtered);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats().misses, 3);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let catalog = catalog();
        let mut cache = QueryCache::new(QueryEngine::new(&catalog), 2);

        let a = QueryState::new().with_search("a");
        let b = QueryState::new().with_search("b");
        let c = QueryState::new().with_search("c");

        cache.get_or_run(&a);
        cache.get_or_run(&b);
        cache.get_or_run(&a);
        cache.get_or_run(&c);
        assert_eq!(cache.len(), 2);

        // b was evicted, a survived
        cache.get_or_run(&a);
        assert_eq!(cache.stats().hits, 2);
        cache.get_or_run(&b);
        assert_eq!(cache.stats().misses, 4);
    }

    #[test]
    fn test_zero_capacity_and_clear() {
        let catalog = catalog();
        let mut cache = QueryCache::new(QueryEngine::new(&catalog), 0);
        cache.get_or_run(&QueryState::new());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.engine().catalog().len(), catalog.len());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
