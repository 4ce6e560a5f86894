use crate::catalog::{Catalog, Temple};
use crate::query::filter::matches;
use crate::query::insights::{aggregate, Insights};
use crate::query::scorer::{NormalizedQuery, Scorer, ScoringWeights};
use crate::query::state::{QueryState, SortOrder};
use serde::Serialize;

/// A temple paired with its computed relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredResult<'a> {
    pub temple: &'a Temple,
    pub score: f64,
}

/// Ranked results together with the insights computed over them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutput<'a> {
    pub results: Vec<ScoredResult<'a>>,
    pub insights: Insights,
}

/// Query engine over a borrowed, immutable catalog
#[derive(Debug, Clone)]
pub struct QueryEngine<'a> {
    catalog: &'a Catalog,
    scorer: Scorer,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            scorer: Scorer::with_defaults(),
        }
    }

    /// Create engine with custom scoring weights
    pub fn with_scoring_weights(catalog: &'a Catalog, weights: ScoringWeights) -> Self {
        Self {
            catalog,
            scorer: Scorer::new(weights),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Score, filter and sort the catalog for `state`
    pub fn run(&self, state: &QueryState) -> Vec<ScoredResult<'a>> {
        let query = NormalizedQuery::new(&state.search_term);

        let mut results: Vec<ScoredResult<'a>> = self
            .catalog
            .entries()
            .map(|(temple, text)| ScoredResult {
                temple,
                score: self.scorer.score_text(temple, text, &query),
            })
            .filter(|r| matches(r.temple, state))
            .collect();

        sort_results(&mut results, state.sort);

        tracing::debug!(
            query = query.as_str(),
            sort = %state.sort,
            filtered = state.has_active_filters(),
            results = results.len(),
            "ran query"
        );

        results
    }

    /// Run the query and aggregate insights over its results
    pub fn execute(&self, state: &QueryState) -> QueryOutput<'a> {
        let results = self.run(state);
        let insights = aggregate(&results);
        QueryOutput { results, insights }
    }
}

/// Run `state` against `catalog` with default scoring weights
pub fn run_query<'a>(catalog: &'a Catalog, state: &QueryState) -> Vec<ScoredResult<'a>> {
    QueryEngine::new(catalog).run(state)
}

/// Stable sort, so equal keys keep catalog order
fn sort_results(results: &mut [ScoredResult<'_>], order: SortOrder) {
    match order {
        SortOrder::Relevance => {
            results.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
        SortOrder::Oldest => {
            results.sort_by_key(|r| r.temple.founded);
        }
        // Exact reverse of oldest, ties included
        SortOrder::Newest => {
            results.sort_by_key(|r| r.temple.founded);
            results.reverse();
        }
        SortOrder::Significance => {
            results.sort_by(|a, b| {
                b.temple
                    .significance_score
                    .total_cmp(&a.temple.significance_score)
            });
        }
    }
}
