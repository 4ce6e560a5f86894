pub mod cache;
pub mod executor;
pub mod filter;
pub mod insights;
pub mod scorer;
pub mod state;

pub use cache::{CacheStats, QueryCache};
pub use executor::{run_query, QueryEngine, QueryOutput, ScoredResult};
pub use filter::matches;
pub use insights::{aggregate, Insights};
pub use scorer::{NormalizedQuery, Scorer, ScoringWeights};
pub use state::{QueryState, SortOrder};
