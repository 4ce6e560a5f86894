//! # Temple Atlas
//!
//! Ranking, filtering and aggregation over a small, static catalog of
//! temples. Given a catalog and a query state the crate deterministically
//! computes a scored, ordered result list and summary statistics about it.
//!
//! ## Architecture
//!
//! - [`catalog`] - Temple records, catalog loading/validation, facet options
//! - [`query`] - Query state, relevance scoring, filtering, sorting, insights, caching
//! - [`browse`] - Line-oriented interactive session holding the query state
//! - [`output`] - Terminal rendering used by the `temple-atlas` binary
//! - [`utils`] - Configuration and text normalization
//! - [`error`] - Catalog and parsing errors
//!
//! ## Quick Start
//!
//! ```no_run
//! use temple_atlas::catalog::{Catalog, Facet, FacetOptions};
//! use temple_atlas::query::{QueryEngine, QueryState, SortOrder};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let options = FacetOptions::from_catalog(&catalog);
//! println!("{} regions", options.regions.len() - 1);
//!
//! let state = QueryState::new()
//!     .with_search("angkor")
//!     .with_selection(Facet::Region, "Southeast Asia")
//!     .with_sort(SortOrder::Relevance);
//!
//! let output = QueryEngine::new(&catalog).execute(&state);
//! for result in &output.results {
//!     println!("{} {:.1}", result.temple.name, result.score);
//! }
//! println!("{:?}", output.insights);
//! ```
//!
//! Every query function is pure: the catalog is never mutated after load and
//! identical inputs always produce identical output.

pub mod browse;
pub mod catalog;
pub mod error;
pub mod output;
pub mod query;
pub mod utils;

pub use catalog::{Catalog, Facet, FacetOptions, FacetValue, Temple, TempleId};
pub use error::{CatalogError, CommandError, ParseSortOrderError};
pub use query::{
    aggregate, matches, run_query, Insights, QueryEngine, QueryOutput, QueryState, ScoredResult,
    SortOrder,
};
