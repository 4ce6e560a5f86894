pub mod facets;
pub mod store;
pub mod types;

pub use facets::{Facet, FacetOptions, FacetValue, ALL_LABEL};
pub use store::Catalog;
pub use types::*;
