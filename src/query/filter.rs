//! Conjunctive facet filter.
//!
//! A temple passes when every facet is either "All" or matches the temple.
//! Region, tradition and environment compare by equality; feature checks
//! membership in the temple's feature list.

use crate::catalog::{Facet, FacetValue, Temple};
use crate::query::state::QueryState;

/// Whether `temple` satisfies every facet selection in `state`
pub fn matches(temple: &Temple, state: &QueryState) -> bool {
    Facet::ALL
        .iter()
        .all(|&facet| matches_facet(temple, facet, state.selection(facet)))
}

/// Whether `temple` satisfies a single facet selection
pub fn matches_facet(temple: &Temple, facet: Facet, selection: &FacetValue) -> bool {
    let value = match selection {
        FacetValue::All => return true,
        FacetValue::Value(v) => v.as_str(),
    };

    match facet {
        Facet::Region => temple.region == value,
        Facet::Tradition => temple.tradition == value,
        Facet::Environment => temple.environment == value,
        Facet::Feature => temple.has_feature(value),
    }
}
