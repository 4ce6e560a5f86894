use crate::catalog::{Facet, FacetValue};
use crate::error::ParseSortOrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort order for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending computed score, catalog order on ties
    #[default]
    Relevance,
    /// Ascending founding year
    Oldest,
    /// Descending founding year
    Newest,
    /// Descending curated significance score
    Significance,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::Oldest => "oldest",
            SortOrder::Newest => "newest",
            SortOrder::Significance => "significance",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" | "score" => Ok(SortOrder::Relevance),
            "oldest" => Ok(SortOrder::Oldest),
            "newest" => Ok(SortOrder::Newest),
            "significance" | "significant" => Ok(SortOrder::Significance),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-owned query state: search term, one selection per facet, sort order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub search_term: String,
    pub region: FacetValue,
    pub tradition: FacetValue,
    pub environment: FacetValue,
    pub feature: FacetValue,
    pub sort: SortOrder,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_selection(mut self, facet: Facet, value: impl Into<FacetValue>) -> Self {
        *self.selection_mut(facet) = value.into();
        self
    }

    /// The current selection for a facet
    pub fn selection(&self, facet: Facet) -> &FacetValue {
        match facet {
            Facet::Region => &self.region,
            Facet::Tradition => &self.tradition,
            Facet::Environment => &self.environment,
            Facet::Feature => &self.feature,
        }
    }

    pub fn selection_mut(&mut self, facet: Facet) -> &mut FacetValue {
        match facet {
            Facet::Region => &mut self.region,
            Facet::Tradition => &mut self.tradition,
            Facet::Environment => &mut self.environment,
            Facet::Feature => &mut self.feature,
        }
    }

    /// True when any facet is set to something other than "All"
    pub fn has_active_filters(&self) -> bool {
        Facet::ALL.iter().any(|&f| !self.selection(f).is_all())
    }

    /// Reset every facet to "All", keeping the search term and sort order
    pub fn clear_filters(&mut self) {
        for facet in Facet::ALL {
            *self.selection_mut(facet) = FacetValue::All;
        }
    }
}
