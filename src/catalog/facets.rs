//! Facet option lists derived from the catalog.
//!
//! Options are computed once per catalog and never updated. Region,
//! tradition and environment keep the order in which values first appear in
//! the catalog; features are flattened across temples and sorted.

use crate::catalog::store::Catalog;
use crate::catalog::types::Temple;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::fmt;

/// Label of the "no filter" sentinel
pub const ALL_LABEL: &str = "All";

/// A categorical dimension usable as a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Region,
    Tradition,
    Environment,
    Feature,
}

impl Facet {
    pub const ALL: [Facet; 4] = [
        Facet::Region,
        Facet::Tradition,
        Facet::Environment,
        Facet::Feature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Facet::Region => "Region",
            Facet::Tradition => "Tradition",
            Facet::Environment => "Environment",
            Facet::Feature => "Feature",
        }
    }
}

/// A facet selection: either the "All" sentinel or one concrete value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FacetValue {
    #[default]
    All,
    Value(String),
}

impl FacetValue {
    pub fn is_all(&self) -> bool {
        matches!(self, FacetValue::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FacetValue::All => ALL_LABEL,
            FacetValue::Value(v) => v,
        }
    }
}

impl From<&str> for FacetValue {
    /// "All" (any case, surrounding whitespace ignored) maps to the sentinel
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_LABEL) {
            FacetValue::All
        } else {
            FacetValue::Value(trimmed.to_string())
        }
    }
}

impl From<String> for FacetValue {
    fn from(s: String) -> Self {
        FacetValue::from(s.as_str())
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FacetValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Distinct values per facet, each list led by [`FacetValue::All`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub regions: Vec<FacetValue>,
    pub traditions: Vec<FacetValue>,
    pub environments: Vec<FacetValue>,
    pub features: Vec<FacetValue>,
}

impl FacetOptions {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_temples(catalog.temples())
    }

    /// Derive options from any temple slice; an empty slice yields `[All]` lists
    pub fn from_temples(temples: &[Temple]) -> Self {
        let mut features: Vec<&str> = temples
            .iter()
            .flat_map(|t| t.features.iter().map(String::as_str))
            .collect::<FxHashSet<&str>>()
            .into_iter()
            .collect();
        features.sort_unstable();

        Self {
            regions: first_seen(temples.iter().map(|t| t.region.as_str())),
            traditions: first_seen(temples.iter().map(|t| t.tradition.as_str())),
            environments: first_seen(temples.iter().map(|t| t.environment.as_str())),
            features: with_sentinel(features),
        }
    }

    pub fn options(&self, facet: Facet) -> &[FacetValue] {
        match facet {
            Facet::Region => &self.regions,
            Facet::Tradition => &self.traditions,
            Facet::Environment => &self.environments,
            Facet::Feature => &self.features,
        }
    }

    /// Whether `value` is one of the options offered for `facet`
    pub fn contains(&self, facet: Facet, value: &FacetValue) -> bool {
        self.options(facet).contains(value)
    }
}

/// Dedup preserving first occurrence
fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetValue> {
    let mut seen: FxHashSet<&'a str> = FxHashSet::default();
    let unique: Vec<&str> = values.filter(|v| seen.insert(*v)).collect();
    with_sentinel(unique)
}

fn with_sentinel(values: Vec<&str>) -> Vec<FacetValue> {
    std::iter::once(FacetValue::All)
        .chain(values.into_iter().map(|v| FacetValue::Value(v.to_string())))
        .collect()
}
