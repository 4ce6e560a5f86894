use crate::catalog::types::{Temple, TempleId};
use crate::error::CatalogError;
use crate::utils::text::SearchText;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Catalog bundled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/temples.json");

/// Immutable, validated sequence of temples in catalog order.
///
/// Each temple's case-folded search text is computed once here so the
/// query pipeline never rebuilds it.
#[derive(Debug, Clone)]
pub struct Catalog {
    temples: Vec<Temple>,
    search_texts: Vec<SearchText>,
}

impl Catalog {
    /// Validate the records and build the catalog
    pub fn new(temples: Vec<Temple>) -> Result<Self, CatalogError> {
        if temples.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: FxHashSet<TempleId> = FxHashSet::default();
        for temple in &temples {
            if !seen.insert(temple.id) {
                return Err(CatalogError::DuplicateId(temple.id));
            }
            if temple.name.trim().is_empty() {
                return Err(CatalogError::MissingName(temple.id));
            }
            let score = temple.significance_score;
            if !score.is_finite() || score < 0.0 {
                return Err(CatalogError::InvalidSignificance {
                    id: temple.id,
                    score,
                });
            }
        }

        let search_texts = temples.iter().map(SearchText::from_temple).collect();

        Ok(Self {
            temples,
            search_texts,
        })
    }

    /// Parse a JSON array of temple records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let temples: Vec<Temple> = serde_json::from_str(json)?;
        Self::new(temples)
    }

    /// Read and parse a JSON catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            temples = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.temples.len()
    }

    /// Always false for a validated catalog
    pub fn is_empty(&self) -> bool {
        self.temples.is_empty()
    }

    pub fn temples(&self) -> &[Temple] {
        &self.temples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Temple> {
        self.temples.iter()
    }

    /// Look up a temple by id
    pub fn get(&self, id: TempleId) -> Option<&Temple> {
        self.temples.iter().find(|t| t.id == id)
    }

    /// Temples paired with their precomputed search text, in catalog order
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Temple, &SearchText)> {
        self.temples.iter().zip(self.search_texts.iter())
    }
}
