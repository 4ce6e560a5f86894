//! Case folding and the precomputed searchable text of a temple.

use crate::catalog::Temple;

/// Trim surrounding whitespace and case-fold
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-folded text fields of one temple, built once per catalog load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText {
    /// name, city, country, description, highlights and features joined by spaces
    pub combined: String,
    pub name: String,
    pub city: String,
    pub features: Vec<String>,
}

impl SearchText {
    pub fn from_temple(temple: &Temple) -> Self {
        let highlights = temple.highlights.join(" ");
        let features = temple.features.join(" ");
        let fields: [&str; 6] = [
            &temple.name,
            &temple.city,
            &temple.country,
            &temple.description,
            &highlights,
            &features,
        ];
        let combined = fields.join(" ").to_lowercase();

        Self {
            combined,
            name: temple.name.to_lowercase(),
            city: temple.city.to_lowercase(),
            features: temple.features.iter().map(|f| f.to_lowercase()).collect(),
        }
    }
}
