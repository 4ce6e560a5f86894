//! Relevance scoring for temples
//!
//! A temple's score starts from its curated significance:
//! - empty query: significance unchanged
//! - query absent from the temple's text: significance scaled by the miss penalty
//! - query present: significance plus independent name, city and feature bonuses
//!
//! Matching is plain case-insensitive substring containment.

use crate::catalog::Temple;
use crate::utils::text::{normalize_term, SearchText};
use memchr::memmem::Finder;
use serde::{Deserialize, Serialize};

/// Configurable weights for scoring factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Added when the query appears in the temple name
    #[serde(default = "default_name_bonus")]
    pub name_bonus: f64,
    /// Added when the query appears in the city
    #[serde(default = "default_city_bonus")]
    pub city_bonus: f64,
    /// Added when the query appears in any single feature
    #[serde(default = "default_feature_bonus")]
    pub feature_bonus: f64,
    /// Multiplier applied when the query appears nowhere in the temple's text
    #[serde(default = "default_miss_penalty")]
    pub miss_penalty: f64,
}

fn default_name_bonus() -> f64 {
    25.0
}

fn default_city_bonus() -> f64 {
    15.0
}

fn default_feature_bonus() -> f64 {
    10.0
}

fn default_miss_penalty() -> f64 {
    0.7
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name_bonus: default_name_bonus(),
            city_bonus: default_city_bonus(),
            feature_bonus: default_feature_bonus(),
            miss_penalty: default_miss_penalty(),
        }
    }
}

/// A trimmed, case-folded search term with a prebuilt substring finder
#[derive(Debug, Clone)]
pub struct NormalizedQuery {
    term: String,
    finder: Finder<'static>,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        let term = normalize_term(raw);
        let finder = Finder::new(term.as_bytes()).into_owned();
        Self { term, finder }
    }

    pub fn as_str(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Substring containment in an already case-folded haystack
    #[inline]
    pub fn found_in(&self, haystack: &str) -> bool {
        self.finder.find(haystack.as_bytes()).is_some()
    }
}

/// Scorer calculates relevance scores for temples
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Create a scorer with default weights
    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Score a temple, building its search text on the fly
    pub fn score(&self, temple: &Temple, query: &NormalizedQuery) -> f64 {
        if query.is_empty() {
            return temple.significance_score;
        }
        self.score_text(temple, &SearchText::from_temple(temple), query)
    }

    /// Score a temple against its precomputed search text
    pub fn score_text(&self, temple: &Temple, text: &SearchText, query: &NormalizedQuery) -> f64 {
        let base = temple.significance_score;
        if query.is_empty() {
            return base;
        }

        if !query.found_in(&text.combined) {
            return base * self.weights.miss_penalty;
        }

        let mut score = base;

        if query.found_in(&text.name) {
            score += self.weights.name_bonus;
        }

        if query.found_in(&text.city) {
            score += self.weights.city_bonus;
        }

        if text.features.iter().any(|f| query.found_in(f)) {
            score += self.weights.feature_bonus;
        }

        score
    }

    /// Get the weights (for external calculations)
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn temple(name: &str, city: &str, features: &[&str], significance: f64) -> Temple {
        Temple {
            id: 1,
            name: name.to_string(),
            city: city.to_string(),
            country: "Cambodia".to_string(),
            description: "Sandstone temple complex".to_string(),
            website: None,
            region: "Southeast Asia".to_string(),
            tradition: "Hindu-Buddhist".to_string(),
            environment: "Jungle".to_string(),
            founded: 1113,
            highlights: vec!["Bas-reliefs".to_string()],
            features: features.iter().map(|f| f.to_string()).collect(),
            significance_score: significance,
            visiting_hours: String::new(),
            best_visit: String::new(),
        }
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.name_bonus, 25.0);
        assert_eq!(weights.city_bonus, 15.0);
        assert_eq!(weights.feature_bonus, 10.0);
        assert_eq!(weights.miss_penalty, 0.7);
    }

    #[test]
    fn test_partial_weights_json() {
        let weights: ScoringWeights = serde_json::from_str(r#"{"name_bonus": 40}"#).unwrap();
        assert_eq!(weights.name_bonus, 40.0);
        assert_eq!(weights.city_bonus, 15.0);
        assert_eq!(weights.miss_penalty, 0.7);
    }

    #[test]
    fn test_normalized_query() {
        let query = NormalizedQuery::new("  AnGkOr  ");
        assert_eq!(query.as_str(), "angkor");
        assert!(!query.is_empty());
        assert!(query.found_in("angkor wat"));
        assert!(!query.found_in("borobudur"));
        assert!(NormalizedQuery::new(" \t ").is_empty());
    }

    #[test]
    fn test_normalized_query_clone_and_debug() {
        let query = NormalizedQuery::new("Borobudur");
        let copy = query.clone();
        assert!(copy.found_in("candi borobudur"));
        assert!(format!("{:?}", copy).contains("borobudur"));
    }

    #[test]
    fn test_empty_query_returns_significance() {
        let scorer = Scorer::with_defaults();
        let t = temple("Angkor Wat", "Siem Reap", &["UNESCO Site"], 95.0);
        assert_eq!(scorer.score(&t, &NormalizedQuery::new("")), 95.0);
        assert_eq!(scorer.score(&t, &NormalizedQuery::new("   ")), 95.0);
    }

    #[test]
    fn test_miss_applies_penalty() {
        let scorer = Scorer::with_defaults();
        let t = temple("Borobudur", "Magelang", &["UNESCO Site"], 90.0);
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("angkor")), 63.0);
    }

    #[test]
    fn test_name_bonus() {
        let scorer = Scorer::with_defaults();
        let t = temple("Angkor Wat", "Siem Reap", &["UNESCO Site"], 95.0);
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("ANGKOR")), 120.0);
    }

    #[test]
    fn test_text_match_without_bonus() {
        let scorer = Scorer::with_defaults();
        let t = temple("Angkor Wat", "Siem Reap", &["UNESCO Site"], 95.0);
        // Only in the description and country
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("sandstone")), 95.0);
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("cambodia")), 95.0);
    }

    #[test]
    fn test_bonuses_are_additive() {
        let scorer = Scorer::with_defaults();
        let t = temple("Lotus Temple", "Lotus City", &["Lotus Pond"], 50.0);
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("lotus")), 100.0);

        let city_and_feature = temple("Golden Temple", "Kyoto", &["Kyoto Gardens"], 50.0);
        assert_relative_eq!(
            scorer.score(&city_and_feature, &NormalizedQuery::new("kyoto")),
            75.0
        );
    }

    #[test]
    fn test_feature_bonus_counted_once() {
        let scorer = Scorer::with_defaults();
        let t = temple("Shrine", "Nara", &["Deer Park", "Deer Feeding"], 40.0);
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("deer")), 50.0);
    }

    #[test]
    fn test_score_text_matches_score() {
        let scorer = Scorer::with_defaults();
        let t = temple("Angkor Wat", "Siem Reap", &["Sunrise Views"], 95.0);
        let text = SearchText::from_temple(&t);
        for raw in ["", "wat", "reap", "sunrise", "nothing here"] {
            let query = NormalizedQuery::new(raw);
            assert_eq!(scorer.score(&t, &query), scorer.score_text(&t, &text, &query));
        }
    }

    #[test]
    fn test_custom_weights() {
        let scorer = Scorer::new(ScoringWeights {
            name_bonus: 1.0,
            city_bonus: 2.0,
            feature_bonus: 3.0,
            miss_penalty: 0.5,
        });
        let t = temple("Angkor Wat", "Siem Reap", &["UNESCO Site"], 10.0);
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("angkor")), 11.0);
        assert_relative_eq!(scorer.score(&t, &NormalizedQuery::new("zzz")), 5.0);
        assert_eq!(scorer.weights().feature_bonus, 3.0);
    }
}
