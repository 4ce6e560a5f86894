//! Aggregate statistics over the current result list.
//!
//! Recomputed from scratch for every result list. Counting ties go to the
//! value that appeared first while walking the results in their current order.

use crate::query::executor::ScoredResult;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Summary of a result list. `None` marks a statistic as unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub unique_countries: usize,
    pub most_common_tradition: Option<String>,
    pub average_founded_year: Option<i64>,
    pub standout_feature: Option<String>,
}

/// Compute insights over `results`
pub fn aggregate(results: &[ScoredResult<'_>]) -> Insights {
    let unique_countries = results
        .iter()
        .map(|r| r.temple.country.as_str())
        .collect::<FxHashSet<&str>>()
        .len();

    let most_common_tradition = most_frequent(results.iter().map(|r| r.temple.tradition.as_str()));

    let standout_feature = most_frequent(
        results
            .iter()
            .flat_map(|r| r.temple.features.iter().map(String::as_str)),
    );

    Insights {
        unique_countries,
        most_common_tradition,
        average_founded_year: average_year(results),
        standout_feature,
    }
}

/// Mean founding year, halves rounded toward positive infinity
fn average_year(results: &[ScoredResult<'_>]) -> Option<i64> {
    if results.is_empty() {
        return None;
    }
    let sum: i64 = results.iter().map(|r| r.temple.founded as i64).sum();
    let mean = sum as f64 / results.len() as f64;
    Some((mean + 0.5).floor() as i64)
}

/// Most frequent value; ties resolved by first appearance
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for value in order {
        let count = counts[value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.to_string())
}
