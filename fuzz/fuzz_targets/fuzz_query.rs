#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use temple_atlas::catalog::{Catalog, Facet};
use temple_atlas::query::{QueryEngine, QueryState, SortOrder};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    term: &'a str,
    region: &'a str,
    feature: &'a str,
    sort: u8,
}

fuzz_target!(|input: Input<'_>| {
    let catalog = CATALOG.get_or_init(|| Catalog::builtin().unwrap());
    let sort = match input.sort % 4 {
        0 => SortOrder::Relevance,
        1 => SortOrder::Oldest,
        2 => SortOrder::Newest,
        _ => SortOrder::Significance,
    };
    let state = QueryState::new()
        .with_search(input.term)
        .with_selection(Facet::Region, input.region)
        .with_selection(Facet::Feature, input.feature)
        .with_sort(sort);

    // Must not panic and must be deterministic
    let engine = QueryEngine::new(catalog);
    let first = engine.execute(&state);
    let second = engine.execute(&state);
    assert_eq!(first, second);
    assert!(first.results.len() <= catalog.len());
});
