//! Shared catalogs for integration tests

use temple_atlas::catalog::{Catalog, Temple};

/// The two-temple catalog used for the end-to-end ranking example
pub fn angkor_borobudur() -> Catalog {
    Catalog::from_json_str(
        r#"[
        {
            "id": 1,
            "name": "Angkor Wat",
            "city": "Siem Reap",
            "country": "Cambodia",
            "description": "",
            "region": "Southeast Asia",
            "tradition": "Hindu-Buddhist",
            "environment": "Jungle",
            "founded": 1113,
            "highlights": ["Bas-reliefs"],
            "features": ["UNESCO Site", "Sunrise Views"],
            "significanceScore": 95
        },
        {
            "id": 2,
            "name": "Borobudur",
            "city": "Magelang",
            "country": "Indonesia",
            "description": "",
            "region": "Southeast Asia",
            "tradition": "Buddhist",
            "environment": "Volcanic",
            "founded": 800,
            "highlights": ["Stupas"],
            "features": ["UNESCO Site"],
            "significanceScore": 90
        }
    ]"#,
    )
    .expect("fixture catalog is valid")
}

pub fn builtin() -> Catalog {
    Catalog::builtin().expect("built-in catalog is valid")
}

/// Sample search terms covering names, cities, features, descriptions and misses
pub const TERMS: &[&str] = &[
    "",
    "  ",
    "temple",
    "KYOTO",
    "unesco",
    "gold",
    "lotus",
    "pilgrimage",
    "pyramid",
    "zzz-no-match",
];

pub fn temple_names<'a>(temples: impl Iterator<Item = &'a Temple>) -> Vec<&'a str> {
    temples.map(|t| t.name.as_str()).collect()
}
