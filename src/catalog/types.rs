use serde::{Deserialize, Serialize};

/// Unique identifier for a temple in the catalog
pub type TempleId = u32;

/// A single catalog entry. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temple {
    pub id: TempleId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub region: String,
    pub tradition: String,
    pub environment: String,
    /// Founding year, negative for BCE
    pub founded: i32,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Curated baseline importance
    pub significance_score: f64,
    #[serde(default)]
    pub visiting_hours: String,
    #[serde(default)]
    pub best_visit: String,
}

impl Temple {
    /// Whether the temple lists `feature` among its features (exact match)
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Human readable founding year ("1113 CE", "300 BCE")
    pub fn founded_label(&self) -> String {
        if self.founded < 0 {
            format!("{} BCE", -(self.founded as i64))
        } else {
            format!("{} CE", self.founded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "Borobudur",
            "city": "Magelang",
            "country": "Indonesia",
            "description": "Mahayana stupa complex",
            "region": "Southeast Asia",
            "tradition": "Buddhist",
            "environment": "Volcanic",
            "founded": 800,
            "highlights": ["Stupas"],
            "features": ["UNESCO Site"],
            "significanceScore": 90,
            "visitingHours": "6am - 5pm",
            "bestVisit": "Dry season"
        }"#;

        let temple: Temple = serde_json::from_str(json).unwrap();
        assert_eq!(temple.id, 7);
        assert_eq!(temple.significance_score, 90.0);
        assert_eq!(temple.visiting_hours, "6am - 5pm");
        assert!(temple.website.is_none());
        assert!(temple.has_feature("UNESCO Site"));
        assert!(!temple.has_feature("unesco site"));
    }

    #[test]
    fn test_founded_label() {
        let json = r#"{"id":1,"name":"a","city":"b","country":"c","description":"d",
            "region":"r","tradition":"t","environment":"e","founded":-300,
            "significanceScore":1}"#;
        let mut temple: Temple = serde_json::from_str(json).unwrap();
        assert_eq!(temple.founded_label(), "300 BCE");

        temple.founded = 1113;
        assert_eq!(temple.founded_label(), "1113 CE");
    }
}
