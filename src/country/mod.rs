//! Country records as returned by the countries GraphQL endpoint.
//!
//! Records are created once per successful fetch and never mutated
//! afterwards. The nested `continent` object is required: a response that
//! omits it is rejected at decode time, so every accessor below is total.

use serde::{Deserialize, Serialize};

/// One country entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO code, unique within a result set.
    pub code: String,
    pub name: String,
    pub continent: Continent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>, continent: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            continent: Continent {
                name: continent.into(),
            },
        }
    }

    pub fn continent_name(&self) -> &str {
        &self.continent.name
    }

    /// Case-insensitive substring match against code, name and continent.
    ///
    /// `needle` must already be lower-cased; the derivation lower-cases the
    /// query once per pass instead of once per record.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [self.name.as_str(), self.code.as_str(), self.continent_name()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_continent() {
        let json = r#"{"code":"FR","name":"France","continent":{"name":"Europe"}}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country, Country::new("FR", "France", "Europe"));
        assert_eq!(country.continent_name(), "Europe");
    }

    #[test]
    fn missing_continent_is_rejected() {
        let json = r#"{"code":"FR","name":"France"}"#;
        assert!(serde_json::from_str::<Country>(json).is_err());
    }

    #[test]
    fn matches_any_of_the_three_fields() {
        let us = Country::new("US", "United States", "North America");
        assert!(us.matches_lowercase("us"));
        assert!(us.matches_lowercase("united"));
        assert!(us.matches_lowercase("amer"));
        assert!(!us.matches_lowercase("europe"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(Country::new("FR", "France", "Europe").matches_lowercase(""));
    }
}
