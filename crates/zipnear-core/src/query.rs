// crates/zipnear-core/src/query.rs
use crate::distance::{DistanceIndex, DistanceUnit};
use crate::error::{LocatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parameters of one radius search. Passed explicitly with every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusQuery {
    pub origin: String,
    pub radius: f64,
    #[serde(default)]
    pub unit: DistanceUnit,
}

impl RadiusQuery {
    /// Validates and builds a query. The origin is trimmed; the radius must be
    /// a positive, finite number.
    pub fn new(origin: impl AsRef<str>, radius: f64, unit: DistanceUnit) -> Result<Self> {
        let origin = origin.as_ref().trim();
        if origin.is_empty() {
            return Err(LocatorError::InvalidQuery("origin zip code is empty".into()));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LocatorError::InvalidQuery(format!(
                "radius must be a positive number, got {radius}"
            )));
        }
        Ok(Self {
            origin: origin.to_string(),
            radius,
            unit,
        })
    }
}

/// One zip code returned by a radius search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipDistance {
    pub zip_code: String,
    pub distance: f64,
}

/// Body of the radius API response. Fields other than the zip code list
/// are ignored.
#[derive(Debug, Deserialize)]
struct RadiusResponse {
    #[serde(default)]
    zip_codes: Vec<ZipDistance>,
}

/// What a radius search found: every zip code in range with its distance,
/// in the order the search returned them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadiusResult {
    pub unit: DistanceUnit,
    pub zip_codes: Vec<ZipDistance>,
}

impl RadiusResult {
    pub fn new(unit: DistanceUnit, zip_codes: Vec<ZipDistance>) -> Self {
        Self { unit, zip_codes }
    }

    /// Parses a radius API response body (`{"zip_codes": [..]}`).
    pub fn from_api_body(unit: DistanceUnit, body: &str) -> Result<Self> {
        let parsed: RadiusResponse = serde_json::from_str(body)?;
        Ok(Self::new(unit, parsed.zip_codes))
    }

    pub fn is_empty(&self) -> bool {
        self.zip_codes.is_empty()
    }

    /// The zip codes in range, deduplicated. This is the key set handed to
    /// the record lookup.
    pub fn identifiers(&self) -> HashSet<String> {
        self.zip_codes.iter().map(|z| z.zip_code.clone()).collect()
    }

    pub fn to_index(&self) -> Result<DistanceIndex> {
        DistanceIndex::new(
            self.unit,
            self.zip_codes
                .iter()
                .map(|z| (z.zip_code.as_str(), z.distance)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_validation() {
        let q = RadiusQuery::new(" 12345 ", 10.0, DistanceUnit::Mile).unwrap();
        assert_eq!(q.origin, "12345");

        assert!(RadiusQuery::new("   ", 10.0, DistanceUnit::Mile).is_err());
        assert!(RadiusQuery::new("12345", 0.0, DistanceUnit::Mile).is_err());
        assert!(RadiusQuery::new("12345", -3.0, DistanceUnit::Mile).is_err());
        assert!(RadiusQuery::new("12345", f64::NAN, DistanceUnit::Mile).is_err());
    }

    #[test]
    fn result_feeds_index_and_key_set() {
        let result = RadiusResult::new(
            DistanceUnit::Kilometer,
            vec![
                ZipDistance {
                    zip_code: "12345".into(),
                    distance: 3.0,
                },
                ZipDistance {
                    zip_code: "54321".into(),
                    distance: 5.0,
                },
                ZipDistance {
                    zip_code: "12345".into(),
                    distance: 3.0,
                },
            ],
        );

        let ids = result.identifiers();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("54321"));

        let idx = result.to_index().unwrap();
        assert_eq!(idx.unit(), DistanceUnit::Kilometer);
        assert_eq!(idx.get("12345"), Some(3.0));
    }

    #[test]
    fn parses_api_body() {
        let body = r#"{"zip_codes":[{"zip_code":"02134","distance":1.2,"city":"Allston","state":"MA"}]}"#;
        let result = RadiusResult::from_api_body(DistanceUnit::Mile, body).unwrap();
        assert_eq!(result.zip_codes[0].zip_code, "02134");
        assert_eq!(result.zip_codes[0].distance, 1.2);

        let empty = RadiusResult::from_api_body(DistanceUnit::Mile, "{}").unwrap();
        assert!(empty.is_empty());

        assert!(matches!(
            RadiusResult::from_api_body(DistanceUnit::Mile, "quota exceeded"),
            Err(LocatorError::Json(_))
        ));
    }
}
