// crates/zipnear-core/src/distance.rs

//! # Distance Index
//!
//! Request-scoped lookup from zip code to its distance from the search origin.
//! Built once from the radius search result and never mutated afterwards.

use crate::error::{LocatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Unit the radius and every distance of one request are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "mile")]
    Mile,
    #[serde(rename = "km")]
    Kilometer,
}

impl DistanceUnit {
    /// Path segment understood by the radius API.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Mile => "mile",
            DistanceUnit::Kilometer => "km",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mile" | "miles" | "mi" => Ok(DistanceUnit::Mile),
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometer),
            other => Err(LocatorError::InvalidQuery(format!(
                "unknown distance unit {other:?} (expected mile or km)"
            ))),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable zip code -> distance map for a single ranking operation.
#[derive(Debug, Clone, Default)]
pub struct DistanceIndex {
    unit: DistanceUnit,
    distances: HashMap<String, f64>,
}

impl DistanceIndex {
    /// Builds the index from `(zip code, distance)` pairs.
    ///
    /// Later pairs overwrite earlier ones for the same zip code. Negative and
    /// non-finite distances are rejected; `-0.0` is stored as `0.0`.
    pub fn new<I, K>(unit: DistanceUnit, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let pairs = pairs.into_iter();
        let mut distances = HashMap::with_capacity(pairs.size_hint().0);

        for (zip, distance) in pairs {
            let zip = zip.into();
            if !distance.is_finite() || distance < 0.0 {
                return Err(LocatorError::InvalidDistance {
                    zipcode: zip,
                    distance,
                });
            }
            // -0.0 passes the sign check but sorts before 0.0 under total_cmp.
            let distance = if distance == 0.0 { 0.0 } else { distance };
            distances.insert(zip, distance);
        }

        Ok(Self { unit, distances })
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn contains(&self, zipcode: &str) -> bool {
        self.distances.contains_key(zipcode)
    }

    #[inline]
    pub fn get(&self, zipcode: &str) -> Option<f64> {
        self.distances.get(zipcode).copied()
    }

    /// Like [`DistanceIndex::get`], but a missing zip code is a broken join
    /// between the radius search and the record lookup.
    #[inline]
    pub fn require(&self, zipcode: &str) -> Result<f64> {
        self.get(zipcode)
            .ok_or_else(|| LocatorError::DataIntegrity {
                zipcode: zipcode.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_for_indexed_zips() {
        let idx = DistanceIndex::new(
            DistanceUnit::Mile,
            [("12345", 3.0), ("54321", 5.0), ("67890", 8.0)],
        )
        .unwrap();

        assert_eq!(idx.len(), 3);
        assert_eq!(idx.get("54321"), Some(5.0));
        assert_eq!(idx.require("67890").unwrap(), 8.0);
        assert!(idx.contains("12345"));
        assert_eq!(idx.unit(), DistanceUnit::Mile);
    }

    #[test]
    fn missing_zip_is_a_data_integrity_error() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("12345", 3.0)]).unwrap();
        assert_eq!(idx.get("99999"), None);
        assert!(matches!(
            idx.require("99999"),
            Err(LocatorError::DataIntegrity { zipcode }) if zipcode == "99999"
        ));
    }

    #[test]
    fn later_duplicate_wins() {
        let idx =
            DistanceIndex::new(DistanceUnit::Kilometer, [("12345", 3.0), ("12345", 1.5)]).unwrap();
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.get("12345"), Some(1.5));
    }

    #[test]
    fn rejects_negative_and_nan() {
        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            let err = DistanceIndex::new(DistanceUnit::Mile, [("12345", bad)]).unwrap_err();
            assert!(matches!(err, LocatorError::InvalidDistance { .. }));
        }
        // zero is a valid distance (the origin itself)
        assert!(DistanceIndex::new(DistanceUnit::Mile, [("12345", 0.0)]).is_ok());
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("12345", -0.0)]).unwrap();
        let stored = idx.get("12345").unwrap();
        assert_eq!(stored.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("mile".parse::<DistanceUnit>().unwrap(), DistanceUnit::Mile);
        assert_eq!("Miles".parse::<DistanceUnit>().unwrap(), DistanceUnit::Mile);
        assert_eq!("KM".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometer);
        assert!("furlong".parse::<DistanceUnit>().is_err());
        assert_eq!(DistanceUnit::default().as_str(), "mile");
    }
}
