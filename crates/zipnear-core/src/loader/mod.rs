// crates/zipnear-core/src/loader/mod.rs

//! # Provider Directory
//!
//! An in-memory record store for provider records. Stands in for the
//! relational store: it answers "which providers sit in these zip codes"
//! with the same filter and ordering the SQL query would apply.

use crate::error::Result;
use crate::model::ProviderRecord;
use crate::tier::{tier_rank, Tier};
use crate::traits::RecordLookup;
use std::collections::HashSet;

#[cfg(feature = "json")]
mod common_io;

#[cfg(feature = "json")]
pub use common_io::open_stream;

#[derive(Debug, Clone, Default)]
pub struct ProviderDirectory {
    records: Vec<ProviderRecord>,
}

impl ProviderDirectory {
    pub fn new(records: Vec<ProviderRecord>) -> Self {
        Self { records }
    }

    /// Loads a JSON array of provider records. `.json.gz` files are
    /// decompressed on the fly when the `compact` feature is enabled.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let records: Vec<ProviderRecord> = serde_json::from_reader(reader)?;

        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            "loaded provider directory"
        );
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[ProviderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordLookup for ProviderDirectory {
    /// `zipcode IN (..) AND tier IN ('A','B','C') ORDER BY tier ASC`.
    ///
    /// Records with an unknown tier are skipped. The tier sort is stable, so
    /// directory order survives within a tier.
    fn find_by_locations(&self, zipcodes: &HashSet<String>) -> Result<Vec<ProviderRecord>> {
        let mut found: Vec<ProviderRecord> = self
            .records
            .iter()
            .filter(|r| zipcodes.contains(r.zipcode()) && Tier::is_known(r.tier()))
            .cloned()
            .collect();

        // Filtered above, so every label resolves.
        found.sort_by_key(|r| tier_rank(r.tier()).unwrap_or(u8::MAX));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, zip: &str, tier: &str) -> ProviderRecord {
        ProviderRecord {
            name: name.into(),
            address: "addr".into(),
            city: "city".into(),
            state: "ST".into(),
            zipcode: zip.into(),
            tier: tier.into(),
            contact_email: None,
            contact_name: None,
        }
    }

    fn zips(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn filters_by_zip_and_known_tier() {
        let dir = ProviderDirectory::new(vec![
            rec("in-a", "10001", "A"),
            rec("out-of-range", "90210", "A"),
            rec("unranked", "10001", "D"),
            rec("blank-tier", "10002", ""),
            rec("in-c", "10002", "C"),
        ]);

        let found = dir.find_by_locations(&zips(&["10001", "10002"])).unwrap();
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["in-a", "in-c"]);
    }

    #[test]
    fn orders_by_tier_keeping_store_order() {
        let dir = ProviderDirectory::new(vec![
            rec("c1", "1", "C"),
            rec("a1", "2", "A"),
            rec("b1", "3", "B"),
            rec("a2", "1", "A"),
            rec("c2", "2", "C"),
        ]);

        let found = dir.find_by_locations(&zips(&["1", "2", "3"])).unwrap();
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a1", "a2", "b1", "c1", "c2"]);
    }

    #[test]
    fn empty_key_set_finds_nothing() {
        let dir = ProviderDirectory::new(vec![rec("a", "1", "A")]);
        assert!(dir.find_by_locations(&HashSet::new()).unwrap().is_empty());
    }
}
