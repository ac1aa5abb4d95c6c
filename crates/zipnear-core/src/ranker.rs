// crates/zipnear-core/src/ranker.rs

//! # Composite Ranker
//!
//! Orders provider records by tier first and by distance from the origin
//! second. Records that tie on both keys keep their input order: the record
//! lookup hands them over already grouped by tier, and that order is the
//! final tie-break.

use crate::distance::DistanceIndex;
use crate::error::Result;
use crate::format::format_response;
use crate::model::{ProviderRecord, RankedResult};
use crate::tier::tier_rank;
use std::cmp::Ordering;

/// Sort key resolved for one record before sorting starts.
#[derive(Debug, Clone, Copy)]
struct RankKey {
    tier: u8,
    distance: f64,
}

impl RankKey {
    fn resolve(record: &ProviderRecord, distances: &DistanceIndex) -> Result<Self> {
        Ok(Self {
            tier: tier_rank(record.tier())?,
            distance: distances.require(record.zipcode())?,
        })
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.distance.total_cmp(&other.distance))
    }
}

/// Sorts `records` by `(tier, distance)` ascending.
///
/// Every key is resolved up front, so an unknown tier or a zip code missing
/// from `distances` fails the whole call and no partially sorted output
/// escapes. The sort itself is `slice::sort_by`, which is stable and
/// `O(n log n)` in the worst case.
pub fn rank_records(
    records: Vec<ProviderRecord>,
    distances: &DistanceIndex,
) -> Result<Vec<ProviderRecord>> {
    if records.len() < 2 {
        // Still validate the lone record.
        for record in &records {
            RankKey::resolve(record, distances)?;
        }
        return Ok(records);
    }

    let mut keyed = records
        .into_iter()
        .map(|record| RankKey::resolve(&record, distances).map(|key| (key, record)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.compare(b));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Ranks `records` and formats them into response rows in one step.
///
/// This is the whole ranking pipeline minus the I/O: sort by tier then
/// distance, then attach each record's distance.
pub fn rank(records: Vec<ProviderRecord>, distances: &DistanceIndex) -> Result<Vec<RankedResult>> {
    let ranked = rank_records(records, distances)?;
    format_response(&ranked, distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceUnit;
    use crate::error::LocatorError;

    fn rec(name: &str, zip: &str, tier: &str) -> ProviderRecord {
        ProviderRecord {
            name: name.into(),
            address: format!("{name} Street"),
            city: "Springfield".into(),
            state: "IL".into(),
            zipcode: zip.into(),
            tier: tier.into(),
            contact_email: None,
            contact_name: None,
        }
    }

    fn names(records: &[ProviderRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn tier_beats_distance() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("1", 1.0), ("2", 50.0)]).unwrap();
        let ranked = rank_records(vec![rec("far-a", "2", "A"), rec("near-c", "1", "C")], &idx)
            .unwrap();
        assert_eq!(names(&ranked), ["far-a", "near-c"]);
    }

    #[test]
    fn distance_orders_within_tier() {
        let idx =
            DistanceIndex::new(DistanceUnit::Mile, [("1", 9.0), ("2", 0.5), ("3", 4.0)]).unwrap();
        let ranked = rank_records(
            vec![rec("x", "1", "B"), rec("y", "2", "B"), rec("z", "3", "B")],
            &idx,
        )
        .unwrap();
        assert_eq!(names(&ranked), ["y", "z", "x"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("1", 2.0), ("2", 2.0)]).unwrap();
        let input = vec![
            rec("first", "1", "A"),
            rec("second", "2", "A"),
            rec("third", "1", "A"),
        ];
        let ranked = rank_records(input.clone(), &idx).unwrap();
        assert_eq!(ranked, input);
    }

    #[test]
    fn signed_zero_distances_tie() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("1", 0.0), ("2", -0.0)]).unwrap();
        let ranked = rank_records(vec![rec("x", "1", "A"), rec("y", "2", "A")], &idx).unwrap();
        assert_eq!(names(&ranked), ["x", "y"]);

        let ranked = rank_records(vec![rec("y", "2", "A"), rec("x", "1", "A")], &idx).unwrap();
        assert_eq!(names(&ranked), ["y", "x"]);
    }

    #[test]
    fn empty_and_single() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("1", 2.0)]).unwrap();
        assert!(rank_records(Vec::new(), &idx).unwrap().is_empty());

        let one = vec![rec("only", "1", "C")];
        assert_eq!(rank_records(one.clone(), &idx).unwrap(), one);
    }

    #[test]
    fn single_record_is_still_validated() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("1", 2.0)]).unwrap();
        let err = rank_records(vec![rec("lost", "404", "A")], &idx).unwrap_err();
        assert!(matches!(err, LocatorError::DataIntegrity { .. }));
    }

    #[test]
    fn invalid_tier_fails_the_call() {
        let idx = DistanceIndex::new(DistanceUnit::Mile, [("1", 2.0), ("2", 3.0)]).unwrap();
        let err = rank_records(vec![rec("ok", "1", "A"), rec("bad", "2", "Z")], &idx).unwrap_err();
        assert!(matches!(err, LocatorError::InvalidTier(t) if t == "Z"));
    }
}
