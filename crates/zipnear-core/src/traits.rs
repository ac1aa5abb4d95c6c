// crates/zipnear-core/src/traits.rs
use crate::error::Result;
use crate::model::ProviderRecord;
use crate::query::{RadiusQuery, RadiusResult};
use std::collections::HashSet;

/// Finds every zip code within a radius of an origin.
///
/// Implementations swallow their own failures: `None` means "the search
/// could not be answered", which the locator treats as "nothing nearby".
pub trait RadiusSearch {
    fn radius_search(&self, query: &RadiusQuery) -> Option<RadiusResult>;
}

/// Fetches provider records for a set of zip codes.
///
/// Implementations must only return records whose tier is one of
/// [`crate::TIER_VALUES`], ordered by tier ascending.
pub trait RecordLookup {
    fn find_by_locations(&self, zipcodes: &HashSet<String>) -> Result<Vec<ProviderRecord>>;
}

impl<T: RadiusSearch + ?Sized> RadiusSearch for &T {
    fn radius_search(&self, query: &RadiusQuery) -> Option<RadiusResult> {
        (**self).radius_search(query)
    }
}

impl<T: RecordLookup + ?Sized> RecordLookup for &T {
    fn find_by_locations(&self, zipcodes: &HashSet<String>) -> Result<Vec<ProviderRecord>> {
        (**self).find_by_locations(zipcodes)
    }
}
