// crates/zipnear-core/src/locator.rs
use crate::error::Result;
use crate::model::RankedResult;
use crate::query::{RadiusQuery, RadiusResult};
use crate::ranker::rank;
use crate::traits::{RadiusSearch, RecordLookup};

/// The request pipeline: radius search, distance index, record lookup,
/// ranking, formatting.
///
/// Holds only its collaborators. Every call builds its own distance index
/// and record list, so one locator can serve concurrent callers.
pub struct ProviderLocator<S, L> {
    search: S,
    lookup: L,
}

impl<S: RadiusSearch, L: RecordLookup> ProviderLocator<S, L> {
    pub fn new(search: S, lookup: L) -> Self {
        Self { search, lookup }
    }

    /// Providers within `query.radius` of `query.origin`, best tier first,
    /// nearest first within a tier.
    ///
    /// A radius search that fails or returns nothing yields an empty list,
    /// not an error. A record whose zip code the search did not report fails
    /// the call with [`crate::LocatorError::DataIntegrity`].
    pub fn find_within_radius(&self, query: &RadiusQuery) -> Result<Vec<RankedResult>> {
        let span = tracing::debug_span!("find_within_radius", origin = %query.origin);
        let _enter = span.enter();

        let Some(found) = self.search.radius_search(query) else {
            tracing::debug!("no radius result, returning no matches");
            return Ok(Vec::new());
        };

        let ranked = rank_radius_result(&found, &self.lookup)?;
        tracing::info!(
            origin = %query.origin,
            radius = query.radius,
            unit = %query.unit,
            results = ranked.len(),
            "ranked providers"
        );
        Ok(ranked)
    }
}

/// Everything after the radius search: index the distances, look up the
/// providers in those zip codes, rank and format them.
///
/// Used directly when the radius result is already at hand, e.g. a saved
/// API response.
pub fn rank_radius_result<L: RecordLookup>(
    found: &RadiusResult,
    lookup: &L,
) -> Result<Vec<RankedResult>> {
    let distances = found.to_index()?;
    let zipcodes = found.identifiers();
    tracing::debug!(zip_codes = zipcodes.len(), "built distance index");

    let records = lookup.find_by_locations(&zipcodes)?;
    tracing::debug!(records = records.len(), "looked up providers");

    rank(records, &distances)
}
