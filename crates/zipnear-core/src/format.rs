// crates/zipnear-core/src/format.rs
use crate::distance::DistanceIndex;
use crate::error::Result;
use crate::model::{ProviderRecord, RankedResult};

/// Projects ranked records into response rows, attaching each record's
/// distance. Order is preserved as given.
///
/// A record whose zip code is not in `distances` fails the whole call with
/// [`crate::LocatorError::DataIntegrity`]; there is no default distance.
pub fn format_response(
    records: &[ProviderRecord],
    distances: &DistanceIndex,
) -> Result<Vec<RankedResult>> {
    records
        .iter()
        .map(|record| -> Result<RankedResult> {
            Ok(RankedResult {
                name: record.name.clone(),
                address: record.address.clone(),
                city: record.city.clone(),
                state: record.state.clone(),
                distance: distances.require(record.zipcode())?,
                tier: record.tier.clone(),
                contact_email: record.contact_email.clone(),
                contact_name: record.contact_name.clone(),
            })
        })
        .collect()
}
