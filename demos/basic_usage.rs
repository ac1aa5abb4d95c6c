//! Basic usage example for zipnear-rs
//!
//! Ranks a handful of clinics around an origin zip code without touching the
//! network: the radius search is replaced by a canned result.

use zipnear_core::prelude::*;
use zipnear_core::ZipDistance;

/// Pretends to be the radius API.
struct CannedSearch;

impl RadiusSearch for CannedSearch {
    fn radius_search(&self, query: &RadiusQuery) -> Option<RadiusResult> {
        let zip = |zip_code: &str, distance: f64| ZipDistance {
            zip_code: zip_code.into(),
            distance,
        };
        Some(RadiusResult::new(
            query.unit,
            vec![zip("12345", 0.0), zip("54321", 5.0), zip("67890", 8.0)],
        ))
    }
}

fn clinic(name: &str, zip: &str, tier: &str) -> ProviderRecord {
    ProviderRecord {
        name: name.into(),
        address: "100 Main St".into(),
        city: "Schenectady".into(),
        state: "NY".into(),
        zipcode: zip.into(),
        tier: tier.into(),
        contact_email: Some(format!("hello@{}.example", name.to_lowercase().replace(' ', "-"))),
        contact_name: None,
    }
}

fn main() -> Result<()> {
    println!("=== zipnear-rs Basic Usage Example ===\n");

    let directory = ProviderDirectory::new(vec![
        clinic("Riverside Care", "67890", "A"),
        clinic("Elm Street Clinic", "12345", "C"),
        clinic("Northway Health", "54321", "B"),
        clinic("Union Family Practice", "12345", "A"),
        clinic("Closed Clinic", "12345", "X"),
    ]);
    println!("Directory holds {} providers\n", directory.len());

    let locator = ProviderLocator::new(CannedSearch, directory);
    let query = RadiusQuery::new("12345", 10.0, DistanceUnit::Mile)?;

    println!("--- Providers within {} {} of {} ---", query.radius, query.unit, query.origin);
    for r in locator.find_within_radius(&query)? {
        println!("  [{}] {:>5.1} {}  {}", r.tier, r.distance, query.unit, r.name);
    }

    Ok(())
}
