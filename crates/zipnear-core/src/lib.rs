// crates/zipnear-core/src/lib.rs

//! zipnear-core
//! ============
//!
//! Finds service providers near a zip code and ranks them: best tier first,
//! then nearest first within each tier.
//!
//! The ranking itself is [`rank`]. [`ProviderLocator`] wires it to a radius
//! search ([`RadiusSearch`]) and a record store ([`RecordLookup`]).
//!
//! ```rust
//! use zipnear_core::{rank, DistanceIndex, DistanceUnit, ProviderRecord};
//!
//! let clinic = |name: &str, zip: &str, tier: &str| ProviderRecord {
//!     name: name.into(),
//!     address: "1 Main St".into(),
//!     city: "Albany".into(),
//!     state: "NY".into(),
//!     zipcode: zip.into(),
//!     tier: tier.into(),
//!     contact_email: None,
//!     contact_name: None,
//! };
//!
//! let distances =
//!     DistanceIndex::new(DistanceUnit::Mile, [("12345", 3.0), ("54321", 5.0), ("67890", 8.0)])?;
//! let ranked = rank(
//!     vec![clinic("c", "67890", "C"), clinic("a", "12345", "A"), clinic("b", "54321", "B")],
//!     &distances,
//! )?;
//!
//! let order: Vec<_> = ranked.iter().map(|r| (r.tier.as_str(), r.distance)).collect();
//! assert_eq!(order, [("A", 3.0), ("B", 5.0), ("C", 8.0)]);
//! # Ok::<(), zipnear_core::LocatorError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod distance;
pub mod error;
pub mod format;
pub mod loader;
pub mod locator;
pub mod model;
pub mod query;
#[cfg(feature = "http")]
pub mod radius;
pub mod ranker;
pub mod tier;
pub mod traits;

// Re-exports
pub use crate::config::ClientConfig;
pub use crate::distance::{DistanceIndex, DistanceUnit};
pub use crate::error::{LocatorError, Result};
pub use crate::format::format_response;
pub use crate::loader::ProviderDirectory;
pub use crate::locator::{rank_radius_result, ProviderLocator};
pub use crate::model::{ProviderRecord, RankedResult};
pub use crate::query::{RadiusQuery, RadiusResult, ZipDistance};
#[cfg(feature = "http")]
pub use crate::radius::ZipCodeApiClient;
pub use crate::ranker::{rank, rank_records};
pub use crate::tier::{tier_rank, Tier, TIER_VALUES};
pub use crate::traits::{RadiusSearch, RecordLookup};

pub mod prelude {
    pub use crate::{
        rank, DistanceIndex, DistanceUnit, LocatorError, ProviderDirectory, ProviderLocator,
        ProviderRecord, RadiusQuery, RadiusResult, RadiusSearch, RankedResult, RecordLookup,
        Result, Tier,
    };
    #[cfg(feature = "http")]
    pub use crate::{ClientConfig, ZipCodeApiClient};
}
