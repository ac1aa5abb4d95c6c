// crates/zipnear-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while locating and ranking providers.
///
/// A radius search that yields nothing is *not* an error: the pipeline
/// degrades to an empty result instead (see [`crate::ProviderLocator`]).
#[derive(Debug, Error)]
pub enum LocatorError {
    /// A record's zip code has no entry in the distance index.
    /// The radius search and the record lookup disagree about the join key.
    #[error("data integrity violation: no distance known for zip code {zipcode}")]
    DataIntegrity { zipcode: String },

    #[error("invalid tier label {0:?} (expected one of A, B, C)")]
    InvalidTier(String),

    #[error("invalid distance {distance} for zip code {zipcode}")]
    InvalidDistance { zipcode: String, distance: f64 },

    #[error("invalid radius query: {0}")]
    InvalidQuery(String),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, LocatorError>;
