// crates/zipnear-core/src/model.rs
use serde::{Deserialize, Serialize};

/// One service provider at a location, as held by the record store.
///
/// `tier` is the raw stored label. It is only interpreted (and validated)
/// when records are ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub tier: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
}

impl ProviderRecord {
    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }
}

/// A ranked provider with its distance from the search origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub distance: f64,
    pub tier: String,
    pub contact_email: Option<String>,
    pub contact_name: Option<String>,
}
