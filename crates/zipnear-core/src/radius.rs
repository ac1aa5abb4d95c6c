// crates/zipnear-core/src/radius.rs
#![cfg(feature = "http")]

//! # ZipCodeAPI Radius Client
//!
//! Blocking client for `GET {base}/{api_key}/radius.json/{zip}/{radius}/{unit}`.
//! The response body looks like:
//!
//! ```json
//! { "zip_codes": [ { "zip_code": "12345", "distance": 3.2, "city": "..", "state": ".." } ] }
//! ```
//!
//! Only `zip_code` and `distance` are read.

use crate::config::ClientConfig;
use crate::error::{LocatorError, Result};
use crate::query::{RadiusQuery, RadiusResult};
use crate::traits::RadiusSearch;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::time::Duration;

pub struct ZipCodeApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl ZipCodeApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("zipnear/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            LocatorError::InvalidQuery(format!("invalid base URL '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(LocatorError::InvalidQuery(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
        })
    }

    fn radius_url(&self, query: &RadiusQuery) -> Url {
        let mut url = self.base_url.clone();
        let radius = query.radius.to_string();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                self.api_key.as_str(),
                "radius.json",
                query.origin.as_str(),
                radius.as_str(),
                query.unit.as_str(),
            ]);
        }
        url
    }

    /// Calls the radius endpoint and parses the result.
    ///
    /// Unlike [`RadiusSearch::radius_search`], failures are reported.
    pub fn fetch(&self, query: &RadiusQuery) -> Result<RadiusResult> {
        let url = self.radius_url(query);
        tracing::debug!(
            origin = %query.origin,
            radius = query.radius,
            unit = %query.unit,
            "requesting zip codes in radius"
        );

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocatorError::UnexpectedStatus {
                status: status.as_u16(),
                // The key is part of the path; keep it out of errors and logs.
                url: format!(
                    "{}/radius.json/{}/{}/{}",
                    self.base_url.as_str().trim_end_matches('/'),
                    query.origin,
                    query.radius,
                    query.unit
                ),
            });
        }

        let body = response.text()?;
        let result = RadiusResult::from_api_body(query.unit, &body)?;

        tracing::debug!(zip_codes = result.zip_codes.len(), "radius search answered");
        Ok(result)
    }
}

impl RadiusSearch for ZipCodeApiClient {
    fn radius_search(&self, query: &RadiusQuery) -> Option<RadiusResult> {
        match self.fetch(query) {
            Ok(result) => Some(result),
            Err(error) => {
                tracing::warn!(origin = %query.origin, %error, "radius search unavailable");
                None
            }
        }
    }
}
