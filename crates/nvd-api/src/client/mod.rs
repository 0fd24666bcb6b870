// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

mod cve;
mod cves;
mod helpers;

use crate::error::NvdApiError;
use reqwest::{Client, IntoUrl};
use std::{sync::Arc, time::Duration};
use tokio::{sync::Mutex, time::Instant};
use url::Url;

// Base URL for the NVD REST API
const BASE_URL: &str = "https://services.nvd.nist.gov";

/// Client for interacting with the NVD CVE API 1.0.
///
/// Provides typed access to a single CVE record ([`ApiClient::get_cve`]) and to
/// the filtered CVE collection ([`ApiClient::get_cves`]). Each typed operation has a
/// `_raw` sibling returning the unparsed body.
///
/// Clones share the request pacing state, so a fixed delay set with
/// [`ApiClient::set_request_delay`] holds across all of them.
///
/// # Examples
///
/// ```rust,no_run
/// use nvd_api::{ApiClient, GetCveParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::new()?;
///
///     let response = client.get_cve(&GetCveParams::new("CVE-2021-28378")).await?;
///     for item in &response.result.items {
///         println!("{}: {:?}", item.id(), item.english_description());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    request_delay: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl ApiClient {
    /// Creates a new client for the public NVD API without an API key.
    ///
    /// # Errors
    ///
    /// This function may fail if the underlying `reqwest` client cannot be built.
    pub fn new() -> Result<Self, NvdApiError> {
        Self::new_with_options(BASE_URL, None)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL the `/rest/json/...` paths are resolved against.
    ///
    /// # Errors
    ///
    /// Returns an `NvdApiError` if the `reqwest` client cannot be built
    /// or if the provided base URL is invalid.
    pub fn new_with_base_url(base_url: impl IntoUrl) -> Result<Self, NvdApiError> {
        Self::new_with_options(base_url, None)
    }

    /// Creates a new client with a custom base URL and an optional API key.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL the `/rest/json/...` paths are resolved against.
    /// * `api_key` - Sent as `apiKey` with every request that does not carry its own key.
    ///
    /// # Errors
    ///
    /// Returns an `NvdApiError` if the `reqwest` client cannot be built
    /// or if the provided base URL is invalid.
    pub fn new_with_options(
        base_url: impl IntoUrl,
        api_key: Option<String>,
    ) -> Result<Self, NvdApiError> {
        Ok(ApiClient {
            client: Client::builder()
                .min_tls_version(reqwest::tls::Version::TLS_1_2)
                .build()?,
            base_url: base_url.into_url()?,
            api_key,
            request_delay: Duration::ZERO,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Sets the API key used for requests that do not carry their own key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets a fixed minimum delay between the start of two consecutive requests.
    ///
    /// The public NVD API allows 5 requests per 30 seconds without a key and 50 with one.
    /// `Duration::ZERO` (the default) disables pacing.
    pub fn set_request_delay(&mut self, delay: Duration) {
        self.request_delay = delay;
    }

    /// The configured delay between consecutive requests.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Whether an API key is configured on the client.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
