// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Internal helper methods

use super::ApiClient;
use crate::{
    error::{check_status, NvdApiError},
    responses::RawResponse,
};
use reqwest::StatusCode;
use tokio::time::{sleep, Instant};
use tracing::{debug, trace};
use url::Url;

const API_KEY_PARAM: &str = "apiKey";

impl ApiClient {
    /// Resolves `path` against the base URL and appends the query pairs.
    ///
    /// The client's API key is added unless the pairs already carry one.
    pub(super) fn build_url(
        &self,
        path: &str,
        mut pairs: Vec<(&'static str, String)>,
    ) -> Result<Url, NvdApiError> {
        let mut url = self.base_url.join(path)?;

        if let Some(api_key) = &self.api_key {
            if !pairs.iter().any(|(name, _)| *name == API_KEY_PARAM) {
                pairs.push((API_KEY_PARAM, api_key.clone()));
            }
        }

        // An empty `query_pairs_mut()` would leave a dangling `?`
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Waits until the configured delay since the previous request has passed.
    async fn pace(&self) {
        if self.request_delay.is_zero() {
            return;
        }
        let mut last_request = self.last_request.lock().await;
        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.request_delay {
                let wait = self.request_delay - elapsed;
                trace!(?wait, "Pacing request");
                sleep(wait).await;
            }
        }
        *last_request = Some(Instant::now());
    }

    /// Executes a GET request and returns the body of a `200 OK` response.
    pub(super) async fn fetch_raw(&self, url: Url) -> Result<RawResponse, NvdApiError> {
        self.pace().await;

        debug!(url = %redact_api_key(&url), "GET");
        let response = self.client.get(url).send().await?;
        let response = check_status(response, &[StatusCode::OK]).await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(%status, bytes = body.len(), "Response received");

        Ok(RawResponse { status, body })
    }
}

/// Renders the URL with the API key value masked.
pub(crate) fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == API_KEY_PARAM) {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            if name == API_KEY_PARAM {
                (name.into_owned(), "REDACTED".to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
