// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use super::ApiClient;
use crate::{
    error::NvdApiError,
    requests::GetCvesParams,
    responses::{CveResponse, RawResponse},
};

impl ApiClient {
    // --- CVE collection ---

    /// GET /rest/json/cves/1.0
    /// Searches the CVE collection.
    ///
    /// Only one page is fetched; use [`GetCvesParams::page`] together with
    /// [`CveResponse::total_results`] to walk further pages.
    ///
    /// # Arguments
    ///
    /// * `params` - Search filters. `GetCvesParams::default()` sends no filter at all.
    ///
    /// # Returns
    ///
    /// A [`CveResponse`] with the requested page of items.
    ///
    /// # Errors
    ///
    /// Returns `NvdApiError::InvalidParameter` or `NvdApiError::ConflictingParameters`
    /// for an invalid filter combination (no request is sent), `NvdApiError::ApiError`
    /// for any status other than `200 OK`, and `NvdApiError::JsonError` if the body does
    /// not match the CVE schema.
    pub async fn get_cves(&self, params: &GetCvesParams) -> Result<CveResponse, NvdApiError> {
        let raw = self.get_cves_raw(params).await?;
        Ok(serde_json::from_str(&raw.body)?)
    }

    /// GET /rest/json/cves/1.0
    /// Same as [`ApiClient::get_cves`], returning the body undecoded.
    pub async fn get_cves_raw(&self, params: &GetCvesParams) -> Result<RawResponse, NvdApiError> {
        let pairs = params.query_pairs()?;
        let url = self.build_url("/rest/json/cves/1.0", pairs)?;
        self.fetch_raw(url).await
    }
}
