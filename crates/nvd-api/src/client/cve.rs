// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use super::ApiClient;
use crate::{
    error::NvdApiError,
    requests::GetCveParams,
    responses::{CveResponse, RawResponse},
};

impl ApiClient {
    // --- Single CVE ---

    /// GET /rest/json/cve/1.0/{cveId}
    /// Retrieves a single CVE record.
    ///
    /// # Arguments
    ///
    /// * `params` - The CVE identifier plus optional add-ons and API key.
    ///
    /// # Returns
    ///
    /// A [`CveResponse`] envelope, normally holding exactly one item.
    ///
    /// # Errors
    ///
    /// Returns `NvdApiError::InvalidParameter` for a malformed identifier (no request is
    /// sent), `NvdApiError::ApiError` for any status other than `200 OK`, and
    /// `NvdApiError::JsonError` if the body does not match the CVE schema.
    pub async fn get_cve(&self, params: &GetCveParams) -> Result<CveResponse, NvdApiError> {
        let raw = self.get_cve_raw(params).await?;
        Ok(serde_json::from_str(&raw.body)?)
    }

    /// GET /rest/json/cve/1.0/{cveId}
    /// Same as [`ApiClient::get_cve`], returning the body undecoded.
    pub async fn get_cve_raw(&self, params: &GetCveParams) -> Result<RawResponse, NvdApiError> {
        let pairs = params.query_pairs()?;
        let url = self.build_url(&format!("/rest/json/cve/1.0/{}", params.cve), pairs)?;
        self.fetch_raw(url).await
    }
}
