// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! NVD API Client
//!
//! This crate provides an API client for the CVE endpoints of the National Vulnerability
//! Database REST API 1.0, with typed structures for the CVE JSON 4.0 records it serves.
//! The API follows the documentation found at [NVD Developers](https://nvd.nist.gov/developers/vulnerabilities-1).
//!
//! Create an [`ApiClient`] to interface with the NVD API.
//!
//! Example
//! ```rust,no_run
//! use nvd_api::{ApiClient, GetCvesParams, NvdApiError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), NvdApiError> {
//!    let client = ApiClient::new()?.with_api_key("00000000-0000-0000-0000-000000000000");
//!
//!    let params = GetCvesParams::new().cpe_match_string("cpe:2.3:a:gitea:gitea:*:*:*:*:*:*:*:*");
//!    match client.get_cves(&params).await {
//!        Ok(response) => {
//!            println!("{} CVEs affect gitea", response.total_results);
//!            for item in &response.result.items {
//!                println!("{} {:?}", item.id(), item.impact.best_base_score());
//!            }
//!        }
//!        Err(e) => eprintln!("Error searching CVEs: {}", e),
//!    }
//!
//!    Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]

mod client;
mod configurations;
mod cvss;
mod error;
mod requests;
mod responses;
mod types;

// Re-export public items
pub use client::ApiClient;
pub use configurations::{Configurations, CpeMatch, CpeName, Node};
pub use cvss::{
    AccessComplexity, AccessVector, AttackComplexity, AttackVector, Authentication,
    BaseMetricV2, BaseMetricV3, CiaImpact, CiaImpactV2, CvssV2, CvssV3, Impact,
    PrivilegesRequired, Scope, SeverityV2, SeverityV3, UserInteraction,
};
pub use error::NvdApiError;
pub use requests::{format_nvd_date, GetCveParams, GetCvesParams, MAX_RESULTS_PER_PAGE};
pub use responses::{
    Cve, CveDataMeta, CveItem, CveResponse, CveResult, Description, LangString, ProblemType,
    ProblemTypeData, RawResponse, Reference, References,
};
pub use types::{AddOns, CvssV2Metrics, CvssV2Severity, CvssV3Metrics, CvssV3Severity};
