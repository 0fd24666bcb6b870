// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Typed CVE JSON 4.0 records as served by the NVD CVE API 1.0.
//!
//! Field names mirror the wire names. Optional fields are skipped when absent so
//! that decoding and re-encoding a response yields the same JSON document.

use crate::{configurations::Configurations, cvss::Impact};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Envelope returned by both `GET /rest/json/cve/1.0/{cveId}` and `GET /rest/json/cves/1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveResponse {
    /// Number of records in this page.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u64,
    /// Index of the first record of this page.
    #[serde(rename = "startIndex")]
    pub start_index: u64,
    /// Number of records matching the query.
    #[serde(rename = "totalResults")]
    pub total_results: u64,
    /// The CVE collection.
    pub result: CveResult,
}

/// The `result` object, a CVE JSON 4.0 feed fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveResult {
    /// Always `CVE`.
    #[serde(rename = "CVE_data_type")]
    pub data_type: String,
    /// Always `MITRE`.
    #[serde(rename = "CVE_data_format")]
    pub data_format: String,
    /// Schema version, `4.0`.
    #[serde(rename = "CVE_data_version")]
    pub data_version: String,
    /// Generation time of the fragment, e.g. `2022-05-10T12:00Z`.
    #[serde(rename = "CVE_data_timestamp")]
    pub data_timestamp: String,
    /// The CVE records.
    #[serde(rename = "CVE_Items", default)]
    pub items: Vec<CveItem>,
}

/// One CVE record with its applicability configurations and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveItem {
    /// The MITRE part of the record.
    pub cve: Cve,
    /// Affected platforms.
    pub configurations: Configurations,
    /// CVSS scoring. Empty (`{}`) for records awaiting analysis.
    pub impact: Impact,
    /// Publication time, e.g. `2015-07-21T14:59Z`.
    #[serde(rename = "publishedDate")]
    pub published_date: String,
    /// Last modification time.
    #[serde(rename = "lastModifiedDate")]
    pub last_modified_date: String,
}

impl CveItem {
    /// The CVE identifier.
    pub fn id(&self) -> &str {
        &self.cve.data_meta.id
    }

    /// The first English description, if any.
    pub fn english_description(&self) -> Option<&str> {
        self.cve
            .description
            .description_data
            .iter()
            .find(|d| d.lang == "en")
            .map(|d| d.value.as_str())
    }

    /// All problem type values, usually CWE identifiers such as `CWE-79` or `NVD-CWE-Other`.
    pub fn cwe_ids(&self) -> Vec<&str> {
        self.cve
            .problemtype
            .problemtype_data
            .iter()
            .flat_map(|p| p.description.iter())
            .map(|d| d.value.as_str())
            .collect()
    }
}

/// The `cve` object of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cve {
    /// Always `CVE`.
    pub data_type: String,
    /// Always `MITRE`.
    pub data_format: String,
    /// Schema version, `4.0`.
    pub data_version: String,
    /// Identifier and assigner.
    #[serde(rename = "CVE_data_meta")]
    pub data_meta: CveDataMeta,
    /// Weakness classification.
    pub problemtype: ProblemType,
    /// External references.
    pub references: References,
    /// Human readable descriptions.
    pub description: Description,
}

/// `CVE_data_meta`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveDataMeta {
    /// The CVE identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// E-mail of the CNA that assigned the identifier.
    #[serde(rename = "ASSIGNER")]
    pub assigner: String,
    /// Record state, rarely present in NVD output.
    #[serde(rename = "STATE", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// `problemtype`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemType {
    /// Problem type entries.
    #[serde(default)]
    pub problemtype_data: Vec<ProblemTypeData>,
}

/// One `problemtype_data` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemTypeData {
    /// CWE identifiers tagged with a language.
    #[serde(default)]
    pub description: Vec<LangString>,
}

/// `references`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct References {
    /// The references.
    #[serde(default)]
    pub reference_data: Vec<Reference>,
}

/// A single external reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Link target.
    pub url: String,
    /// Name of the reference, often equal to `url`.
    pub name: String,
    /// Origin of the reference, e.g. `MISC` or `CONFIRM`.
    pub refsource: String,
    /// NVD tags such as `Patch` or `Third Party Advisory`.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `description`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    /// The descriptions.
    #[serde(default)]
    pub description_data: Vec<LangString>,
}

/// A string tagged with its language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangString {
    /// Language code, e.g. `en`.
    pub lang: String,
    /// The text.
    pub value: String,
}

/// An undecoded response body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status, always `200 OK` for a returned value.
    pub status: StatusCode,
    /// The JSON body as sent by the server.
    pub body: String,
}
