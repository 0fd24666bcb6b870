// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use crate::{
    error::NvdApiError,
    types::{AddOns, CvssV2Metrics, CvssV2Severity, CvssV3Metrics, CvssV3Severity},
};
use chrono::{DateTime, FixedOffset};

/// Largest page the NVD API serves for the CVE collection endpoint.
pub const MAX_RESULTS_PER_PAGE: u32 = 2000;

/// Parameters of `GET /rest/json/cve/1.0/{cveId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCveParams {
    /// The CVE identifier, e.g. `CVE-2021-28378`.
    pub cve: String,
    /// Optional add-ons requested alongside the record.
    pub add_ons: Option<AddOns>,
    /// Overrides the API key configured on the client for this request.
    pub api_key: Option<String>,
}

impl GetCveParams {
    /// Parameters for a single CVE lookup.
    pub fn new(cve: impl Into<String>) -> Self {
        Self {
            cve: cve.into(),
            ..Default::default()
        }
    }

    /// Validates the CVE identifier and returns the query pairs (without the path segment).
    pub(crate) fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, NvdApiError> {
        validate_cve_id(&self.cve)?;
        let mut pairs = Vec::new();
        if let Some(add_ons) = self.add_ons {
            pairs.push(("addOns", add_ons.to_string()));
        }
        if let Some(api_key) = &self.api_key {
            pairs.push(("apiKey", api_key.clone()));
        }
        Ok(pairs)
    }
}

/// Parameters of `GET /rest/json/cves/1.0`.
///
/// Every field is optional; `GetCvesParams::default()` queries the whole collection
/// (first page only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCvesParams {
    /// Optional add-ons requested alongside each record.
    pub add_ons: Option<AddOns>,
    /// Overrides the API key configured on the client for this request.
    pub api_key: Option<String>,
    /// CPE 2.2 URI (`cpe:/...`) or CPE 2.3 formatted string (`cpe:2.3:...`).
    pub cpe_match_string: Option<String>,
    /// Full or partial CVSS v2 vector.
    pub cvss_v2_metrics: Option<CvssV2Metrics>,
    /// CVSS v2 qualitative severity.
    pub cvss_v2_severity: Option<CvssV2Severity>,
    /// Full or partial CVSS v3 vector.
    pub cvss_v3_metrics: Option<CvssV3Metrics>,
    /// CVSS v3 qualitative severity.
    pub cvss_v3_severity: Option<CvssV3Severity>,
    /// CWE identifier, e.g. `CWE-79`.
    pub cwe_id: Option<String>,
    /// Also return CVEs whose match string changed in the modification range.
    pub include_match_string_change: bool,
    /// Treat `keyword` as an exact phrase.
    pub is_exact_match: bool,
    /// Words or phrase searched in the descriptions and references.
    pub keyword: Option<String>,
    /// Start of the last-modified range.
    pub mod_start_date: Option<DateTime<FixedOffset>>,
    /// End of the last-modified range.
    pub mod_end_date: Option<DateTime<FixedOffset>>,
    /// Start of the publication range.
    pub pub_start_date: Option<DateTime<FixedOffset>>,
    /// End of the publication range.
    pub pub_end_date: Option<DateTime<FixedOffset>>,
    /// Page size, `1..=2000`.
    pub results_per_page: Option<u32>,
    /// Zero-based index of the first result.
    pub start_index: Option<u64>,
}

impl GetCvesParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keyword search.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Requires the keyword to match as an exact phrase.
    pub fn exact_match(mut self) -> Self {
        self.is_exact_match = true;
        self
    }

    /// Sets the CPE match string.
    pub fn cpe_match_string(mut self, cpe: impl Into<String>) -> Self {
        self.cpe_match_string = Some(cpe.into());
        self
    }

    /// Includes CVEs whose CPE match string changed in the modification range.
    pub fn include_match_string_change(mut self) -> Self {
        self.include_match_string_change = true;
        self
    }

    /// Filters by CWE identifier.
    pub fn cwe_id(mut self, cwe_id: impl Into<String>) -> Self {
        self.cwe_id = Some(cwe_id.into());
        self
    }

    /// Filters by CVSS v2 severity.
    pub fn cvss_v2_severity(mut self, severity: CvssV2Severity) -> Self {
        self.cvss_v2_severity = Some(severity);
        self
    }

    /// Filters by CVSS v3 severity.
    pub fn cvss_v3_severity(mut self, severity: CvssV3Severity) -> Self {
        self.cvss_v3_severity = Some(severity);
        self
    }

    /// Filters by CVSS v2 vector.
    pub fn cvss_v2_metrics(mut self, metrics: CvssV2Metrics) -> Self {
        self.cvss_v2_metrics = Some(metrics);
        self
    }

    /// Filters by CVSS v3 vector.
    pub fn cvss_v3_metrics(mut self, metrics: CvssV3Metrics) -> Self {
        self.cvss_v3_metrics = Some(metrics);
        self
    }

    /// Restricts results to CVEs published in `[start, end]`.
    pub fn published_between(
        mut self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        self.pub_start_date = Some(start);
        self.pub_end_date = Some(end);
        self
    }

    /// Restricts results to CVEs last modified in `[start, end]`.
    pub fn modified_between(
        mut self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        self.mod_start_date = Some(start);
        self.mod_end_date = Some(end);
        self
    }

    /// Selects a page of the result set.
    pub fn page(mut self, start_index: u64, results_per_page: u32) -> Self {
        self.start_index = Some(start_index);
        self.results_per_page = Some(results_per_page);
        self
    }

    /// Requests the dictionary CPE add-on.
    pub fn add_ons(mut self, add_ons: AddOns) -> Self {
        self.add_ons = Some(add_ons);
        self
    }

    /// Sets a per-request API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Validates the parameter combination and returns the query pairs in wire order.
    pub(crate) fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, NvdApiError> {
        self.validate()?;

        let mut pairs = Vec::new();
        if let Some(add_ons) = self.add_ons {
            pairs.push(("addOns", add_ons.to_string()));
        }
        if let Some(api_key) = &self.api_key {
            pairs.push(("apiKey", api_key.clone()));
        }
        if let Some(cpe) = &self.cpe_match_string {
            pairs.push(("cpeMatchString", cpe.clone()));
        }
        if let Some(metrics) = &self.cvss_v2_metrics {
            pairs.push(("cvssV2Metrics", metrics.to_string()));
        }
        if let Some(severity) = self.cvss_v2_severity {
            pairs.push(("cvssV2Severity", severity.to_string()));
        }
        if let Some(metrics) = &self.cvss_v3_metrics {
            pairs.push(("cvssV3Metrics", metrics.to_string()));
        }
        if let Some(severity) = self.cvss_v3_severity {
            pairs.push(("cvssV3Severity", severity.to_string()));
        }
        if let Some(cwe_id) = &self.cwe_id {
            pairs.push(("cweId", cwe_id.clone()));
        }
        if self.include_match_string_change {
            pairs.push(("includeMatchStringChange", "true".to_string()));
        }
        if self.is_exact_match {
            pairs.push(("isExactMatch", "true".to_string()));
        }
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        if let (Some(start), Some(end)) = (self.mod_start_date, self.mod_end_date) {
            pairs.push(("modStartDate", format_nvd_date(&start)));
            pairs.push(("modEndDate", format_nvd_date(&end)));
        }
        if let (Some(start), Some(end)) = (self.pub_start_date, self.pub_end_date) {
            pairs.push(("pubStartDate", format_nvd_date(&start)));
            pairs.push(("pubEndDate", format_nvd_date(&end)));
        }
        if let Some(results_per_page) = self.results_per_page {
            pairs.push(("resultsPerPage", results_per_page.to_string()));
        }
        if let Some(start_index) = self.start_index {
            pairs.push(("startIndex", start_index.to_string()));
        }
        Ok(pairs)
    }

    fn validate(&self) -> Result<(), NvdApiError> {
        if let Some(cpe) = &self.cpe_match_string {
            validate_cpe_match_string(cpe)?;
        }
        if self.cvss_v2_severity.is_some() && self.cvss_v3_severity.is_some() {
            return Err(NvdApiError::ConflictingParameters(
                "'cvssV2Severity' and 'cvssV3Severity'",
            ));
        }
        if self.cvss_v2_metrics.is_some() && self.cvss_v3_metrics.is_some() {
            return Err(NvdApiError::ConflictingParameters(
                "'cvssV2Metrics' and 'cvssV3Metrics'",
            ));
        }
        if self.is_exact_match && self.keyword.is_none() {
            return Err(NvdApiError::InvalidParameter(
                "'isExactMatch' requires 'keyword'".to_string(),
            ));
        }
        if self.include_match_string_change && self.cpe_match_string.is_none() {
            return Err(NvdApiError::InvalidParameter(
                "'includeMatchStringChange' requires 'cpeMatchString'".to_string(),
            ));
        }
        validate_date_range("modStartDate", self.mod_start_date, "modEndDate", self.mod_end_date)?;
        validate_date_range("pubStartDate", self.pub_start_date, "pubEndDate", self.pub_end_date)?;
        if let Some(results_per_page) = self.results_per_page {
            if !(1..=MAX_RESULTS_PER_PAGE).contains(&results_per_page) {
                return Err(NvdApiError::InvalidParameter(format!(
                    "'resultsPerPage' must be between 1 and {MAX_RESULTS_PER_PAGE}, got {results_per_page}"
                )));
            }
        }
        Ok(())
    }
}

/// Formats a timestamp the way the NVD 1.0 API expects it:
/// `yyyy-MM-dd'T'HH:mm:ss:SSS UTC±hh:mm`.
pub fn format_nvd_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S:%3f UTC%:z").to_string()
}

/// Checks `CVE-YYYY-NNNN...`, accepting any case for the prefix.
pub(crate) fn validate_cve_id(cve: &str) -> Result<(), NvdApiError> {
    let invalid = || NvdApiError::InvalidParameter(format!("'{cve}' is not a CVE identifier"));

    let mut parts = cve.splitn(3, '-');
    let (Some(prefix), Some(year), Some(number)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if !prefix.eq_ignore_ascii_case("CVE")
        || year.len() != 4
        || !all_digits(year)
        || number.len() < 4
        || !all_digits(number)
    {
        return Err(invalid());
    }
    Ok(())
}

fn validate_cpe_match_string(cpe: &str) -> Result<(), NvdApiError> {
    if cpe.starts_with("cpe:/") || cpe.starts_with("cpe:2.3:") {
        Ok(())
    } else {
        Err(NvdApiError::InvalidParameter(format!(
            "'{cpe}' is neither a CPE 2.2 URI nor a CPE 2.3 formatted string"
        )))
    }
}

fn validate_date_range(
    start_name: &'static str,
    start: Option<DateTime<FixedOffset>>,
    end_name: &'static str,
    end: Option<DateTime<FixedOffset>>,
) -> Result<(), NvdApiError> {
    match (start, end) {
        (None, None) => Ok(()),
        (Some(start), Some(end)) if start > end => Err(NvdApiError::InvalidParameter(format!(
            "'{start_name}' must not be after '{end_name}'"
        ))),
        (Some(_), Some(_)) => Ok(()),
        _ => Err(NvdApiError::InvalidParameter(format!(
            "'{start_name}' and '{end_name}' must be provided together"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32, h: u32, offset_hours: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_nvd_date_format() {
        assert_eq!(
            format_nvd_date(&date(2021, 8, 4, 13, -5)),
            "2021-08-04T13:00:00:000 UTC-05:00"
        );
        assert_eq!(
            format_nvd_date(&date(2020, 1, 1, 0, 0)),
            "2020-01-01T00:00:00:000 UTC+00:00"
        );
    }

    #[test]
    fn test_cve_id_validation() {
        for ok in ["CVE-2015-5611", "CVE-2020-14144", "cve-2021-28378", "CVE-1999-0001"] {
            assert!(validate_cve_id(ok).is_ok(), "{ok}");
        }
        for bad in [
            "",
            "CVE-2015",
            "CVE-15-5611",
            "CVE-2015-561",
            "CAN-2015-5611",
            "CVE-2015-56x1",
        ] {
            assert!(
                matches!(validate_cve_id(bad), Err(NvdApiError::InvalidParameter(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_empty_params_have_no_pairs() {
        assert!(GetCvesParams::default().query_pairs().unwrap().is_empty());
    }

    #[test]
    fn test_pairs_in_wire_order() {
        let params = GetCvesParams::new()
            .keyword("gitea")
            .exact_match()
            .cvss_v3_severity(CvssV3Severity::High)
            .page(20, 10)
            .api_key("secret");
        let pairs = params.query_pairs().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("apiKey", "secret".to_string()),
                ("cvssV3Severity", "HIGH".to_string()),
                ("isExactMatch", "true".to_string()),
                ("keyword", "gitea".to_string()),
                ("resultsPerPage", "10".to_string()),
                ("startIndex", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_modified_range_and_v2_filters() {
        let params = GetCvesParams::new()
            .cvss_v2_severity(CvssV2Severity::Medium)
            .cvss_v2_metrics(CvssV2Metrics::new("AV:N/AC:L/Au:N").unwrap())
            .modified_between(date(2021, 8, 4, 13, -5), date(2021, 9, 1, 0, 2));
        let pairs = params.query_pairs().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("cvssV2Metrics", "AV:N/AC:L/Au:N".to_string()),
                ("cvssV2Severity", "MEDIUM".to_string()),
                ("modStartDate", "2021-08-04T13:00:00:000 UTC-05:00".to_string()),
                ("modEndDate", "2021-09-01T00:00:00:000 UTC+02:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_cpe_match_string_versions() {
        for cpe in ["cpe:/a:gitea:gitea", "cpe:2.3:a:gitea:gitea:*:*:*:*:*:*:*:*"] {
            let pairs = GetCvesParams::new()
                .cpe_match_string(cpe)
                .query_pairs()
                .unwrap();
            assert_eq!(pairs, vec![("cpeMatchString", cpe.to_string())]);
        }
        assert!(matches!(
            GetCvesParams::new().cpe_match_string("gitea").query_pairs(),
            Err(NvdApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_conflicting_severities() {
        let params = GetCvesParams::new()
            .cvss_v2_severity(CvssV2Severity::High)
            .cvss_v3_severity(CvssV3Severity::High);
        assert!(matches!(
            params.query_pairs(),
            Err(NvdApiError::ConflictingParameters(_))
        ));
    }

    #[test]
    fn test_conflicting_metrics() {
        let params = GetCvesParams::new()
            .cvss_v2_metrics(CvssV2Metrics::new("AV:N").unwrap())
            .cvss_v3_metrics(CvssV3Metrics::new("CVSS:3.1/AV:N").unwrap());
        assert!(matches!(
            params.query_pairs(),
            Err(NvdApiError::ConflictingParameters(_))
        ));
    }

    #[test]
    fn test_dependent_flags() {
        assert!(GetCvesParams::new().exact_match().query_pairs().is_err());
        assert!(GetCvesParams::new()
            .include_match_string_change()
            .query_pairs()
            .is_err());
        let pairs = GetCvesParams::new()
            .cpe_match_string("cpe:/a:gitea:gitea")
            .include_match_string_change()
            .query_pairs()
            .unwrap();
        assert!(pairs.contains(&("includeMatchStringChange", "true".to_string())));
    }

    #[test]
    fn test_date_ranges() {
        let start = date(2021, 1, 1, 0, 0);
        let end = date(2021, 3, 1, 0, 0);

        let pairs = GetCvesParams::new()
            .published_between(start, end)
            .query_pairs()
            .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("pubStartDate", "2021-01-01T00:00:00:000 UTC+00:00".to_string()),
                ("pubEndDate", "2021-03-01T00:00:00:000 UTC+00:00".to_string()),
            ]
        );

        assert!(GetCvesParams::new()
            .modified_between(end, start)
            .query_pairs()
            .is_err());

        let half_open = GetCvesParams {
            mod_start_date: Some(start),
            ..Default::default()
        };
        assert!(matches!(
            half_open.query_pairs(),
            Err(NvdApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_results_per_page_bounds() {
        assert!(GetCvesParams::new().page(0, 0).query_pairs().is_err());
        assert!(GetCvesParams::new().page(0, 2001).query_pairs().is_err());
        assert!(GetCvesParams::new().page(0, 2000).query_pairs().is_ok());
    }

    #[test]
    fn test_get_cve_params() {
        let mut params = GetCveParams::new("CVE-2021-28378");
        assert!(params.query_pairs().unwrap().is_empty());
        params.add_ons = Some(AddOns::DictionaryCpes);
        params.api_key = Some("k".into());
        assert_eq!(
            params.query_pairs().unwrap(),
            vec![
                ("addOns", "dictionaryCpes".to_string()),
                ("apiKey", "k".to_string())
            ]
        );
        assert!(GetCveParams::new("gitea").query_pairs().is_err());
    }
}
