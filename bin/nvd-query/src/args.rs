// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use crate::log::LogLevelParser;
use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Args, Parser, Subcommand};
use nvd_api::{
    AddOns, CvssV2Metrics, CvssV2Severity, CvssV3Metrics, CvssV3Severity, GetCveParams,
    GetCvesParams, MAX_RESULTS_PER_PAGE,
};
use std::{path::PathBuf, time::Duration};
use tracing_subscriber::filter::LevelFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    author = "Matter Labs",
    version,
    about = "Query CVE records from the National Vulnerability Database",
    long_about = None
)]
pub struct Arguments {
    /// Log level for the log output.
    /// Valid values are: `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[clap(long, default_value_t = LevelFilter::WARN, value_parser = LogLevelParser)]
    pub log_level: LevelFilter,
    /// Configuration file. Defaults to an optional `nvd-query.{toml,yaml,json}` in the
    /// working directory.
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Base URL of the NVD API.
    #[clap(long)]
    pub base_url: Option<Url>,
    /// NVD API key, raising the rate limit from 5 to 50 requests per 30 seconds.
    #[clap(long, env = "NVD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Delay between requests in milliseconds. Defaults to 6000, or 600 with an API key.
    #[clap(long, value_parser = parse_duration)]
    pub rate_limit: Option<Duration>,
    /// Print every response on a single line.
    #[clap(long)]
    pub compact: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch CVE records by identifier, one request per identifier.
    Cve(CveArgs),
    /// Search the CVE collection.
    Cves(CvesArgs),
}

#[derive(Args, Debug)]
pub struct CveArgs {
    /// CVE identifiers, e.g. `CVE-2021-28378`.
    #[arg(required = true, value_name = "CVE_ID")]
    pub ids: Vec<String>,
    /// Attach the matching CPE dictionary entries to every CPE match.
    #[arg(long)]
    pub dictionary_cpes: bool,
}

impl CveArgs {
    /// The request parameters for every identifier, in order.
    pub fn to_params(&self) -> Vec<GetCveParams> {
        self.ids
            .iter()
            .map(|id| GetCveParams {
                cve: id.clone(),
                add_ons: self.dictionary_cpes.then_some(AddOns::DictionaryCpes),
                api_key: None,
            })
            .collect()
    }
}

/// Filters of the CVE search. Dates are RFC 3339 timestamps or `YYYY-MM-DD` (midnight UTC).
#[derive(Args, Debug)]
pub struct CvesArgs {
    /// Words searched in the descriptions and references.
    #[arg(long)]
    pub keyword: Option<String>,
    /// Match the keyword as an exact phrase.
    #[arg(long, requires = "keyword")]
    pub exact_match: bool,
    /// CPE 2.2 URI (`cpe:/a:gitea:gitea`) or CPE 2.3 string (`cpe:2.3:a:gitea:gitea:*:...`).
    #[arg(long)]
    pub cpe_match_string: Option<String>,
    /// Include CVEs whose CPE match string changed in the modification range.
    #[arg(long, requires = "cpe_match_string")]
    pub include_match_string_change: bool,
    /// CWE identifier, e.g. `CWE-79`.
    #[arg(long)]
    pub cwe_id: Option<String>,
    /// CVSS v2 severity: LOW, MEDIUM or HIGH.
    #[arg(long, value_parser = parse_v2_severity, conflicts_with = "cvss_v3_severity")]
    pub cvss_v2_severity: Option<CvssV2Severity>,
    /// CVSS v3 severity: LOW, MEDIUM, HIGH or CRITICAL.
    #[arg(long, value_parser = parse_v3_severity)]
    pub cvss_v3_severity: Option<CvssV3Severity>,
    /// Full or partial CVSS v2 vector, e.g. `AV:N/AC:L`.
    #[arg(long, value_parser = parse_v2_metrics, conflicts_with = "cvss_v3_metrics")]
    pub cvss_v2_metrics: Option<CvssV2Metrics>,
    /// Full or partial CVSS v3 vector, e.g. `CVSS:3.1/AV:N`.
    #[arg(long, value_parser = parse_v3_metrics)]
    pub cvss_v3_metrics: Option<CvssV3Metrics>,
    /// Start of the publication range.
    #[arg(long, value_parser = parse_date, requires = "pub_end")]
    pub pub_start: Option<DateTime<FixedOffset>>,
    /// End of the publication range.
    #[arg(long, value_parser = parse_date, requires = "pub_start")]
    pub pub_end: Option<DateTime<FixedOffset>>,
    /// Start of the last-modified range.
    #[arg(long, value_parser = parse_date, requires = "mod_end")]
    pub mod_start: Option<DateTime<FixedOffset>>,
    /// End of the last-modified range.
    #[arg(long, value_parser = parse_date, requires = "mod_start")]
    pub mod_end: Option<DateTime<FixedOffset>>,
    /// Zero-based index of the first result.
    #[arg(long)]
    pub start_index: Option<u64>,
    /// Page size, 1 to 2000.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_RESULTS_PER_PAGE as i64))]
    pub results_per_page: Option<u32>,
    /// Attach the matching CPE dictionary entries to every CPE match.
    #[arg(long)]
    pub dictionary_cpes: bool,
}

impl CvesArgs {
    /// The request parameters for the search.
    pub fn to_params(&self) -> GetCvesParams {
        GetCvesParams {
            add_ons: self.dictionary_cpes.then_some(AddOns::DictionaryCpes),
            api_key: None,
            cpe_match_string: self.cpe_match_string.clone(),
            cvss_v2_metrics: self.cvss_v2_metrics.clone(),
            cvss_v2_severity: self.cvss_v2_severity,
            cvss_v3_metrics: self.cvss_v3_metrics.clone(),
            cvss_v3_severity: self.cvss_v3_severity,
            cwe_id: self.cwe_id.clone(),
            include_match_string_change: self.include_match_string_change,
            is_exact_match: self.exact_match,
            keyword: self.keyword.clone(),
            mod_start_date: self.mod_start,
            mod_end_date: self.mod_end,
            pub_start_date: self.pub_start,
            pub_end_date: self.pub_end,
            results_per_page: self.results_per_page,
            start_index: self.start_index,
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration> {
    let millis = s.parse()?;
    Ok(Duration::from_millis(millis))
}

fn parse_date(s: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Ok(date);
    }
    let midnight = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow!("Expected an RFC 3339 timestamp or YYYY-MM-DD, got '{s}'"))?;
    Ok(midnight.and_utc().fixed_offset())
}

fn parse_v2_severity(s: &str) -> Result<CvssV2Severity> {
    match s.to_ascii_uppercase().as_str() {
        "LOW" => Ok(CvssV2Severity::Low),
        "MEDIUM" => Ok(CvssV2Severity::Medium),
        "HIGH" => Ok(CvssV2Severity::High),
        _ => Err(anyhow!("Invalid CVSS v2 severity '{s}'")),
    }
}

fn parse_v3_severity(s: &str) -> Result<CvssV3Severity> {
    match s.to_ascii_uppercase().as_str() {
        "LOW" => Ok(CvssV3Severity::Low),
        "MEDIUM" => Ok(CvssV3Severity::Medium),
        "HIGH" => Ok(CvssV3Severity::High),
        "CRITICAL" => Ok(CvssV3Severity::Critical),
        _ => Err(anyhow!("Invalid CVSS v3 severity '{s}'")),
    }
}

fn parse_v2_metrics(s: &str) -> Result<CvssV2Metrics> {
    CvssV2Metrics::new(s).ok_or_else(|| anyhow!("CVSS v2 vector must start with 'AV:'"))
}

fn parse_v3_metrics(s: &str) -> Result<CvssV3Metrics> {
    CvssV3Metrics::new(s).ok_or_else(|| anyhow!("CVSS v3 vector must start with 'CVSS:3.'"))
}
