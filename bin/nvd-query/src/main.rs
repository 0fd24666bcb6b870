// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Tool to fetch and search CVE records of the National Vulnerability Database

mod args;
mod log;
mod settings;

use crate::{
    args::{Arguments, Command},
    settings::Settings,
};
use anyhow::{Context, Result};
use clap::Parser;
use nvd_api::{ApiClient, CveResponse};
use serde::Serialize;
use std::{
    io::{self, Write},
    time::Duration,
};
use tracing::{debug, info};

// Public NVD limits: 5 requests per 30 seconds, 50 with an API key
const DEFAULT_DELAY: Duration = Duration::from_secs(6);
const DEFAULT_DELAY_WITH_KEY: Duration = Duration::from_millis(600);

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    log::setup_logging(&[env!("CARGO_CRATE_NAME"), "nvd_api"], &args.log_level)?;

    let settings = Settings::load(args.config.as_deref())?;
    let client = build_client(&args, settings)?;

    match &args.command {
        Command::Cve(cve_args) => {
            for params in cve_args.to_params() {
                info!("Fetching {}", params.cve);
                let response = client
                    .get_cve(&params)
                    .await
                    .with_context(|| format!("Failed to fetch {}", params.cve))?;
                print_response(&response, args.compact)?;
            }
        }
        Command::Cves(cves_args) => {
            let params = cves_args.to_params();
            debug!(?params, "Searching CVEs");
            let response = client
                .get_cves(&params)
                .await
                .context("Failed to search CVEs")?;
            info!(
                "Received {} of {} results starting at {}",
                response.result.items.len(),
                response.total_results,
                response.start_index
            );
            print_response(&response, args.compact)?;
        }
    }

    Ok(())
}

/// Merges the command line over the loaded settings.
fn build_client(args: &Arguments, settings: Settings) -> Result<ApiClient> {
    let base_url = match &args.base_url {
        Some(url) => url.to_string(),
        None => settings.base_url,
    };
    let api_key = args.api_key.clone().or(settings.api_key);
    let delay = args
        .rate_limit
        .or(settings.rate_limit_ms.map(Duration::from_millis))
        .unwrap_or(if api_key.is_some() {
            DEFAULT_DELAY_WITH_KEY
        } else {
            DEFAULT_DELAY
        });

    let mut client = ApiClient::new_with_options(base_url.as_str(), api_key)
        .with_context(|| format!("Failed to create client for {base_url}"))?;
    client.set_request_delay(delay);
    debug!(
        %base_url,
        api_key = client.has_api_key(),
        ?delay,
        "Client configured"
    );
    Ok(client)
}

fn print_response(response: &CveResponse, compact: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, response, compact)?;
    out.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(extra: &[&str]) -> Arguments {
        Arguments::try_parse_from(
            ["nvd-query"]
                .into_iter()
                .chain(extra.iter().copied())
                .chain(["cves"]),
        )
        .unwrap()
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            base_url: "http://127.0.0.1:1".into(),
            api_key: Some("from-settings".into()),
            rate_limit_ms: Some(100),
        };
        let args = arguments(&["--base-url", "http://127.0.0.1:2", "--rate-limit", "5"]);
        let client = build_client(&args, settings).unwrap();
        assert_eq!(client.request_delay(), Duration::from_millis(5));
        assert!(client.has_api_key());
    }

    #[test]
    fn test_settings_rate_limit() {
        let settings = Settings {
            rate_limit_ms: Some(100),
            ..Default::default()
        };
        let client = build_client(&arguments(&[]), settings).unwrap();
        assert_eq!(client.request_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_default_delay_depends_on_key() {
        let client = build_client(&arguments(&["--api-key", "k"]), Settings::default()).unwrap();
        assert_eq!(client.request_delay(), DEFAULT_DELAY_WITH_KEY);
    }

    #[test]
    fn test_write_json() {
        let value = serde_json::json!({"totalResults": 0});
        let mut out = Vec::new();
        write_json(&mut out, &value, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"totalResults\":0}\n");

        let mut out = Vec::new();
        write_json(&mut out, &value, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"totalResults\": 0\n}\n"
        );
    }
}
