// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

#[path = "../tests/common/mod.rs"]
mod common;

use common::normalize;
use nvd_api::{ApiClient, CveResponse, GetCveParams, GetCvesParams, NvdApiError, RawResponse};
use serde_json::Value;
use std::time::Duration;

/// Queries the live NVD API and checks that every response survives decoding and re-encoding
///
/// Set `NVD_API_KEY` to use the higher rate limit; without it the example waits
/// six seconds between requests.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== NVD API Round-Trip Example ===\n");

    let mut client = ApiClient::new()?;
    match std::env::var("NVD_API_KEY") {
        Ok(key) => {
            client = client.with_api_key(key);
            client.set_request_delay(Duration::from_millis(600));
        }
        Err(_) => client.set_request_delay(Duration::from_secs(6)),
    }

    let mut results = Vec::new();

    println!("1. Single CVE records");
    println!("=====================");
    for cve in ["CVE-2015-5611", "CVE-2020-14144", "CVE-2021-28378"] {
        print!("  - {cve}: ");
        let outcome = client.get_cve_raw(&GetCveParams::new(cve)).await;
        results.push((cve.to_string(), report(outcome)));
    }

    println!("\n2. CVE searches");
    println!("===============");
    let searches = [
        ("no-params", GetCvesParams::default()),
        ("keywords", GetCvesParams::new().keyword("gitea")),
        (
            "CPE v2.2 match string",
            GetCvesParams::new().cpe_match_string("cpe:/a:gitea:gitea"),
        ),
        (
            "CPE v2.3 match string",
            GetCvesParams::new().cpe_match_string("cpe:2.3:a:gitea:gitea:*:*:*:*:*:*:*:*"),
        ),
    ];
    for (name, params) in searches {
        print!("  - {name}: ");
        let outcome = client.get_cves_raw(&params).await;
        results.push((name.to_string(), report(outcome)));
    }

    println!("\n=== Summary ===");
    let passed = results.iter().filter(|(_, ok)| *ok).count();
    println!("{passed}/{} responses round-tripped", results.len());
    for (name, ok) in &results {
        println!("  {} {name}", if *ok { "✓" } else { "✗" });
    }

    Ok(())
}

fn report(outcome: Result<RawResponse, NvdApiError>) -> bool {
    let raw = match outcome {
        Ok(raw) => raw,
        Err(e) => {
            println!("✗ Failed: {e}");
            return false;
        }
    };
    let decoded: CveResponse = match serde_json::from_str(&raw.body) {
        Ok(decoded) => decoded,
        Err(e) => {
            println!("✗ Failed to decode: {e}");
            return false;
        }
    };

    let expected = serde_json::from_str::<Value>(&raw.body).map(normalize);
    let actual = serde_json::to_value(&decoded).map(normalize);
    match (expected, actual) {
        (Ok(expected), Ok(actual)) if expected == actual => {
            println!(
                "✓ {} of {} items",
                decoded.result.items.len(),
                decoded.total_results
            );
            true
        }
        _ => {
            println!("✗ Re-encoded JSON differs from the served body");
            false
        }
    }
}

