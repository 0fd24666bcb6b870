// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use nvd_api::{ApiClient, CvssV3Severity, GetCvesParams, NvdApiError};

#[tokio::main]
async fn main() -> Result<(), NvdApiError> {
    let client = ApiClient::new()?;

    let params = GetCvesParams::new()
        .cpe_match_string("cpe:2.3:a:gitea:gitea:*:*:*:*:*:*:*:*")
        .cvss_v3_severity(CvssV3Severity::High)
        .page(0, 20);

    let response = client.get_cves(&params).await?;
    println!(
        "{} high severity CVEs for gitea, showing {}",
        response.total_results,
        response.result.items.len()
    );

    for item in &response.result.items {
        println!(
            "{:<16} {:>4} {}",
            item.id(),
            item.impact
                .best_base_score()
                .map(|s| format!("{s:.1}"))
                .unwrap_or_else(|| "-".into()),
            item.english_description().unwrap_or_default()
        );
    }

    Ok(())
}
