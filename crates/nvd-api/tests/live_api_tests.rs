// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Round-trip checks against the public NVD API.
//!
//! Run with `NVD_API_KEY=... cargo test -p nvd-api --test live_api_tests -- --ignored`.

mod common;

use common::assert_round_trip;
use nvd_api::{ApiClient, GetCveParams, GetCvesParams};
use std::time::Duration;

// Stay below 5 requests per 30 seconds, the public limit without extra quota
const REQUEST_DELAY: Duration = Duration::from_secs(6);

fn live_client() -> ApiClient {
    let api_key = std::env::var("NVD_API_KEY").expect("NVD_API_KEY must be set for live tests");
    let mut client = ApiClient::new().unwrap().with_api_key(api_key);
    client.set_request_delay(REQUEST_DELAY);
    client
}

#[tokio::test]
#[ignore = "queries the live NVD API"]
async fn test_live_get_cve() {
    let client = live_client();

    for cve in ["CVE-2015-5611", "CVE-2020-14144", "CVE-2021-28378"] {
        let raw = client.get_cve_raw(&GetCveParams::new(cve)).await;
        if let Err(e) = &raw {
            panic!("{cve}: {e:?}");
        }
        let raw = raw.unwrap();
        let response = serde_json::from_str::<nvd_api::CveResponse>(&raw.body);
        if let Err(e) = &response {
            panic!("{cve}: {e}\nLast body [{}]", raw.body);
        }
        assert_round_trip(&raw.body, &response.unwrap());
    }
}

#[tokio::test]
#[ignore = "queries the live NVD API"]
async fn test_live_get_cves() {
    let client = live_client();

    let cases = [
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

    for (name, params) in cases {
        let raw = client.get_cves_raw(&params).await;
        if let Err(e) = &raw {
            panic!("{name}: {e:?}");
        }
        let raw = raw.unwrap();
        let response = serde_json::from_str::<nvd_api::CveResponse>(&raw.body);
        if let Err(e) = &response {
            panic!("{name}: {e}\nLast body [{}]", raw.body);
        }
        assert_round_trip(&raw.body, &response.unwrap());
    }
}
