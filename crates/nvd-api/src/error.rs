// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use percent_encoding::percent_decode_str;
use reqwest::{Response, StatusCode};
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with the NVD API.
#[derive(Error, Debug)]
pub enum NvdApiError {
    /// Wraps an underlying reqwest error.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Wraps a URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Wraps a Serde JSON error.
    #[error("Serde JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Represents a general API error, capturing the HTTP status and optional error details.
    #[error("API Error: Status={status}, Message={message:?}")]
    ApiError {
        /// HTTP status code returned by the API.
        status: StatusCode,
        /// The server-provided error message, from the `message` header or the body.
        message: Option<String>,
    },

    /// Indicates that conflicting parameters were supplied.
    #[error("Cannot provide conflicting parameters: {0}")]
    ConflictingParameters(&'static str),

    /// Indicates an invalid parameter was provided.
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),
}

/// Extracts the error message NVD puts into the `message` response header.
pub(crate) fn extract_api_error_message(response: &Response) -> Option<String> {
    let value = response
        .headers()
        .get("message")
        .and_then(|v| v.to_str().ok())?;

    if value.contains('%') {
        percent_decode_str(value)
            .decode_utf8()
            .ok()
            .map(|s| s.to_string())
    } else {
        Some(value.to_string())
    }
}

/// Checks the response status and returns an ApiError if it's not one of the expected statuses.
pub(crate) async fn check_status(
    response: Response,
    expected_statuses: &[StatusCode],
) -> Result<Response, NvdApiError> {
    let status = response.status();
    if expected_statuses.contains(&status) {
        Ok(response)
    } else {
        let header_message = extract_api_error_message(&response);
        let message = match header_message {
            Some(message) => Some(message),
            None => response
                .text()
                .await
                .ok()
                .map(|body| body.trim().to_string())
                .filter(|body| !body.is_empty()),
        };
        Err(NvdApiError::ApiError { status, message })
    }
}
