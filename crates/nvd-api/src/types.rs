// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use std::fmt;

/// Additional data the NVD API can attach to each CVE item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOns {
    /// Attaches the matching official CPE dictionary names to every
    /// `cpe_match` entry of the configurations (`cpe_name`).
    DictionaryCpes,
}

impl fmt::Display for AddOns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOns::DictionaryCpes => write!(f, "dictionaryCpes"),
        }
    }
}

/// Qualitative CVSS v2 severity accepted by the `cvssV2Severity` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvssV2Severity {
    /// Base score 0.0 - 3.9.
    Low,
    /// Base score 4.0 - 6.9.
    Medium,
    /// Base score 7.0 - 10.0.
    High,
}

impl fmt::Display for CvssV2Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvssV2Severity::Low => write!(f, "LOW"),
            CvssV2Severity::Medium => write!(f, "MEDIUM"),
            CvssV2Severity::High => write!(f, "HIGH"),
        }
    }
}

/// Qualitative CVSS v3 severity accepted by the `cvssV3Severity` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvssV3Severity {
    /// Base score 0.1 - 3.9.
    Low,
    /// Base score 4.0 - 6.9.
    Medium,
    /// Base score 7.0 - 8.9.
    High,
    /// Base score 9.0 - 10.0.
    Critical,
}

impl fmt::Display for CvssV3Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvssV3Severity::Low => write!(f, "LOW"),
            CvssV3Severity::Medium => write!(f, "MEDIUM"),
            CvssV3Severity::High => write!(f, "HIGH"),
            CvssV3Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A full or partial CVSS v2 vector string, e.g. `AV:N/AC:L/Au:N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvssV2Metrics(String);

impl CvssV2Metrics {
    /// Wraps a CVSS v2 vector string.
    ///
    /// Returns `None` if the string does not start with the access vector metric (`AV:`).
    pub fn new(vector: impl Into<String>) -> Option<Self> {
        let vector = vector.into();
        vector.starts_with("AV:").then_some(Self(vector))
    }

    /// The raw vector string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CvssV2Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A full or partial CVSS v3 vector string, e.g. `CVSS:3.1/AV:N/AC:L`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvssV3Metrics(String);

impl CvssV3Metrics {
    /// Wraps a CVSS v3 vector string.
    ///
    /// Returns `None` if the string does not carry the `CVSS:3.x` prefix.
    pub fn new(vector: impl Into<String>) -> Option<Self> {
        let vector = vector.into();
        vector.starts_with("CVSS:3.").then_some(Self(vector))
    }

    /// The raw vector string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CvssV3Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
