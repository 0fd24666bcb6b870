// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Configuration handling

use anyhow::{Context, Result};
use config::{Config, Environment, File, Source};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::trace;

/// Base URL of the public NVD API.
pub const DEFAULT_BASE_URL: &str = "https://services.nvd.nist.gov";

/// Settings that may come from a file or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL the API paths are resolved against.
    pub base_url: String,
    /// NVD API key.
    pub api_key: Option<String>,
    /// Fixed delay between two requests, in milliseconds.
    pub rate_limit_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
            rate_limit_ms: None,
        }
    }
}

impl Settings {
    /// Loads the settings from, in increasing priority: the defaults, `path` (or an optional
    /// `nvd-query.{toml,yaml,json}` in the working directory), and `NVD_QUERY_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        trace!(?path, "Loading config");
        let environment = Environment::with_prefix("NVD_QUERY").try_parsing(true);
        match path {
            Some(path) => Self::load_from(File::from(path).required(true), environment),
            None => Self::load_from(File::with_name("nvd-query").required(false), environment),
        }
    }

    fn load_from<S>(file: S, environment: Environment) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{FileFormat, Map};

    /// The `NVD_QUERY_*` layer fed from `vars` instead of the process environment.
    fn environment(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix("NVD_QUERY")
            .try_parsing(true)
            .source(Some(vars))
    }

    #[test]
    fn test_defaults() {
        let settings =
            Settings::load_from(File::from_str("", FileFormat::Toml), environment(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            api_key = "from-file"
            rate_limit_ms = 1500
        "#;
        let settings =
            Settings::load_from(File::from_str(toml, FileFormat::Toml), environment(&[])).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.rate_limit_ms, Some(1500));
    }

    #[test]
    fn test_yaml_file() {
        let yaml = "base_url: http://127.0.0.1:8080\n";
        let settings =
            Settings::load_from(File::from_str(yaml, FileFormat::Yaml), environment(&[])).unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.api_key, None);
    }

    #[test]
    fn test_environment_overrides_file() {
        let toml = r#"
            api_key = "from-file"
            rate_limit_ms = 1
        "#;
        let settings = Settings::load_from(
            File::from_str(toml, FileFormat::Toml),
            environment(&[
                ("NVD_QUERY_RATE_LIMIT_MS", "250"),
                ("NVD_QUERY_API_KEY", "from-env"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api_key.as_deref(), Some("from-env"));
        assert_eq!(settings.rate_limit_ms, Some(250));
    }

    #[test]
    fn test_missing_required_file() {
        assert!(Settings::load(Some(Path::new("/nonexistent/nvd-query.toml"))).is_err());
    }
}
