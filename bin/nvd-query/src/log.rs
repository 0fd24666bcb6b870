// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Logging related stuff

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::Registry;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// A log level parser for clap, with "off", "error", "warn", "info", "debug", "trace" as valid values
#[derive(Clone)]
pub struct LogLevelParser;

impl clap::builder::TypedValueParser for LogLevelParser {
    type Value = LevelFilter;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        clap::builder::TypedValueParser::parse(self, cmd, arg, value.to_owned())
    }

    fn parse(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: std::ffi::OsString,
    ) -> Result<Self::Value, clap::Error> {
        use std::str::FromStr;
        let p = clap::builder::PossibleValuesParser::new([
            "off", "error", "warn", "info", "debug", "trace",
        ]);
        let v = p.parse(cmd, arg, value)?;

        LevelFilter::from_str(&v)
            .map_err(|_| clap::Error::new(clap::error::ErrorKind::InvalidValue))
    }
}

/// Directives used when `RUST_LOG` is unset: `warn` globally and `log_level` for `targets`.
fn fallback_directives(targets: &[&str], log_level: &LevelFilter) -> String {
    if *log_level == LevelFilter::OFF {
        return "off".to_string();
    }
    targets.iter().fold("warn".to_string(), |mut directives, target| {
        directives.push_str(&format!(",{target}={log_level}"));
        directives
    })
}

/// Setup logging to stderr, enabling `log_level` for each of `targets`.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn setup_logging(targets: &[&str], log_level: &LevelFilter) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to set logger")?;
    let filter = EnvFilter::builder()
        .try_from_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives(targets, log_level)));
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directives() {
        assert_eq!(
            fallback_directives(&["nvd_query", "nvd_api"], &LevelFilter::DEBUG),
            "warn,nvd_query=debug,nvd_api=debug"
        );
        assert_eq!(fallback_directives(&["nvd_query"], &LevelFilter::OFF), "off");
    }

    #[test]
    fn test_log_level_parser() {
        let cmd = clap::Command::new("nvd-query");
        let level = clap::builder::TypedValueParser::parse(
            &LogLevelParser,
            &cmd,
            None,
            std::ffi::OsString::from("trace"),
        )
        .unwrap();
        assert_eq!(level, LevelFilter::TRACE);
        assert!(clap::builder::TypedValueParser::parse(
            &LogLevelParser,
            &cmd,
            None,
            std::ffi::OsString::from("verbose"),
        )
        .is_err());
    }
}
