//! RustStack RDS Inspect - decode and render RDS request documents.
//!
//! Each input holds one or more `{"Action": ..., "Parameters": {...}}`
//! documents. Every document is decoded into the typed request shape of its
//! action and printed as `<Action> <rendering>`, one line per document.
//!
//! # Usage
//!
//! ```text
//! ruststack-rds-inspect copy-snapshot.json
//! cat requests.json | RDS_INSPECT_FORMAT=json ruststack-rds-inspect -
//! ```
//!
//! With no arguments, or with `-`, documents are read from stdin.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RDS_INSPECT_FORMAT` | `text` | `text` for the shape rendering, `json` for the canonical document |
//! | `RDS_INSPECT_STRICT` | `false` | Reject members the request shape does not declare |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod config;
mod document;
mod error;

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::InspectConfig;
use crate::document::{parse_documents, render};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout carries only rendered requests.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Read a whole input, where `-` names stdin.
fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(Path::new(source)).with_context(|| format!("failed to read {source}"))
}

/// Inspect every document in `input`, writing one line per decoded request.
///
/// Returns the number of documents that failed.
fn inspect_input(
    source: &str,
    input: &str,
    config: &InspectConfig,
    out: &mut impl Write,
) -> Result<usize> {
    let documents = match parse_documents(input) {
        Ok(documents) => documents,
        Err(e) => {
            error!(source, error = %e, "failed to parse input");
            return Ok(1);
        }
    };

    let mut failures = 0;
    for (index, document) in documents.into_iter().enumerate() {
        let action = document.action.clone();
        match document
            .decode(config.strict)
            .and_then(|request| render(&request, config.format))
        {
            Ok(line) => writeln!(out, "{line}").context("failed to write output")?,
            Err(e) => {
                error!(source, index, action = %action, error = %e, "failed to inspect document");
                failures += 1;
            }
        }
    }
    Ok(failures)
}

/// Inspect each source in turn. An unreadable source counts as one failure and
/// the remaining sources are still inspected.
fn inspect_sources(
    sources: &[String],
    config: &InspectConfig,
    out: &mut impl Write,
) -> Result<usize> {
    let mut failures = 0;
    for source in sources {
        match read_source(source) {
            Ok(input) => failures += inspect_input(source, &input, config, out)?,
            Err(e) => {
                error!(source = %source, error = %format_args!("{e:#}"), "failed to read input");
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn main() -> Result<()> {
    let config = InspectConfig::from_env()?;
    init_tracing(&config.log_level)?;

    let mut sources: Vec<String> = std::env::args().skip(1).collect();
    if sources.is_empty() {
        sources.push("-".to_owned());
    }

    info!(
        format = %config.format,
        strict = config.strict,
        inputs = sources.len(),
        "starting RustStack RDS inspect",
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let failures = inspect_sources(&sources, &config, &mut out)?;
    out.flush().context("failed to flush output")?;

    if failures > 0 {
        anyhow::bail!("{failures} input(s) or request document(s) failed to inspect");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn run(input: &str, config: &InspectConfig) -> (String, usize) {
        let mut out: Vec<u8> = Vec::new();
        let failures = inspect_input("test", input, config, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), failures)
    }

    #[test]
    fn test_should_print_one_line_per_document() {
        let input = r#"
            {"Action": "DescribeDBSnapshots", "Parameters": {"DBInstanceIdentifier": "db-1"}}
            {"Action": "CopyDBSnapshot", "Parameters": {"CopyTags": false}}
        "#;
        let (out, failures) = run(input, &InspectConfig::default());
        assert_eq!(failures, 0);
        assert_eq!(
            out,
            "DescribeDBSnapshots {DBInstanceIdentifier: db-1}\nCopyDBSnapshot {CopyTags: false}\n"
        );
    }

    #[test]
    fn test_should_count_failures_and_keep_going() {
        let input = r#"
            {"Action": "DropDatabase"}
            {"Action": "ModifyDBCluster", "Parameters": {"Port": "x"}}
            {"Action": "ModifyDBCluster", "Parameters": {"Port": 3306}}
        "#;
        let (out, failures) = run(input, &InspectConfig::default());
        assert_eq!(failures, 2);
        assert_eq!(out, "ModifyDBCluster {Port: 3306}\n");
    }

    #[test]
    fn test_should_fail_whole_input_on_malformed_json() {
        let (out, failures) = run("{\"Action\": ", &InspectConfig::default());
        assert_eq!(failures, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_should_honor_json_format_and_strict_mode() {
        let config = InspectConfig {
            format: OutputFormat::Json,
            strict: true,
            ..InspectConfig::default()
        };
        let input = r#"
            {"Action": "CopyDBSnapshot", "Parameters": {"SourceDBSnapshotIdentifier": "s1"}}
            {"Action": "CopyDBSnapshot", "Parameters": {"SourceDBSnapshotId": "s1"}}
        "#;
        let (out, failures) = run(input, &config);
        assert_eq!(failures, 1);
        assert_eq!(out, "CopyDBSnapshot {\"SourceDBSnapshotIdentifier\":\"s1\"}\n");
    }

    #[test]
    fn test_should_read_documents_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Action": "RegisterDBProxyTargets"}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let input = read_source(&path).unwrap();
        let (out, failures) = run(&input, &InspectConfig::default());
        assert_eq!(failures, 0);
        assert_eq!(out, "RegisterDBProxyTargets {}\n");
    }

    #[test]
    fn test_should_continue_past_unreadable_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Action": "CopyDBSnapshot", "Parameters": {{"CopyTags": true}}}}"#)
            .unwrap();
        let sources = vec![
            "/nonexistent/requests.json".to_owned(),
            file.path().to_str().unwrap().to_owned(),
        ];

        let mut out: Vec<u8> = Vec::new();
        let failures = inspect_sources(&sources, &InspectConfig::default(), &mut out).unwrap();
        assert_eq!(failures, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "CopyDBSnapshot {CopyTags: true}\n");
    }

    #[test]
    fn test_should_report_missing_file() {
        let err = read_source("/nonexistent/requests.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/requests.json"));
    }
}
