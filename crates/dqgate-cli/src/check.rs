//! # Check Subcommand
//!
//! Runs one validation pass over an order CSV and reports the outcome.
//! The printed summary is for humans; the returned exit code is the
//! machine-readable signal. A failing run may additionally post an alert
//! to a webhook — best-effort only, delivery problems never change the
//! validation outcome.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use dqgate_core::{validate_source, ValidationReport};
use dqgate_notify::{send_blocking, WebhookConfig, DEFAULT_TIMEOUT_SECS};

/// Arguments for the `dqgate check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the order CSV file to validate.
    pub input: PathBuf,

    /// Webhook URL for failure alerts. Overrides $SLACK_WEBHOOK_URL.
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Webhook delivery timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub webhook_timeout: u64,
}

/// Execute the check subcommand.
///
/// Returns the process exit code: 0 when every row is valid, 1 when any
/// row fails. Source errors propagate to the caller, which maps them to
/// the distinct fatal exit code.
pub fn run_check(args: &CheckArgs, webhook_url: Option<&str>) -> Result<u8> {
    let report = validate_source(&args.input)?;

    if report.passed() {
        println!("{}", report.summary());
        return Ok(0);
    }

    eprintln!("{}", report.summary());
    for error in report.errors() {
        eprintln!("  - {error}");
    }

    notify_failure(&report, webhook_url, args.webhook_timeout);
    Ok(1)
}

/// Best-effort failure alert. Delivery problems are logged and swallowed.
fn notify_failure(report: &ValidationReport, webhook_url: Option<&str>, timeout_secs: u64) {
    let Some(url) = webhook_url else {
        tracing::debug!("no webhook configured; skipping alert");
        return;
    };

    let config = WebhookConfig {
        url: url.to_string(),
        timeout_secs,
    };
    match send_blocking(&config, &report.alert_text()) {
        Ok(()) => tracing::info!("failure alert delivered"),
        Err(e) => tracing::warn!("failure alert not delivered: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use dqgate_core::SourceError;

    fn args(input: &Path) -> CheckArgs {
        CheckArgs {
            input: input.to_path_buf(),
            webhook_url: None,
            webhook_timeout: 1,
        }
    }

    #[test]
    fn valid_file_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "order_id,qty,amount,currency,ship_country\n\
             TXN-101,2,150.5,INR,IN\n\
             TXN-102,5,200.0,INR,IN\n",
        )
        .unwrap();
        assert_eq!(run_check(&args(&path), None).unwrap(), 0);
    }

    #[test]
    fn invalid_row_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "order_id,qty,amount,currency,ship_country\n\
             TXN-103,-1,50.0,INR,IN\n",
        )
        .unwrap();
        assert_eq!(run_check(&args(&path), None).unwrap(), 1);
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = run_check(&args(&path), None).unwrap_err();
        assert!(err.downcast_ref::<SourceError>().is_some(), "got: {err:#}");
    }

    #[test]
    fn unreachable_webhook_does_not_change_the_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "order_id,qty,amount,currency,ship_country\n\
             TXN-103,-1,50.0,INR,IN\n",
        )
        .unwrap();
        // Closed port: the send fails fast and must be swallowed.
        let code = run_check(&args(&path), Some("http://127.0.0.1:1/")).unwrap();
        assert_eq!(code, 1);
    }
}
