//! CLI for the Set-Cookie scanner.
//!
//! Fetches a single URL and reports whether its `Set-Cookie` header carries
//! the `secure` and `HttpOnly` flags, one JSON issue per line on stdout.

use clap::Parser;
use setcookie_scanner::{load_config, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Printed on stdout when no URL is given.
const MISSING_URL_MESSAGE: &str = "URL missing from the command-line parameter list.";

/// Set-Cookie Scanner - Check a site's Set-Cookie header for the secure and HttpOnly flags.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to scan.
    url: Option<String>,

    /// Path to a TOML config file.
    #[arg(long, env = "SETCOOKIE_SCANNER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    let Some(url) = target(&args) else {
        println!("{MISSING_URL_MESSAGE}");
        return ExitCode::SUCCESS;
    };

    // Install ring as the process-wide rustls crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    match run(url, args.config.as_deref()).await {
        Ok(summary) => {
            log_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(url = %url, error = %e, "Scan failed");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Stdout carries the report, so log events go to stderr. Compact formatting
/// without target paths; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Returns the URL to scan, if one was given.
fn target(args: &Args) -> Option<&str> {
    args.url.as_deref()
}

/// Main execution logic.
async fn run(url: &str, config_path: Option<&Path>) -> Result<RunSummary, RunnerError> {
    let scanner = load_config(config_path)?;
    let config = RunnerConfig::from_target(url, scanner)?;
    let runner = Runner::new(config)?;
    runner.run(std::io::stdout().lock()).await
}

/// Logs the final run summary.
fn log_summary(summary: &RunSummary) {
    info!(
        set_cookie_present = summary.set_cookie_present,
        issues_reported = summary.issues_reported,
        high_issues = summary.high_issues,
        info_issues = summary.info_issues,
        serialization_failures = summary.serialization_failures,
        "Summary"
    );
}
