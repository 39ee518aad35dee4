//! Orchestrates a single scan: fetch, analyze, report.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::analyzer::analyze;
use crate::fetch::Fetcher;
use crate::issues::References;
use crate::report::Reporter;
use crate::summary::RunSummary;
use std::io::Write;
use tracing::{info, warn};

/// Runs one scan against one URL.
pub struct Runner {
    config: RunnerConfig,
    fetcher: Fetcher,
    references: References,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Fetch`] if the HTTP client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let fetcher = Fetcher::new(&config.scanner().user_agent)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Builds a runner that uses the given fetcher instead of a default one.
    #[must_use]
    pub fn with_fetcher(config: RunnerConfig, fetcher: Fetcher) -> Self {
        let references = config.scanner().references();
        Self {
            config,
            fetcher,
            references,
        }
    }

    /// Fetches the target and writes one JSON line per issue to `writer`.
    ///
    /// Nothing is written if the fetch fails.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Fetch`] on transport failure and
    /// [`RunnerError::Report`] if `writer` fails.
    pub async fn run<W: Write>(&self, writer: W) -> Result<RunSummary, RunnerError> {
        let set_cookie = self.fetcher.fetch_set_cookie(self.config.url()).await?;

        let header = set_cookie.as_deref();
        let mut summary =
            RunSummary::new(header.is_some_and(|value| !value.trim().is_empty()));
        let mut reporter = Reporter::new(writer);

        for issue in analyze(header, &self.references) {
            let outcome = reporter.report(&issue)?;
            if !outcome.is_written() {
                warn!(summary = %issue.summary, "Issue replaced by diagnostic");
            }
            summary.record_result(&issue, &outcome);
        }
        reporter.flush()?;

        info!(
            url = %self.config.url(),
            issues = summary.issues_reported,
            high = summary.high_issues,
            "Scan complete"
        );
        Ok(summary)
    }
}
