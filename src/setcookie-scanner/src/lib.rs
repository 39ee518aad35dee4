#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod analyzer;
pub mod config;
pub mod fetch;
pub mod issues;
pub mod report;
pub mod runner;
pub mod summary;

pub use analyzer::{analyze, classify, cookie_tokens, CookieFlags, Finding};
pub use config::{load_config, ConfigError, ScannerConfig};
pub use fetch::{first_set_cookie, FetchError, Fetcher};
pub use issues::{FurtherInfo, Issue, ReferenceUrl, References, Severity};
pub use report::{read_issues, ReportError, Reporter};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ReportOutcome, RunSummary};
