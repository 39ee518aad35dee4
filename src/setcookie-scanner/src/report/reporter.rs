//! Issue reporter.

use super::ReportError;
use crate::summary::ReportOutcome;
use serde::Serialize;
use std::io::Write;
use tracing::warn;

/// Writes issues as newline-delimited JSON.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    writer: W,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serializes `record` and writes it as a single line.
    ///
    /// If serialization fails, the error message is written on its own line in
    /// place of the record and [`ReportOutcome::Failed`] is returned, so the
    /// caller can move on to the next record.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the underlying writer fails.
    pub fn report<T: Serialize + ?Sized>(
        &mut self,
        record: &T,
    ) -> Result<ReportOutcome, ReportError> {
        match serde_json::to_string(record) {
            Ok(line) => {
                writeln!(self.writer, "{line}")?;
                Ok(ReportOutcome::Written)
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize issue");
                writeln!(self.writer, "{e}")?;
                Ok(ReportOutcome::Failed {
                    error: e.to_string(),
                })
            }
        }
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if flushing fails.
    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{Issue, References, Severity};
    use std::collections::HashMap;

    #[test]
    fn writes_one_line_per_issue() {
        let references = References::default();
        let mut reporter = Reporter::new(Vec::new());

        let first = Issue::new("first", "one", Severity::High, &references);
        let second = Issue::new("second", "two", Severity::Info, &references);
        assert_eq!(reporter.report(&first).unwrap(), ReportOutcome::Written);
        assert_eq!(reporter.report(&second).unwrap(), ReportOutcome::Written);

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(output.ends_with('\n'));

        let parsed: Issue = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, first);
    }

    #[test]
    fn serialization_failure_writes_diagnostic_and_continues() {
        // JSON object keys must be strings, so tuple keys fail to serialize.
        let unserializable: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let issue = Issue::new("ok", "fine", Severity::Info, &References::default());
        let mut reporter = Reporter::new(Vec::new());

        let outcome = reporter.report(&unserializable).unwrap();
        assert!(!outcome.is_written());
        assert!(reporter.report(&issue).unwrap().is_written());

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("key must be a string"));
        assert!(serde_json::from_str::<Issue>(lines[1]).is_ok());
    }
}
