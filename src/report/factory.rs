//! Reporter factory: reads one XML file and hands it to the matching normalizer.

use super::types::Report;
use super::{golangcilint, gotestsum};
use crate::junit::ReportSource;
use crate::types::ReporterType;
use log::debug;

pub struct ReporterFactory<S: ReportSource> {
    source: S,
}

impl<S: ReportSource> ReporterFactory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read `directory/file_name` and normalize it as a `kind` report.
    pub fn from_xml(&self, kind: ReporterType, directory: &str, file_name: &str) -> Result<Report, String> {
        debug!("loading {} report for {}", kind, directory);
        let parsed = self.source.safe_parse(directory, file_name)?;

        match kind {
            ReporterType::Gotestsum => gotestsum::normalize(directory, &parsed),
            ReporterType::GolangCILint => golangcilint::normalize(directory, &parsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::junit::{JUnitReport, parse_junit_xml};
    use crate::types::Outcome;

    struct StaticSource(&'static str);

    impl ReportSource for StaticSource {
        fn safe_parse(&self, _directory: &str, _file_name: &str) -> Result<JUnitReport, String> {
            parse_junit_xml(self.0)
        }
    }

    struct FailingSource;

    impl ReportSource for FailingSource {
        fn safe_parse(&self, directory: &str, file_name: &str) -> Result<JUnitReport, String> {
            Err(format!("Failed to read {}/{}: No such file or directory", directory, file_name))
        }
    }

    #[test]
    fn test_dispatches_on_reporter_type() {
        // The same empty tree reads differently per producer
        let factory = ReporterFactory::new(StaticSource("<testsuites/>"));

        let test = factory.from_xml(ReporterType::Gotestsum, "go/app", "test.xml").unwrap();
        assert_eq!(test.kind, ReporterType::Gotestsum);
        assert_eq!(test.result(), Outcome::Unknown);

        let lint = factory.from_xml(ReporterType::GolangCILint, "go/app", "lint.xml").unwrap();
        assert_eq!(lint.kind, ReporterType::GolangCILint);
        assert_eq!(lint.result(), Outcome::Passed);
        assert_eq!(lint.path, "go/app");
    }

    #[test]
    fn test_read_errors_propagate() {
        let factory = ReporterFactory::new(FailingSource);
        let err = factory.from_xml(ReporterType::Gotestsum, "go/app", "test.xml").unwrap_err();
        assert!(err.contains("go/app/test.xml"));
    }
}
