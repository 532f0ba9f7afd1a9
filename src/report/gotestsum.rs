//! gotestsum report normalizer.
//!
//! gotestsum writes one `<testsuite>` per Go package, root totals on
//! `<testsuites>`, and the Go toolchain version as a `go.version` property.
//! Failure bodies are raw `go test -v` output, so failure locations are
//! recovered with a regex over that text.

use super::types::{Failure, Report, Summary};
use crate::junit::{JUnitReport, TestCase};
use crate::types::{Outcome, ReporterType};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    // gotestsum failure bodies look like either
    //   "=== RUN   Test\n    baz_test.go:1: error"
    //   "=== RUN   Test\n--- FAIL: Test (0.00s)\n"
    // Only the first shape names a location.
    static ref FAILURE_REGEX: Regex = Regex::new(r"\s*((\w+_test\.go):(\d+):.*)").unwrap();
    static ref GO_VERSION_REGEX: Regex = Regex::new(r"go([\d.]+) [\w/]+").unwrap();
}

const GO_VERSION_PROPERTY: &str = "go.version";

/// Normalize a gotestsum report for the module at `path`.
pub fn normalize(path: &str, junit: &JUnitReport) -> Result<Report, String> {
    let parser = GotestsumParser { path, junit };
    let summary = parser.summary().map_err(|e| format!("{}: {}", path, e))?;
    let failures = parser.failures();

    debug!("gotestsum {}: {:?}, {} located failures", path, summary.result, failures.len());

    Ok(Report { path: path.to_string(), kind: ReporterType::Gotestsum, summary, failures })
}

struct GotestsumParser<'a> {
    path: &'a str,
    junit: &'a JUnitReport,
}

impl GotestsumParser<'_> {
    fn summary(&self) -> Result<Summary, String> {
        let totals = self.junit.totals();
        let tests = parse_count(totals.and_then(|t| t.tests), "tests")?;
        let failed = parse_count(totals.and_then(|t| t.failures), "failures")?;
        let skipped = parse_count(totals.and_then(|t| t.skipped), "skipped")?;
        let passed = if tests == 0 { 0 } else { tests.saturating_sub(failed) };
        let time = match totals.and_then(|t| t.time) {
            Some(raw) => Some(raw.trim().parse::<f64>().map_err(|e| format!("invalid time {:?}: {}", raw, e))?),
            None => None,
        };

        Ok(Summary { result: self.result(), tests, passed, failed, skipped, time, version: self.version()? })
    }

    fn result(&self) -> Outcome {
        let Some(totals) = self.junit.totals() else {
            return Outcome::Unknown;
        };
        if totals.failures != Some("0") {
            return Outcome::Failed;
        }
        match totals.skipped {
            Some(skipped) if skipped != "0" => Outcome::Skipped,
            _ => Outcome::Passed,
        }
    }

    /// Go version shared by every suite.
    ///
    /// `None` only when there are no suites at all. A missing property,
    /// disagreeing suites, or an unrecognized value are format violations.
    fn version(&self) -> Result<Option<String>, String> {
        if self.junit.suites.is_empty() {
            return Ok(None);
        }

        let values: Vec<&str> =
            self.junit.suites.iter().flat_map(|suite| suite.property_values(GO_VERSION_PROPERTY)).collect();
        if values.is_empty() {
            return Err(format!("{} property not found", GO_VERSION_PROPERTY));
        }

        let distinct: BTreeSet<&str> = values.iter().copied().collect();
        if distinct.len() != 1 {
            return Err(format!(
                "multiple {} properties found: {}",
                GO_VERSION_PROPERTY,
                distinct.into_iter().collect::<Vec<_>>().join(", ")
            ));
        }

        let value = values[0];
        let caps = GO_VERSION_REGEX
            .captures(value)
            .ok_or_else(|| format!("{} does not match the expected format: {}", GO_VERSION_PROPERTY, value))?;
        Ok(caps.get(1).map(|m| m.as_str().to_string()))
    }

    fn failures(&self) -> Vec<Failure> {
        self.junit
            .suites
            .iter()
            .flat_map(|suite| suite.cases.iter())
            .filter(|case| case.is_failing())
            .filter_map(|case| self.locate_failure(case))
            .collect()
    }

    /// Cases whose output names no `_test.go:<line>:` location are dropped.
    fn locate_failure(&self, case: &TestCase) -> Option<Failure> {
        let text = case.failures.iter().map(|f| f.body.as_deref().unwrap_or_default()).collect::<Vec<_>>().join("\n");

        let Some(caps) = FAILURE_REGEX.captures(&text) else {
            debug!("{}: no location in failure output of {}", self.path, case.name);
            return None;
        };
        let file = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let line = caps.get(3).and_then(|m| m.as_str().parse::<u32>().ok()).unwrap_or(0);
        if file.is_empty() || line == 0 {
            return None;
        }

        Some(Failure {
            kind: ReporterType::Gotestsum,
            module_dir: self.path.to_string(),
            sub_dir: case.classname.clone(),
            file: file.to_string(),
            line,
            test: case.name.clone(),
            message: caps.get(1).map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
        })
    }
}

fn parse_count(raw: Option<&str>, field: &str) -> Result<u32, String> {
    match raw {
        None => Ok(0),
        Some(raw) => raw.trim().parse::<u32>().map_err(|e| format!("invalid {} count {:?}: {}", field, raw, e)),
    }
}

#[cfg(test)]
#[path = "gotestsum_test.rs"]
mod gotestsum_test;
