//! golangci-lint report normalizer.
//!
//! golangci-lint only writes suites for files with issues: one `<testsuite>`
//! per source file, one `<testcase>` per issue, and exactly one `<failure>`
//! per case. The case `classname` is `path/to/file.go:line:column`.

use super::types::{Failure, Report, Summary};
use crate::junit::{JUnitReport, TestCase};
use crate::types::{Outcome, ReporterType};
use log::debug;

/// Normalize a golangci-lint report for the module at `path`.
pub fn normalize(path: &str, junit: &JUnitReport) -> Result<Report, String> {
    // No suites means no issues: the producer omits them entirely when clean
    let result = if junit.suites.is_empty() { Outcome::Passed } else { Outcome::Failed };

    let mut tests = 0u32;
    let mut failed = 0u32;
    let mut skipped = 0u32;
    for suite in &junit.suites {
        tests += parse_count(suite.tests.as_deref(), "tests", path)?;
        failed += parse_count(suite.failures.as_deref(), "failures", path)?;
        skipped += parse_count(suite.skipped.as_deref(), "skipped", path)?;
    }

    let failures = junit
        .suites
        .iter()
        .flat_map(|suite| suite.cases.iter())
        .map(|case| to_failure(path, case))
        .collect::<Result<Vec<_>, String>>()?;

    debug!("golangci-lint {}: {:?}, {} issues", path, result, failures.len());

    Ok(Report {
        path: path.to_string(),
        kind: ReporterType::GolangCILint,
        summary: Summary {
            result,
            tests,
            // golangci-lint has no notion of passed checks, so this is expected to be 0
            passed: tests.saturating_sub(failed),
            failed,
            skipped,
            time: None,
            version: None,
        },
        failures,
    })
}

fn to_failure(path: &str, case: &TestCase) -> Result<Failure, String> {
    let failure = match case.failures.as_slice() {
        [only] => only,
        [] => return Err(format!("{}: golangci-lint test case {} has no failure", path, case.classname)),
        _ => return Err(format!("{}: golangci-lint test case {} has multiple failures", path, case.classname)),
    };

    // "go/app/bar.go:56:78: Error: Foo: Bar" -> "Error: Foo: Bar"
    let message = failure.message.split_once(": ").map(|(_, rest)| rest.trim()).unwrap_or_default();

    // "path/to/file.go:line:column" -> ("path/to", "file.go", line)
    let mut parts = case.classname.split(':');
    let full_path = parts.next().unwrap_or_default();
    let raw_line = parts.next().unwrap_or_default();
    let line = raw_line
        .parse::<u32>()
        .ok()
        .filter(|line| *line > 0)
        .ok_or_else(|| format!("{}: invalid line {:?} in golangci-lint classname {}", path, raw_line, case.classname))?;
    let (sub_dir, file) = split_dir_file(full_path);

    Ok(Failure {
        kind: ReporterType::GolangCILint,
        module_dir: path.to_string(),
        sub_dir: sub_dir.to_string(),
        file: file.to_string(),
        line,
        test: case.name.clone(),
        message: message.to_string(),
    })
}

/// POSIX-style dirname/basename
fn split_dir_file(full_path: &str) -> (&str, &str) {
    match full_path.rsplit_once('/') {
        Some(("", file)) => ("/", file),
        Some((dir, file)) => (dir, file),
        None => (".", full_path),
    }
}

fn parse_count(raw: Option<&str>, field: &str, path: &str) -> Result<u32, String> {
    match raw {
        None => Ok(0),
        Some(raw) => {
            raw.trim().parse::<u32>().map_err(|e| format!("{}: invalid suite {} count {:?}: {}", path, field, raw, e))
        }
    }
}
