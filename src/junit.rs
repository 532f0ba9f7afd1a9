/// JUnit XML reading module
///
/// This module deserializes the JUnit XML emitted by gotestsum and
/// golangci-lint into a raw report tree. Interpretation of the tree
/// (pass/fail, failure locations) lives in the `report` module.
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Root `<testsuites>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JUnitReport {
    #[serde(rename = "@tests")]
    pub tests: Option<String>,
    #[serde(rename = "@failures")]
    pub failures: Option<String>,
    #[serde(rename = "@errors")]
    pub errors: Option<String>,
    #[serde(rename = "@skipped")]
    pub skipped: Option<String>,
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(rename = "testsuite", default)]
    pub suites: Vec<TestSuite>,
}

/// Root totals, present only when the root element carries at least one attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals<'a> {
    pub tests: Option<&'a str>,
    pub failures: Option<&'a str>,
    pub errors: Option<&'a str>,
    pub skipped: Option<&'a str>,
    pub time: Option<&'a str>,
}

impl JUnitReport {
    pub fn totals(&self) -> Option<Totals<'_>> {
        let totals = Totals {
            tests: self.tests.as_deref(),
            failures: self.failures.as_deref(),
            errors: self.errors.as_deref(),
            skipped: self.skipped.as_deref(),
            time: self.time.as_deref(),
        };
        let any = totals.tests.is_some()
            || totals.failures.is_some()
            || totals.errors.is_some()
            || totals.skipped.is_some()
            || totals.time.is_some();
        if any { Some(totals) } else { None }
    }
}

/// A `<testsuite>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestSuite {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@tests")]
    pub tests: Option<String>,
    #[serde(rename = "@errors")]
    pub errors: Option<String>,
    #[serde(rename = "@failures")]
    pub failures: Option<String>,
    #[serde(rename = "@skipped")]
    pub skipped: Option<String>,
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(rename = "@timestamp")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub properties: Vec<Properties>,
    #[serde(rename = "testcase", default)]
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// All `<property>` entries across every `<properties>` block
    pub fn property_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.properties
            .iter()
            .flat_map(|props| props.property.iter())
            .filter(move |p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub property: Vec<Property>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Property {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

/// A `<testcase>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestCase {
    #[serde(rename = "@classname", default)]
    pub classname: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@file")]
    pub file: Option<String>,
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(rename = "failure", default)]
    pub failures: Vec<FailureMessage>,
}

impl TestCase {
    pub fn is_failing(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// A `<failure>` element: attributes plus the raw output body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FailureMessage {
    #[serde(rename = "@message", default)]
    pub message: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "$text")]
    pub body: Option<String>,
}

/// Parse JUnit XML text into a report tree.
///
/// An empty root element yields a report with no totals and no suites.
pub fn parse_junit_xml(content: &str) -> Result<JUnitReport, String> {
    quick_xml::de::from_str::<JUnitReport>(content).map_err(|e| format!("Invalid JUnit XML: {}", e))
}

/// Source of raw report trees, keyed by module directory and file name
pub trait ReportSource: Sync {
    fn safe_parse(&self, directory: &str, file_name: &str) -> Result<JUnitReport, String>;
}

/// Reads JUnit XML reports from the filesystem
#[derive(Debug, Clone, Default)]
pub struct JUnitXmlReader;

impl JUnitXmlReader {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSource for JUnitXmlReader {
    fn safe_parse(&self, directory: &str, file_name: &str) -> Result<JUnitReport, String> {
        let path = Path::new(directory).join(file_name);
        debug!("reading JUnit report {}", path.display());

        let content =
            std::fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        parse_junit_xml(&content).map_err(|e| format!("{}: {}", path.display(), e))
    }
}
