use super::Align;
use super::typed::{Record, Row, Table};
use crate::report::{Report, Summary};
use crate::types::GitHubContext;

/// Summary cells of one gotestsum module
#[derive(Debug, Clone, PartialEq)]
pub struct GotestsumSummaryRecord {
    pub version: Option<String>,
    pub result: String,
    pub passed: String,
    pub failed: String,
    pub time: Option<String>,
}

impl GotestsumSummaryRecord {
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            version: summary.version.clone(),
            result: summary.result.display(),
            passed: summary.passed.to_string(),
            failed: summary.failed.to_string(),
            time: summary.time.map(|_| summary.time_display()),
        }
    }
}

impl Record for GotestsumSummaryRecord {
    fn cells(&self) -> Vec<Option<String>> {
        vec![
            self.version.clone(),
            Some(self.result.clone()),
            Some(self.passed.clone()),
            Some(self.failed.clone()),
            self.time.clone(),
        ]
    }
}

/// Module summary table for gotestsum reports; `title` heads the result column
pub struct GotestsumTable {
    table: Table<GotestsumSummaryRecord>,
}

impl GotestsumTable {
    pub fn new(context: &GitHubContext, title: &str, reports: &[Report]) -> Self {
        let header = GotestsumSummaryRecord {
            version: Some("Version".to_string()),
            result: title.to_string(),
            passed: "Passed".to_string(),
            failed: "Failed".to_string(),
            time: Some("Time".to_string()),
        };
        let separator = GotestsumSummaryRecord {
            version: Some(Align::Right.into()),
            result: Align::Left.into(),
            passed: Align::Right.into(),
            failed: Align::Right.into(),
            time: Some(Align::Right.into()),
        };
        let records = reports
            .iter()
            .map(|report| Row::new(report.index(context), GotestsumSummaryRecord::from_summary(&report.summary)))
            .collect();

        Self { table: Table::new(Row::new("Module", header), Row::new(Align::Left.as_str(), separator), records) }
    }

    pub fn to_table(self) -> Table<GotestsumSummaryRecord> {
        self.table
    }
}
