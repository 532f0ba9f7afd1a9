use super::Align;
use super::typed::{Record, Row, Table};
use crate::report::Report;
use crate::types::GitHubContext;

/// Summary cells of one golangci-lint module
#[derive(Debug, Clone, PartialEq)]
pub struct GolangCILintSummaryRecord {
    pub result: String,
}

impl Record for GolangCILintSummaryRecord {
    fn cells(&self) -> Vec<Option<String>> {
        vec![Some(self.result.clone())]
    }
}

/// Module summary table for golangci-lint reports: a single result column headed by `title`
pub struct GolangCILintTable {
    table: Table<GolangCILintSummaryRecord>,
}

impl GolangCILintTable {
    pub fn new(context: &GitHubContext, title: &str, reports: &[Report]) -> Self {
        let records = reports
            .iter()
            .map(|report| {
                Row::new(report.index(context), GolangCILintSummaryRecord { result: report.result().display() })
            })
            .collect();

        Self {
            table: Table::new(
                Row::new("Module", GolangCILintSummaryRecord { result: title.to_string() }),
                Row::new(Align::Left.as_str(), GolangCILintSummaryRecord { result: Align::Left.into() }),
                records,
            ),
        }
    }

    pub fn to_table(self) -> Table<GolangCILintSummaryRecord> {
        self.table
    }
}
