use super::Align;
use super::typed::{Record, Row, Table};
use crate::report::Failure;
use crate::types::GitHubContext;

/// Cells of one failure row
#[derive(Debug, Clone, PartialEq)]
pub struct FailureRecord {
    pub kind: String,
    pub test: String,
    pub message: String,
}

impl Record for FailureRecord {
    fn cells(&self) -> Vec<Option<String>> {
        vec![Some(self.kind.clone()), Some(self.test.clone()), Some(self.message.clone())]
    }
}

/// Failure listing, indexed by a link to the failing line
pub struct FailureTable {
    table: Table<FailureRecord>,
}

impl FailureTable {
    pub fn new(context: &GitHubContext, failures: &[Failure]) -> Self {
        let header = FailureRecord { kind: "Type".to_string(), test: "Case".to_string(), message: "Message".to_string() };
        let separator = FailureRecord { kind: Align::Left.into(), test: Align::Left.into(), message: Align::Left.into() };
        let records = failures
            .iter()
            .map(|failure| {
                Row::new(
                    failure.index(context),
                    FailureRecord {
                        kind: failure.kind.to_string(),
                        test: failure.test.clone(),
                        message: failure.flat_message(),
                    },
                )
            })
            .collect();

        Self { table: Table::new(Row::new("File", header), Row::new(Align::Left.as_str(), separator), records) }
    }

    /// Keep the first `limit` rows; past that, one trailing row counts what was cut.
    pub fn to_table(&self, limit: usize) -> Table<FailureRecord> {
        let total = self.table.rows();
        let mut limited: Vec<Row<FailureRecord>> = self.table.records().iter().take(limit).cloned().collect();
        if total > limit {
            limited.push(Row::new(
                "-",
                FailureRecord {
                    kind: "-".to_string(),
                    test: "-".to_string(),
                    message: format!(":warning: and {} more...", total - limit),
                },
            ));
        }
        Table::new(self.table.header().clone(), self.table.separator().clone(), limited)
    }
}
