//! Positional table used once tables with different column sets must be combined.

use std::collections::HashMap;
use std::fmt;

/// A row whose cells are addressed by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntypedRow {
    pub index: String,
    pub values: Vec<Option<String>>,
}

impl UntypedRow {
    pub fn new(index: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self { index: index.into(), values }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntypedTable {
    header: UntypedRow,
    separator: UntypedRow,
    records: Vec<UntypedRow>,
}

impl UntypedTable {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(header: UntypedRow, separator: UntypedRow, records: Vec<UntypedRow>) -> Result<Self, String> {
        if header.values.len() != separator.values.len() {
            return Err(format!(
                "header and separator must have the same length: {} != {}",
                header.values.len(),
                separator.values.len()
            ));
        }
        if let Some(bad) = records.iter().find(|r| r.values.len() != header.values.len()) {
            return Err(format!(
                "records must have the same length as header: row {} has {} values, header has {}",
                bad.index,
                bad.values.len(),
                header.values.len()
            ));
        }
        Ok(Self { header, separator, records })
    }

    pub fn header(&self) -> &UntypedRow {
        &self.header
    }

    #[cfg(test)]
    pub fn separator(&self) -> &UntypedRow {
        &self.separator
    }

    pub fn records(&self) -> &[UntypedRow] {
        &self.records
    }

    pub fn rows(&self) -> usize {
        self.records.len()
    }

    pub fn columns(&self) -> usize {
        self.header.values.len()
    }

    /// Left outer join on row index.
    ///
    /// The row set is always exactly this table's; each `other` contributes its
    /// columns in order, padded with `None` where it has no row for an index.
    /// Rows that only exist in an `other` are dropped.
    pub fn join(&self, others: &[&UntypedTable]) -> Result<UntypedTable, String> {
        let header = UntypedRow {
            index: self.header.index.clone(),
            values: self.header.values.iter().chain(others.iter().flat_map(|o| o.header.values.iter())).cloned().collect(),
        };
        let separator = UntypedRow {
            index: self.separator.index.clone(),
            values: self
                .separator
                .values
                .iter()
                .chain(others.iter().flat_map(|o| o.separator.values.iter()))
                .cloned()
                .collect(),
        };

        let lookups: Vec<HashMap<&str, &UntypedRow>> =
            others.iter().map(|o| o.records.iter().map(|r| (r.index.as_str(), r)).collect()).collect();

        let merged = self
            .records
            .iter()
            .map(|record| {
                let mut values = record.values.clone();
                for (other, lookup) in others.iter().zip(&lookups) {
                    match lookup.get(record.index.as_str()) {
                        Some(matched) => values.extend(matched.values.iter().cloned()),
                        None => values.extend(std::iter::repeat_n(None, other.columns())),
                    }
                }
                UntypedRow::new(record.index.as_str(), values)
            })
            .collect();

        UntypedTable::new(header, separator, merged)
    }
}

/// Renders one Markdown pipe row; missing and empty cells become `-`.
pub(crate) fn render_row(index: &str, values: &[Option<String>]) -> String {
    let cells: Vec<&str> = values.iter().map(|v| v.as_deref().filter(|c| !c.is_empty()).unwrap_or("-")).collect();
    format!("| {} | {} |", index, cells.join(" | "))
}

impl fmt::Display for UntypedTable {
    /// Markdown pipe table, or nothing at all when there are no records
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return Ok(());
        }

        let mut lines = vec![
            render_row(&self.header.index, &self.header.values),
            render_row(&self.separator.index, &self.separator.values),
        ];
        lines.extend(self.records.iter().map(|r| render_row(&r.index, &r.values)));
        f.write_str(&lines.join("\n"))
    }
}
