//! Table with named, statically-known columns.

use super::untyped::{UntypedRow, UntypedTable, render_row};
use std::fmt;

/// A row value with a fixed, ordered set of named columns.
///
/// `cells` must always return the same number of values for a given type.
pub trait Record: Clone {
    fn cells(&self) -> Vec<Option<String>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub index: String,
    pub values: T,
}

impl<T> Row<T> {
    pub fn new(index: impl Into<String>, values: T) -> Self {
        Self { index: index.into(), values }
    }
}

impl<T: Record> Row<T> {
    fn to_untyped(&self) -> UntypedRow {
        UntypedRow::new(self.index.as_str(), self.values.cells())
    }
}

/// Header, alignment separator, and records sharing one record type
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T: Record> {
    header: Row<T>,
    separator: Row<T>,
    records: Vec<Row<T>>,
}

impl<T: Record> Table<T> {
    pub fn new(header: Row<T>, separator: Row<T>, records: Vec<Row<T>>) -> Self {
        Self { header, separator, records }
    }

    pub fn header(&self) -> &Row<T> {
        &self.header
    }

    pub fn separator(&self) -> &Row<T> {
        &self.separator
    }

    pub fn records(&self) -> &[Row<T>] {
        &self.records
    }

    pub fn rows(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn columns(&self) -> usize {
        self.header.values.cells().len()
    }

    /// Stack the records of `others` under this table's records.
    ///
    /// The header and separator of `self` are kept as-is.
    pub fn concat(&self, others: &[&Table<T>]) -> Table<T> {
        let records = self.records.iter().chain(others.iter().flat_map(|o| o.records.iter())).cloned().collect();
        Table { header: self.header.clone(), separator: self.separator.clone(), records }
    }

    /// Flatten named columns to positions, in declared column order.
    pub fn to_untyped(&self) -> Result<UntypedTable, String> {
        UntypedTable::new(
            self.header.to_untyped(),
            self.separator.to_untyped(),
            self.records.iter().map(Row::to_untyped).collect(),
        )
    }
}

impl<T: Record> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return Ok(());
        }

        let mut lines = vec![
            render_row(&self.header.index, &self.header.values.cells()),
            render_row(&self.separator.index, &self.separator.values.cells()),
        ];
        lines.extend(self.records.iter().map(|r| render_row(&r.index, &r.values.cells())));
        f.write_str(&lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        left: String,
        right: Option<String>,
    }

    impl Record for Pair {
        fn cells(&self) -> Vec<Option<String>> {
            vec![Some(self.left.clone()), self.right.clone()]
        }
    }

    fn pair(left: &str, right: Option<&str>) -> Pair {
        Pair { left: left.to_string(), right: right.map(str::to_string) }
    }

    fn table(records: &[(&str, &str, Option<&str>)]) -> Table<Pair> {
        Table::new(
            Row::new("Index", pair("Left", Some("Right"))),
            Row::new(":---", pair(":---", Some("---:"))),
            records.iter().map(|(i, l, r)| Row::new(*i, pair(l, *r))).collect(),
        )
    }

    #[test]
    fn test_shape() {
        let t = table(&[("a", "1", Some("2")), ("b", "3", None)]);
        assert_eq!(t.rows(), 2);
        assert_eq!(t.columns(), 2);
    }

    #[test]
    fn test_concat_preserves_order_and_header() {
        let first = table(&[("a", "1", None)]);
        let second = table(&[("b", "2", None), ("c", "3", None)]);
        let third = table(&[]);

        let joined = first.concat(&[&second, &third]);
        assert_eq!(joined.rows(), 3);
        assert_eq!(joined.header(), first.header());
        let indexes: Vec<&str> = joined.records().iter().map(|r| r.index.as_str()).collect();
        assert_eq!(indexes, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_to_untyped_keeps_column_order() {
        let untyped = table(&[("a", "1", None)]).to_untyped().unwrap();
        assert_eq!(untyped.header().values, vec![Some("Left".to_string()), Some("Right".to_string())]);
        assert_eq!(untyped.records()[0].values, vec![Some("1".to_string()), None]);
    }

    #[test]
    fn test_render() {
        let t = table(&[("a", "1", None), ("b", "2", Some("x"))]);
        assert_eq!(t.to_string(), "| Index | Left | Right |\n| :--- | :--- | ---: |\n| a | 1 | - |\n| b | 2 | x |");
        assert_eq!(table(&[]).to_string(), "");
    }
}
