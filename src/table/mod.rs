//! Table module - tabular rendering of aggregated reports.
//!
//! # Module Organization
//!
//! - `typed` - `Table<T>` with named columns, concatenation
//! - `untyped` - positional `UntypedTable`, left outer join
//! - `gotestsum` / `golangcilint` / `failure` - per-report table composers
//! - `result` - folds module outcomes into one
//! - `annotation` - GitHub Actions annotation lines
//! - `factory` - builds the table set for one or more report groups

mod annotation;
mod factory;
pub(crate) mod failure;
mod golangcilint;
mod gotestsum;
mod result;
pub(crate) mod typed;
pub(crate) mod untyped;

pub use factory::{TableSet, TableSetFactory};
pub use untyped::UntypedRow;

/// Column alignment, rendered as a Markdown separator cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => ":---",
            Align::Right => "---:",
            Align::Center => ":---:",
        }
    }
}

impl From<Align> for String {
    fn from(align: Align) -> Self {
        align.as_str().to_string()
    }
}
