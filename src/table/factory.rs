//! Table set factory - aggregates report groups into the tables of one comment.
//!
//! A group is one report type over a list of module directories. Within a
//! group every directory is read in parallel; across groups the summaries are
//! joined on module, anchored on the first group.

use super::annotation::to_annotations;
use super::failure::{FailureRecord, FailureTable};
use super::golangcilint::GolangCILintTable;
use super::gotestsum::GotestsumTable;
use super::result::to_result;
use super::typed::Table;
use super::untyped::UntypedTable;
use crate::junit::ReportSource;
use crate::report::{Failure, Report, ReporterFactory};
use crate::types::{GitHubContext, Outcome, ReporterType, XmlFileGroup};
use log::{debug, info};
use rayon::prelude::*;

/// Failure rows shown per group before the overflow row
pub const DEFAULT_FAILURE_LIMIT: usize = 10;

/// Aggregated view of one or more report groups
#[derive(Debug, Clone)]
pub struct TableSet {
    pub result: Outcome,
    pub summary: UntypedTable,
    pub failures: Table<FailureRecord>,
    pub annotations: Vec<String>,
}

pub struct TableSetFactory<S: ReportSource> {
    factory: ReporterFactory<S>,
}

impl<S: ReportSource> TableSetFactory<S> {
    pub fn new(factory: ReporterFactory<S>) -> Self {
        Self { factory }
    }

    /// Aggregate one group.
    ///
    /// Directories are read concurrently; the first error aborts the group.
    /// Duplicate directories are not collapsed.
    pub fn single(&self, context: &GitHubContext, group: &XmlFileGroup) -> Result<TableSet, String> {
        debug!("reading {} {} report(s) for {}", group.directories.len(), group.kind, group.title);

        let reports = group
            .directories
            .par_iter()
            .map(|directory| self.factory.from_xml(group.kind, directory, &group.file_name))
            .collect::<Result<Vec<Report>, String>>()
            .map_err(|e| format!("{} ({}): {}", group.title, group.kind, e))?;

        let failures: Vec<Failure> = reports.iter().flat_map(|r| r.failures.iter().cloned()).collect();
        let limit = group.failure_limit.unwrap_or(DEFAULT_FAILURE_LIMIT);

        let mut annotations = to_annotations(&failures);
        if let Some(max) = group.annotation_limit
            && annotations.len() > max
        {
            debug!("{}: dropping {} annotation(s) over the limit of {}", group.title, annotations.len() - max, max);
            annotations.truncate(max);
        }

        let result = to_result(reports.iter().map(Report::result));
        info!("{}: {} module(s), {} failure(s), {}", group.title, reports.len(), failures.len(), result.as_str());

        Ok(TableSet {
            result,
            summary: create_summary_table(context, group.kind, &group.title, &reports)?,
            failures: FailureTable::new(context, &failures).to_table(limit),
            annotations,
        })
    }

    /// Aggregate several groups into one table set.
    ///
    /// Returns `None` when there are no groups. The first group anchors the
    /// summary's module rows; modules only present in later groups are not shown.
    pub fn multi(&self, context: &GitHubContext, groups: &[XmlFileGroup]) -> Result<Option<TableSet>, String> {
        let sets =
            groups.par_iter().map(|group| self.single(context, group)).collect::<Result<Vec<TableSet>, String>>()?;

        let Some((main, others)) = sets.split_first() else {
            return Ok(None);
        };

        let other_summaries: Vec<&UntypedTable> = others.iter().map(|s| &s.summary).collect();
        let other_failures: Vec<&Table<FailureRecord>> = others.iter().map(|s| &s.failures).collect();

        Ok(Some(TableSet {
            result: to_result(sets.iter().map(|s| s.result)),
            summary: main.summary.join(&other_summaries)?,
            failures: main.failures.concat(&other_failures),
            annotations: sets.iter().flat_map(|s| s.annotations.iter().cloned()).collect(),
        }))
    }
}

fn create_summary_table(
    context: &GitHubContext,
    kind: ReporterType,
    title: &str,
    reports: &[Report],
) -> Result<UntypedTable, String> {
    match kind {
        ReporterType::Gotestsum => GotestsumTable::new(context, title, reports).to_table().to_untyped(),
        ReporterType::GolangCILint => GolangCILintTable::new(context, title, reports).to_table().to_untyped(),
    }
}

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;
