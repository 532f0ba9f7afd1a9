//! JSON export of an aggregated run.
//!
//! Mirrors what the Markdown comment shows so that other workflow steps can
//! consume the result without scraping Markdown.

use crate::markdown::RunContext;
use crate::table::{TableSet, UntypedRow};
use crate::types::Outcome;
use serde_json::{Value, json};
use std::fs::File;
use std::path::Path;

/// Cells stay positional: joined summaries repeat column names across groups.
fn row_json(row: &UntypedRow, header: &UntypedRow) -> Value {
    let cells: Vec<Value> = header
        .values
        .iter()
        .zip(&row.values)
        .map(|(column, value)| json!({ "column": column, "value": value }))
        .collect();
    json!({ "index": row.index, "cells": cells })
}

/// Build the JSON document for a run.
///
/// `tables` is `None` when no groups were configured.
pub fn json_report(run: &RunContext, tables: Option<&TableSet>, body: &str) -> Value {
    let result = tables.map(|t| t.result).unwrap_or(Outcome::Passed);

    let (modules, failures, annotations) = match tables {
        Some(t) => (
            t.summary.records().iter().map(|r| row_json(r, t.summary.header())).collect::<Vec<_>>(),
            t.failures
                .records()
                .iter()
                .map(|r| json!({ "file": r.index, "type": r.values.kind, "case": r.values.test, "message": r.values.message }))
                .collect::<Vec<_>>(),
            t.annotations.clone(),
        ),
        None => (Vec::new(), Vec::new(), Vec::new()),
    };

    json!({
        "generated_at": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "repository": format!("{}/{}", run.owner, run.repo),
        "sha": run.sha,
        "pull_request": run.pull_number,
        "run_id": run.run_id,
        "result": result,
        "modules": modules,
        "failures": failures,
        "annotations": annotations,
        "body": body,
    })
}

/// Write `json_report` pretty-printed to `output_path`
pub fn export_json_report(
    output_path: &Path,
    run: &RunContext,
    tables: Option<&TableSet>,
    body: &str,
) -> Result<(), String> {
    let file =
        File::create(output_path).map_err(|e| format!("Failed to create {}: {}", output_path.display(), e))?;
    serde_json::to_writer_pretty(file, &json_report(run, tables, body))
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))
}
