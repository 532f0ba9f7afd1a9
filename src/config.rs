/// Configuration resolution module
///
/// This module handles:
/// - Reading the YAML group configuration (inline or from a file)
/// - Validating each group against the known reporter types
/// - Turning groups into `XmlFileGroup`s in declaration order
use crate::cli::CliArgs;
use crate::types::{ReporterType, XmlFileGroup};
use log::debug;
use serde::Deserialize;
use std::fs;

/// One entry of the config mapping, keyed by an arbitrary group name
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct GroupConfig {
    title: String,
    #[serde(rename = "type")]
    kind: ReporterType,
    directories: Vec<String>,
    file_name: String,
    /// Path to a related repository file (e.g. `.golangci.toml`); informational only
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    failure_limit: Option<usize>,
    #[serde(default)]
    annotation_limit: Option<usize>,
}

/// Resolve the report groups from `--config` or `--config-file`
pub fn load_groups(args: &CliArgs) -> Result<Vec<XmlFileGroup>, String> {
    let raw = match (&args.config, &args.config_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("Invalid config: failed to read {}: {}", path.display(), e))?,
        (None, None) => return Err("Invalid config: one of --config or --config-file is required".to_string()),
    };
    parse_config(&raw)
}

/// Parse the YAML mapping of group key to group settings.
///
/// Group order follows the document, and the first group anchors the summary.
/// An empty document yields no groups.
pub fn parse_config(raw: &str) -> Result<Vec<XmlFileGroup>, String> {
    let value: serde_yaml::Value = serde_yaml::from_str(raw).map_err(|e| format!("Invalid config: {}", e))?;

    let mapping = match value {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => return Err(format!("Invalid config: expected a mapping of groups, got {:?}", other)),
    };

    let mut groups = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = key.as_str().map(str::to_string).unwrap_or_else(|| format!("{:?}", key));
        let group: GroupConfig =
            serde_yaml::from_value(value).map_err(|e| format!("Invalid config: group {}: {}", key, e))?;

        if let Some(file) = &group.file {
            debug!("group {} refers to {}", key, file);
        }

        let mut xml_group = XmlFileGroup::new(group.title, group.kind, group.directories, group.file_name);
        xml_group.failure_limit = group.failure_limit;
        xml_group.annotation_limit = group.annotation_limit;
        debug!("group {}: {} over {} directories", key, xml_group.kind, xml_group.directories.len());
        groups.push(xml_group);
    }

    Ok(groups)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
