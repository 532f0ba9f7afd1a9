//! Report normalization module.
//!
//! Turns raw JUnit trees from each supported producer into the shared
//! `Report` model.
//!
//! # Module Organization
//!
//! - `types` - Summary, Failure, Annotation and Report
//! - `gotestsum` - gotestsum normalizer
//! - `golangcilint` - golangci-lint normalizer
//! - `factory` - reads an XML file and picks the normalizer
//! - `export` - JSON export of an aggregated run

mod export;
mod factory;
mod golangcilint;
mod gotestsum;
mod types;

pub use export::export_json_report;
pub use factory::ReporterFactory;
pub use types::{Failure, Report, Summary};
