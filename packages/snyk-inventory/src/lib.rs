//! Snyk project inventory.
//!
//! Lists every project in every organization of a Snyk group, classifies each
//! by the Snyk product that scans it, and writes the non-open-source projects
//! to a JSON report grouped by organization name.

pub mod classify;
pub mod config;
pub mod pipeline;
pub mod report;

pub use classify::{classify, ProductCategory};
pub use config::Cli;
pub use pipeline::{collect_records, run};
pub use report::{group_by_org, write_report, ProjectRecord, Report, DEFAULT_OUTPUT};
