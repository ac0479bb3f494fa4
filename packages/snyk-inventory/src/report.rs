//! Classified project records and the per-organization report file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use snyk_client::{Organization, Project};

use crate::classify::{classify, ProductCategory};

/// Default report location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "project_data.json";

/// A project tagged with its product category and owning organization.
///
/// Field order is the key order of the written JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub project_name: String,
    pub snyk_product: Option<ProductCategory>,
    pub created: String,
    pub org_name: String,
    pub org_id: String,
    pub project_id: String,
    pub project_type: String,
    pub status: String,
    pub origin: String,
    /// Slug of the organization the project was listed under. Not written.
    #[serde(skip)]
    pub org_slug: String,
}

impl ProjectRecord {
    pub fn from_project(project: &Project, org: &Organization) -> Self {
        let attrs = &project.attributes;
        Self {
            project_name: attrs.name.clone(),
            snyk_product: classify(&attrs.project_type),
            created: attrs.created.clone(),
            org_name: org.name().to_string(),
            org_id: project.org_id().to_string(),
            project_id: project.id.clone(),
            project_type: attrs.project_type.clone(),
            status: attrs.status.clone(),
            origin: attrs.origin.clone(),
            org_slug: org.slug().to_string(),
        }
    }

    /// Whether the record belongs in the report: classified, and not an
    /// open source project.
    pub fn is_reported(&self) -> bool {
        matches!(self.snyk_product, Some(category) if category != ProductCategory::OpenSource)
    }
}

/// Reported records keyed by organization display name, in order of first
/// appearance. Organizations sharing a display name share a key.
pub type Report = IndexMap<String, Vec<ProjectRecord>>;

pub fn group_by_org(records: impl IntoIterator<Item = ProjectRecord>) -> Report {
    let mut report = Report::new();
    for record in records.into_iter().filter(ProjectRecord::is_reported) {
        report
            .entry(record.org_name.clone())
            .or_default()
            .push(record);
    }
    report
}

/// Render the report as JSON indented with four spaces.
pub fn to_json(report: &Report) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report
        .serialize(&mut ser)
        .context("Failed to serialize project report")?;
    Ok(buf)
}

/// Write the report to `path`, replacing any existing file.
///
/// The JSON is written to a temporary file beside `path` and renamed into
/// place, so a failed write leaves the previous report intact.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = to_json(report)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(&json)
        .context("Failed to write project report")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "Report written");
    Ok(())
}
