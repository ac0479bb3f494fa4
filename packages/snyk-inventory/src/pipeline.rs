use std::path::Path;

use anyhow::{Context, Result};
use snyk_client::SnykClient;
use tracing::info;

use crate::report::{group_by_org, write_report, ProjectRecord, Report};

/// Fetch every organization in the group, then every project in each
/// organization, one request at a time. Records come back in fetch order.
pub async fn collect_records(client: &SnykClient, group_id: &str) -> Result<Vec<ProjectRecord>> {
    let orgs = client
        .list_group_orgs(group_id)
        .await
        .with_context(|| format!("Failed to list organizations for group {}", group_id))?;
    info!(group_id, count = orgs.len(), "Fetched organizations");

    let mut records = Vec::new();
    for org in &orgs {
        let projects = client
            .list_org_projects(&org.id)
            .await
            .with_context(|| format!("Failed to list projects for organization {}", org.name()))?;
        info!(org = org.name(), count = projects.len(), "Fetched projects");

        records.extend(
            projects
                .iter()
                .map(|project| ProjectRecord::from_project(project, org)),
        );
    }

    Ok(records)
}

/// Build the report for a group and write it to `output`. Nothing is written
/// unless every fetch succeeds.
pub async fn run(client: &SnykClient, group_id: &str, output: &Path) -> Result<Report> {
    let records = collect_records(client, group_id).await?;
    let total = records.len();

    let report = group_by_org(records);
    let reported: usize = report.values().map(Vec::len).sum();
    info!(total, reported, orgs = report.len(), "Classified projects");

    write_report(&report, output)?;
    Ok(report)
}
