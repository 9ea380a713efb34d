use crate::github::client::GitHubApi;
use crate::github::issues::Issue;
use crate::github::repository::{Repository, parse_repository_ref};
use crate::humanize;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Number of matching issues per repository reference.
pub type RepositoryCounts = BTreeMap<String, usize>;

/// A repository as shown in the rendered report.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// `owner/name` of the repository.
    pub name: String,
    pub url: String,
    /// Empty when the repository has no description.
    pub description: String,
    pub issue_count: usize,
    /// Humanized age of the last update, e.g. "3 days ago".
    pub last_updated: String,
    pub updated_at: DateTime<Utc>,
}

impl ReportEntry {
    pub fn new(repository: Repository, issue_count: usize, now: DateTime<Utc>) -> Self {
        ReportEntry {
            last_updated: humanize::relative_time(repository.updated_at, now),
            name: repository.full_name,
            url: repository.html_url,
            description: repository.description.unwrap_or_default(),
            issue_count,
            updated_at: repository.updated_at,
        }
    }
}

/// Counts the issues belonging to each repository reference.
pub fn count_by_repository(issues: &[Issue]) -> RepositoryCounts {
    let mut counts = RepositoryCounts::new();
    for issue in issues {
        *counts.entry(issue.repository_url.clone()).or_insert(0) += 1;
    }
    counts
}

/// Fetches the metadata of every counted repository and turns it into report entries.
///
/// Entries keep the order of `counts`. The first failed lookup aborts enrichment.
pub async fn enrich<A: GitHubApi>(
    api: &A,
    counts: &RepositoryCounts,
    now: DateTime<Utc>,
) -> Result<Vec<ReportEntry>> {
    let mut entries = Vec::with_capacity(counts.len());
    for (reference, &count) in counts {
        let (owner, repo) = parse_repository_ref(reference)?;
        info!("Fetching repo info for {}/{}...", owner, repo);
        let repository = api.get_repository(owner, repo).await?;
        entries.push(ReportEntry::new(repository, count, now));
    }
    Ok(entries)
}

/// Orders entries by last update, most recent first. Ties keep their relative order.
pub fn sort_by_last_updated(entries: &mut [ReportEntry]) {
    entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

/// Keeps only the entries updated strictly after `cutoff`.
pub fn retain_active(entries: Vec<ReportEntry>, cutoff: DateTime<Utc>) -> Vec<ReportEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.updated_at > cutoff)
        .collect()
}
