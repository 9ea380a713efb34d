use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Subset of the GitHub `/repos/{owner}/{repo}` API response used by the report.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    /// `owner/name` of the repository.
    pub full_name: String,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Repository description. GitHub sends `null` when none is set.
    #[serde(default)]
    pub description: Option<String>,
    /// Time of the last update to the repository.
    pub updated_at: DateTime<Utc>,
}

/// Splits a repository reference into its owner and repository name.
///
/// The reference is usually the `repository_url` of a search result
/// (e.g. `https://api.github.com/repos/owner/repo`); the owner is the
/// second-to-last path segment and the name is the last one.
///
/// # Returns
/// * `Ok((owner, repo))` when both segments are present and non-empty.
/// * `Err` for references with fewer than two usable segments.
pub fn parse_repository_ref(reference: &str) -> Result<(&str, &str)> {
    let mut segments = reference.rsplit('/');
    match (segments.next(), segments.next()) {
        (Some(repo), Some(owner)) if !owner.is_empty() && !repo.is_empty() => Ok((owner, repo)),
        _ => Err(anyhow!("Malformed repository reference: {reference}")),
    }
}
