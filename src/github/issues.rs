use crate::github::client::GitHubApi;
use anyhow::Result;
use serde::Deserialize;
use tracing::info;

/// An issue returned by the GitHub issue search.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// API URL of the repository the issue belongs to.
    pub repository_url: String,
}

/// Body of the GitHub `/search/issues` API response.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<Issue>,
}

/// One page of search results together with the pagination details of the response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    /// Number of matches reported for the whole query.
    pub total_count: u64,
    pub issues: Vec<Issue>,
    /// Page announced as `rel="next"` by the response, if any.
    pub next_page: Option<u32>,
}

/// Number of pages needed to hold `total_count` results at `per_page` results per page.
pub fn total_pages(total_count: u64, per_page: u32) -> u64 {
    total_count.div_ceil(u64::from(per_page.max(1)))
}

/// Collects every issue matching `query`, following the next-page links of each response.
///
/// Starts at page 1 and stops once a response no longer announces a following page.
/// Any failed request aborts the search; no partial result is returned.
pub async fn search_all_issues<A: GitHubApi>(
    api: &A,
    query: &str,
    per_page: u32,
) -> Result<Vec<Issue>> {
    let mut all_issues = Vec::new();
    let mut page = 1;

    loop {
        let result = api.search_issues(query, page, per_page).await?;
        info!(
            "Searching page {}/{}...",
            page,
            total_pages(result.total_count, per_page)
        );

        all_issues.extend(result.issues);
        match result.next_page {
            // a next page that does not move forward would loop forever
            Some(next) if next > page => page = next,
            _ => break,
        }
    }

    Ok(all_issues)
}
