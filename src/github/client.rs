use crate::github::issues::{SearchPage, SearchResponse};
use crate::github::repository::Repository;
use anyhow::{Context, Result, anyhow};
use reqwest::{StatusCode, header};

/// GitHub API endpoints
pub mod endpoints {
    pub const API_BASE: &str = "https://api.github.com";
    pub const SEARCH_ISSUES: &str = "/search/issues";
    pub const REPOS: &str = "/repos";
}

const USER_AGENT: &str = "hacktoberlist";
const ACCEPT: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Read-only access to the GitHub endpoints the report is built from
#[allow(async_fn_in_trait)]
pub trait GitHubApi {
    /// Fetch one page of issues matching `query`, most recently updated first
    async fn search_issues(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage>;
    /// Fetch the metadata of `owner/repo`
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository>;
}

/// `GitHubApi` implementation talking to the GitHub REST API over HTTP
pub struct HttpGitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpGitHubClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// An empty `token` results in unauthenticated requests.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(HttpGitHubClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT);
        if self.token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.token)
        }
    }
}

impl GitHubApi for HttpGitHubClient {
    async fn search_issues(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        let response = self
            .get(endpoints::SEARCH_ISSUES)
            .query(&[("q", query), ("sort", "updated")])
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .context("Could not execute search")?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!("Search failed: {}", response.status()));
        }

        let next_page = response
            .headers()
            .get(header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_next_page);
        let body = response
            .json::<SearchResponse>()
            .await
            .context("Could not execute search")?;

        Ok(SearchPage {
            total_count: body.total_count,
            issues: body.items,
            next_page,
        })
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let response = self
            .get(&format!("{}/{}/{}", endpoints::REPOS, owner, repo))
            .send()
            .await
            .context("Could not get repo")?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!("Repo lookup failed: {}", response.status()));
        }

        response
            .json::<Repository>()
            .await
            .context("Could not get repo")
    }
}

/// Extracts the page number of the `rel="next"` target from a `Link` header.
///
/// # Returns
/// * `Some(page)` if the header links a next page carrying a `page` query parameter.
/// * `None` otherwise, which marks the last page.
pub fn parse_next_page(link: &str) -> Option<u32> {
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        if !params.split(';').any(|param| param.trim() == r#"rel="next""#) {
            return None;
        }
        let url = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        let url = reqwest::Url::parse(url).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}
