//! In-memory GitHub stand-in for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};

use super::client::GitHubApi;
use super::issues::{Issue, SearchPage};
use super::repository::Repository;

pub fn issue(number: u64, repository_url: &str) -> Issue {
    Issue {
        number,
        title: format!("Issue {number}"),
        repository_url: repository_url.to_string(),
    }
}

pub fn repository(full_name: &str, updated_at: &str) -> Repository {
    Repository {
        full_name: full_name.to_string(),
        html_url: format!("https://github.com/{full_name}"),
        description: Some(format!("Description of {full_name}")),
        updated_at: updated_at
            .parse::<DateTime<Utc>>()
            .unwrap_or_else(|e| panic!("invalid timestamp {updated_at}: {e}")),
    }
}

/// Serves canned search pages and repositories, recording every request it receives.
#[derive(Default)]
pub struct FakeGitHub {
    pages: BTreeMap<u32, Result<SearchPage, String>>,
    repositories: HashMap<String, Result<Repository, String>>,
    search_calls: RefCell<Vec<u32>>,
    repository_calls: RefCell<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next search page.
    pub fn with_page(
        mut self,
        total_count: u64,
        issues: Vec<Issue>,
        next_page: Option<u32>,
    ) -> Self {
        let page = self.pages.len() as u32 + 1;
        self.pages.insert(
            page,
            Ok(SearchPage {
                total_count,
                issues,
                next_page,
            }),
        );
        self
    }

    pub fn with_search_failure(mut self, page: u32, message: &str) -> Self {
        self.pages.insert(page, Err(message.to_string()));
        self
    }

    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repositories
            .insert(repository.full_name.clone(), Ok(repository));
        self
    }

    pub fn with_repository_failure(mut self, full_name: &str, message: &str) -> Self {
        self.repositories
            .insert(full_name.to_string(), Err(message.to_string()));
        self
    }

    pub fn search_calls(&self) -> Vec<u32> {
        self.search_calls.borrow().clone()
    }

    pub fn repository_calls(&self) -> Vec<String> {
        self.repository_calls.borrow().clone()
    }
}

impl GitHubApi for FakeGitHub {
    async fn search_issues(&self, _query: &str, page: u32, _per_page: u32) -> Result<SearchPage> {
        self.search_calls.borrow_mut().push(page);
        match self.pages.get(&page) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("Search failed: 422 Unprocessable Entity")),
        }
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let full_name = format!("{owner}/{repo}");
        self.repository_calls.borrow_mut().push(full_name.clone());
        match self.repositories.get(&full_name) {
            Some(Ok(repository)) => Ok(repository.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("Repo lookup failed: 404 Not Found")),
        }
    }
}
