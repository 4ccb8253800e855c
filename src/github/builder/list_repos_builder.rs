use super::BuilderExecutor;
use crate::{
    github::{
        github_client::GithubClient,
        query::{Direction, RepoType, Sort},
    },
    http::{ApiResponse, DEFAULT_TIMEOUT},
};
use anyhow::Result;
use std::time::Duration;

const DEFAULT_PER_PAGE: u32 = 30;
const DEFAULT_PAGE: u32 = 1;

/// Query against `/users/{login}/repos`.
pub struct ListReposBuilder<'a> {
    client: &'a GithubClient,
    pub login: String,
    pub repo_type: RepoType,
    pub sort: Sort,
    pub direction: Direction,
    pub per_page: u32,
    pub page: u32,
    pub timeout: Duration,
}

impl<'a> ListReposBuilder<'a> {
    pub fn new(client: &'a GithubClient, login: impl Into<String>) -> Self {
        ListReposBuilder {
            client,
            login: login.into(),
            repo_type: RepoType::default(),
            sort: Sort::default(),
            direction: Direction::default(),
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn repo_type(mut self, repo_type: impl Into<RepoType>) -> Self {
        self.repo_type = repo_type.into();
        self
    }

    pub fn sort(mut self, sort: impl Into<Sort>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn direction(mut self, direction: impl Into<Direction>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Passed through as is; the API caps it at 100.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type", self.repo_type.to_string()),
            ("sort", self.sort.to_string()),
            ("direction", self.direction.to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

impl BuilderExecutor for ListReposBuilder<'_> {
    type Output = ApiResponse;

    async fn execute(self) -> Result<ApiResponse> {
        let query = self.query();
        self.client
            .list_user_repos(&self.login, &query, self.timeout)
            .await
    }
}
