use crate::github::{builder::list_repos_builder::ListReposBuilder, github_client::GithubClient};

pub struct UserHandler<'a> {
    client: &'a GithubClient,
    login: String,
}

impl<'a> UserHandler<'a> {
    pub fn new(client: &'a GithubClient, login: impl Into<String>) -> Self {
        UserHandler {
            client,
            login: login.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn repos(&self) -> ListReposBuilder<'a> {
        ListReposBuilder::new(self.client, &self.login)
    }
}
