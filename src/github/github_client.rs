use crate::{
    config::{Config, Users},
    http::{ApiResponse, HeaderMap, HttpClient},
};
use anyhow::{anyhow, Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;

const GITHUB_SERVICE_NAME: &str = "github";
const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";
const APPLICATION_JSON: &str = "application/json";
const USER_AGENT_VALUE: &str = "repocheck";

pub struct GithubClient {
    http: HttpClient,
    base_url: String,
    users: Option<Users>,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            users: None,
        }
    }

    /// Builds a client against `urls.json["github"]` that resolves roles
    /// through `users.json`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let urls = config.urls().await.context("Cannot load urls config")?;
        let users = config.users().await.context("Cannot load users config")?;

        let base_url = urls
            .get(GITHUB_SERVICE_NAME)
            .ok_or_else(|| anyhow!("no '{}' url configured", GITHUB_SERVICE_NAME))?;

        let mut client = GithubClient::new(base_url);
        client.users = Some(users);

        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn resolve_login(&self, role: &str) -> Result<String> {
        match &self.users {
            Some(users) => users
                .get(role)
                .cloned()
                .ok_or_else(|| anyhow!("no user configured for role '{}'", role)),
            None => Ok(role.to_owned()),
        }
    }

    pub(super) async fn list_user_repos(
        &self,
        login: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<ApiResponse> {
        let url = format!("{}/users/{}/repos", self.base_url, login);

        let response = self
            .http
            .get(&url, &default_headers(), query, timeout)
            .await
            .with_context(|| format!("Cannot list repos of '{}'", login))?;

        Ok(response)
    }
}

fn default_headers() -> HeaderMap {
    HeaderMap::default()
        .with(ACCEPT.as_str(), GITHUB_V3_JSON)
        .with(CONTENT_TYPE.as_str(), APPLICATION_JSON)
        .with(USER_AGENT.as_str(), USER_AGENT_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{
        builder::BuilderExecutor,
        query::{Direction, RepoType, Sort},
        response::Repository,
    };
    use mockito::{Matcher, Server};
    use std::{fs, io::Write};
    use tempdir::TempDir;

    const REPOS_BODY: &str = r#"[
        { "id": 1, "full_name": "octocat/Hello-World", "created_at": "2011-01-26T19:01:12Z",
          "updated_at": "2024-01-01T00:00:00Z", "pushed_at": "2023-12-01T00:00:00Z",
          "owner": { "login": "octocat", "id": 583231 } }
    ]"#;

    fn query_matcher(pairs: &[(&str, &str)]) -> Matcher {
        Matcher::AllOf(
            pairs
                .iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn should_trim_trailing_slash_from_base_url() {
        let client = GithubClient::new("https://api.github.com/");

        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    fn should_use_login_verbatim_without_config() -> Result<()> {
        let client = GithubClient::new("https://api.github.com");

        assert_eq!(client.user("octocat")?.login(), "octocat");

        Ok(())
    }

    #[tokio::test]
    async fn should_list_repos_with_default_query_and_headers() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/users/octocat/repos")
            .match_header("accept", GITHUB_V3_JSON)
            .match_header("content-type", APPLICATION_JSON)
            .match_header("user-agent", USER_AGENT_VALUE)
            .match_query(query_matcher(&[
                ("type", "owner"),
                ("sort", "full_name"),
                ("direction", "asc"),
                ("per_page", "30"),
                ("page", "1"),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPOS_BODY)
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let response = client.user("octocat")?.repos().execute().await?;

        mock.assert_async().await;
        assert_eq!(response.status(), 200);

        let repos: Vec<Repository> = response.json()?;
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].owner.login, "octocat");

        Ok(())
    }

    #[tokio::test]
    async fn should_send_overridden_query() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/users/octocat/repos")
            .match_query(query_matcher(&[
                ("type", "unknown"),
                ("sort", "created"),
                ("direction", "desc"),
                ("per_page", "1000"),
                ("page", "5"),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let response = client
            .user("octocat")?
            .repos()
            .repo_type(RepoType::from("unknown"))
            .sort(Sort::Created)
            .direction(Direction::Desc)
            .per_page(1000)
            .page(5)
            .execute()
            .await?;

        mock.assert_async().await;
        assert_eq!(response.json::<Vec<Repository>>()?.len(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn should_propagate_error_status() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/users/ghost-of-nobody/repos")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let response = client.user("ghost-of-nobody")?.repos().execute().await?;

        mock.assert_async().await;
        assert_eq!(response.status(), 404);

        Ok(())
    }

    #[tokio::test]
    async fn should_give_up_after_builder_timeout() -> Result<()> {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_chunked_body(|writer| {
                std::thread::sleep(Duration::from_millis(1500));
                writer.write_all(b"[]")
            })
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let result = client
            .user("octocat")?
            .repos()
            .timeout(Duration::from_millis(300))
            .execute()
            .await;

        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn should_resolve_roles_from_config() -> Result<()> {
        let mut server = Server::new_async().await;

        let dir = TempDir::new("github_client")?;
        let configs = dir.path().join("configs");
        fs::create_dir_all(&configs)?;
        fs::write(
            configs.join("urls.json"),
            format!(r#"{{ "github": "{}/" }}"#, server.url()),
        )?;
        fs::write(configs.join("users.json"), r#"{ "candidate": "octocat" }"#)?;

        let mock = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(REPOS_BODY)
            .create_async()
            .await;

        let client = GithubClient::from_config(&Config::with_root(dir.path())).await?;

        assert!(client.user("nobody").is_err());

        let response = client.user("candidate")?.repos().execute().await?;

        mock.assert_async().await;
        assert!(response.is_success());

        Ok(())
    }
}
