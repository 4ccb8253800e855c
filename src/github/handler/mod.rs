pub mod user_handler;

use super::github_client::GithubClient;
use anyhow::Result;
use user_handler::UserHandler;

/// Github user handler access implementation
impl GithubClient {
    /// Resolves `role` through `users.json` when the client was built from
    /// config, otherwise treats it as a login.
    pub fn user(&self, role: &str) -> Result<UserHandler<'_>> {
        let login = self.resolve_login(role)?;
        Ok(UserHandler::new(self, login))
    }
}
