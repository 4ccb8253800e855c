pub mod builder;
pub mod github_client;
pub mod handler;
pub mod query;
pub mod response;

pub use builder::BuilderExecutor;
pub use github_client::GithubClient;
pub use query::{Direction, RepoType, Sort};
pub use response::Repository;
