use anyhow::{anyhow, Context, Result};
use serde::{de::DeserializeOwned, Deserialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

const CONFIG_DIR_NAME: &str = "configs";
const URLS_FILE_NAME: &str = "urls";
const USERS_FILE_NAME: &str = "users";
const EXPECTATIONS_FILE_NAME: &str = "expectations";

/// Service name to base URL, as read from `configs/urls.json`.
pub type Urls = HashMap<String, String>;

/// Logical role to GitHub login, as read from `configs/users.json`.
pub type Users = HashMap<String, String>;

/// Role to the account facts the checks compare against.
pub type Expectations = HashMap<String, Expectation>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Expectation {
    pub owner_id: u64,
    pub repo_count: usize,
}

/// Reads named JSON files from the `configs` directory under a root.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Roots the loader at the repository root.
    pub fn new() -> Self {
        Config::with_root(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Config {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root
            .join(CONFIG_DIR_NAME)
            .join(format!("{}.json", filename))
    }

    pub async fn get_json<T>(&self, filename: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let path = self.path_of(filename);
        log::debug!("reading config file {}", path.display());

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        let value = serde_json::from_str::<T>(&content)
            .with_context(|| format!("Cannot parse config file {}", path.display()))?;

        Ok(value)
    }

    pub async fn urls(&self) -> Result<Urls> {
        self.get_json(URLS_FILE_NAME).await
    }

    pub async fn users(&self) -> Result<Users> {
        self.get_json(USERS_FILE_NAME).await
    }

    pub async fn expectations(&self) -> Result<Expectations> {
        self.get_json(EXPECTATIONS_FILE_NAME).await
    }

    pub async fn expectation(&self, role: &str) -> Result<Expectation> {
        self.expectations()
            .await?
            .remove(role)
            .ok_or_else(|| anyhow!("no expectation configured for role '{}'", role))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
