use super::{
    assertions::{
        all_keys_present, all_owned_by, count_is, distinct_count, non_decreasing, parse_ok,
        strictly_ascending, strictly_descending, Verdict,
    },
    Outcome,
};
use crate::{
    config::Expectation,
    github::{
        builder::list_repos_builder::ListReposBuilder, handler::user_handler::UserHandler,
        BuilderExecutor, Direction, GithubClient, RepoType, Repository, Sort,
    },
};
use anyhow::Result;
use serde_json::Value;

pub struct CheckContext<'a> {
    user: UserHandler<'a>,
    expectation: Expectation,
}

impl<'a> CheckContext<'a> {
    pub fn new(client: &'a GithubClient, role: &str, expectation: &Expectation) -> Result<Self> {
        Ok(CheckContext {
            user: client.user(role)?,
            expectation: expectation.clone(),
        })
    }

    pub fn login(&self) -> &str {
        self.user.login()
    }

    fn repos(&self) -> ListReposBuilder<'a> {
        self.user.repos()
    }

    fn owned_by_candidate(&self, repos: &[Repository]) -> Verdict {
        all_owned_by(
            repos
                .iter()
                .map(|repo| (repo.owner.login.as_str(), repo.owner.id)),
            self.login(),
            self.expectation.owner_id,
        )
    }
}

async fn fetch(builder: ListReposBuilder<'_>) -> Result<Result<Vec<Repository>, String>> {
    let response = builder.execute().await?;
    Ok(parse_ok(&response))
}

fn full_names(repos: &[Repository]) -> impl Iterator<Item = &str> {
    repos.iter().map(|repo| repo.full_name.as_str())
}

/// A null timestamp fails on its own rather than as an ordering break.
fn timestamp_order<'r>(
    repos: &'r [Repository],
    label: &str,
    field: impl Fn(&'r Repository) -> &'r Option<String>,
) -> Verdict {
    let mut stamps = Vec::with_capacity(repos.len());
    for repo in repos {
        match field(repo) {
            Some(stamp) => stamps.push(stamp.as_str()),
            None => return Err(format!("'{}' is null on {}", label, repo.full_name)),
        }
    }

    non_decreasing(stamps, label)
}

/// Every repository and owner record carries the documented key set.
pub async fn successful_response(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let response = ctx.repos().execute().await?;
    let verdict = parse_ok::<Value>(&response).and_then(|repos| all_keys_present(&repos));

    Ok(verdict.into())
}

pub async fn type_owner(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().repo_type(RepoType::Owner)).await?;

    Ok(repos.and_then(|repos| ctx.owned_by_candidate(&repos)).into())
}

/// `all` lists exactly the union of `owner` and `member`.
pub async fn type_all(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let all = fetch(ctx.repos().repo_type(RepoType::All)).await?;
    let owner = fetch(ctx.repos().repo_type(RepoType::Owner)).await?;
    let member = fetch(ctx.repos().repo_type(RepoType::Member)).await?;

    let verdict = all.and_then(|all| {
        let owner = owner?;
        let member = member?;
        let union = distinct_count(owner.iter().chain(member.iter()).map(|repo| repo.id));

        count_is(all.len(), union)
            .map_err(|err| format!("Github /repos type=all did not return all repos: {}", err))
    });

    Ok(verdict.into())
}

/// Unknown types fall back to `owner`.
pub async fn type_unknown(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().repo_type("unknown")).await?;

    Ok(repos.and_then(|repos| ctx.owned_by_candidate(&repos)).into())
}

pub async fn sort_full_name(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().sort(Sort::FullName)).await?;

    Ok(repos
        .and_then(|repos| strictly_ascending(full_names(&repos), "full_name"))
        .into())
}

pub async fn sort_created(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().sort(Sort::Created)).await?;

    Ok(repos
        .and_then(|repos| timestamp_order(&repos, "created_at", |repo| &repo.created_at))
        .into())
}

pub async fn sort_updated(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().sort(Sort::Updated)).await?;

    Ok(repos
        .and_then(|repos| timestamp_order(&repos, "updated_at", |repo| &repo.updated_at))
        .into())
}

pub async fn sort_pushed(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().sort(Sort::Pushed)).await?;

    Ok(repos
        .and_then(|repos| timestamp_order(&repos, "pushed_at", |repo| &repo.pushed_at))
        .into())
}

/// Unknown sorts fall back to `full_name`.
pub async fn sort_unknown(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().sort("unknown")).await?;

    Ok(repos
        .and_then(|repos| strictly_ascending(full_names(&repos), "full_name"))
        .into())
}

pub async fn direction_asc(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().direction(Direction::Asc)).await?;

    Ok(repos
        .and_then(|repos| {
            strictly_ascending(full_names(&repos), "full_name in ascending direction")
        })
        .into())
}

pub async fn direction_desc(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().direction(Direction::Desc)).await?;

    Ok(repos
        .and_then(|repos| strictly_descending(full_names(&repos), "full_name"))
        .into())
}

/// Unknown directions fall back to ascending.
pub async fn direction_unknown(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().direction("unknown")).await?;

    Ok(repos
        .and_then(|repos| {
            strictly_ascending(full_names(&repos), "default full_name in ascending direction")
        })
        .into())
}

pub async fn per_page_1(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().per_page(1)).await?;

    Ok(repos.and_then(|repos| count_is(repos.len(), 1)).into())
}

/// Above the server cap, every repository of a small account still fits.
pub async fn per_page_1000(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let repos = fetch(ctx.repos().per_page(1000)).await?;
    let expected = ctx.expectation.repo_count;

    Ok(repos.and_then(|repos| count_is(repos.len(), expected)).into())
}
