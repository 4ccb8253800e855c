use crate::http::ApiResponse;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub type Verdict = Result<(), String>;

pub const REPO_KEYS: [&str; 77] = [
    "id",
    "node_id",
    "name",
    "full_name",
    "private",
    "owner",
    "html_url",
    "description",
    "fork",
    "url",
    "forks_url",
    "keys_url",
    "collaborators_url",
    "teams_url",
    "hooks_url",
    "issue_events_url",
    "events_url",
    "assignees_url",
    "branches_url",
    "tags_url",
    "blobs_url",
    "git_tags_url",
    "git_refs_url",
    "trees_url",
    "statuses_url",
    "languages_url",
    "stargazers_url",
    "contributors_url",
    "subscribers_url",
    "subscription_url",
    "commits_url",
    "git_commits_url",
    "comments_url",
    "issue_comment_url",
    "contents_url",
    "compare_url",
    "merges_url",
    "archive_url",
    "downloads_url",
    "issues_url",
    "pulls_url",
    "milestones_url",
    "notifications_url",
    "labels_url",
    "releases_url",
    "deployments_url",
    "created_at",
    "updated_at",
    "pushed_at",
    "git_url",
    "ssh_url",
    "clone_url",
    "svn_url",
    "homepage",
    "size",
    "stargazers_count",
    "watchers_count",
    "language",
    "has_issues",
    "has_projects",
    "has_downloads",
    "has_wiki",
    "has_pages",
    "forks_count",
    "mirror_url",
    "archived",
    "disabled",
    "open_issues_count",
    "license",
    "allow_forking",
    "is_template",
    "topics",
    "visibility",
    "forks",
    "open_issues",
    "watchers",
    "default_branch",
];

pub const OWNER_KEYS: [&str; 18] = [
    "login",
    "id",
    "node_id",
    "avatar_url",
    "gravatar_id",
    "url",
    "html_url",
    "followers_url",
    "following_url",
    "gists_url",
    "starred_url",
    "subscriptions_url",
    "organizations_url",
    "repos_url",
    "events_url",
    "received_events_url",
    "type",
    "site_admin",
];

/// Status must be 200; the body is then parsed as a list.
pub fn parse_ok<T>(response: &ApiResponse) -> Result<Vec<T>, String>
where
    T: DeserializeOwned,
{
    if response.status() != 200 {
        return Err(format!(
            "Github /repos unsuccessfully fetched response: status {}",
            response.status()
        ));
    }

    response
        .json::<Vec<T>>()
        .map_err(|err| format!("Github /repos returned an unparseable body: {}", err))
}

/// Keys absent from a repository record, owner keys as `owner[key]`.
pub fn missing_keys(repo: &Value) -> Vec<String> {
    let mut missing: Vec<String> = REPO_KEYS
        .iter()
        .filter(|key| repo.get(**key).is_none())
        .map(|key| key.to_string())
        .collect();

    if let Some(owner) = repo.get("owner") {
        missing.extend(
            OWNER_KEYS
                .iter()
                .filter(|key| owner.get(**key).is_none())
                .map(|key| format!("owner[{}]", key)),
        );
    }

    missing
}

pub fn all_keys_present(repos: &[Value]) -> Verdict {
    for repo in repos {
        if let Some(key) = missing_keys(repo).first() {
            return Err(format!("'{}' missing from Github /repos response", key));
        }
    }
    Ok(())
}

pub fn all_owned_by<'a>(
    owners: impl IntoIterator<Item = (&'a str, u64)>,
    login: &str,
    id: u64,
) -> Verdict {
    for (owner_login, owner_id) in owners {
        if owner_login != login || owner_id != id {
            return Err(format!(
                "Github /repos returned repos of different users: '{}' and '{}' and '{}' and '{}'",
                owner_login, login, owner_id, id
            ));
        }
    }
    Ok(())
}

/// Case-insensitive, no two neighbours equal.
pub fn strictly_ascending<'a>(values: impl IntoIterator<Item = &'a str>, label: &str) -> Verdict {
    ordered(values, |a, b| a < b, &format!("Github /repos not sorted by {}", label))
}

pub fn strictly_descending<'a>(values: impl IntoIterator<Item = &'a str>, label: &str) -> Verdict {
    ordered(
        values,
        |a, b| a > b,
        &format!("Github /repos not sorted by {} in descending direction", label),
    )
}

/// Timestamps may tie at second resolution.
pub fn non_decreasing<'a>(values: impl IntoIterator<Item = &'a str>, label: &str) -> Verdict {
    ordered(values, |a, b| a <= b, &format!("Github /repos not sorted by {}", label))
}

fn ordered<'a>(
    values: impl IntoIterator<Item = &'a str>,
    in_order: impl Fn(&str, &str) -> bool,
    message: &str,
) -> Verdict {
    let out_of_order = values
        .into_iter()
        .map(str::to_lowercase)
        .tuple_windows()
        .find(|(previous, next)| !in_order(previous.as_str(), next.as_str()));

    match out_of_order {
        Some((previous, next)) => Err(format!("{}: '{}' then '{}'", message, previous, next)),
        None => Ok(()),
    }
}

pub fn count_is(actual: usize, expected: usize) -> Verdict {
    if actual != expected {
        return Err(format!(
            "Github /repos did not return the correct number of repos: {} instead of {}",
            actual, expected
        ));
    }
    Ok(())
}

pub fn distinct_count(ids: impl IntoIterator<Item = u64>) -> usize {
    ids.into_iter().unique().count()
}
