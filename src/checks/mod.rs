mod assertions;
mod suite;

use crate::{config::Expectation, github::GithubClient};
use anyhow::Result;
use std::fmt::{self, Display};
use suite::CheckContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(String),
    Skipped(&'static str),
}

impl From<Result<(), String>> for Outcome {
    fn from(verdict: Result<(), String>) -> Self {
        match verdict {
            Ok(()) => Outcome::Passed,
            Err(message) => Outcome::Failed(message),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed(message) => write!(f, "failed: {}", message),
            Outcome::Skipped(reason) => write!(f, "skipped: {}", reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub outcome: Outcome,
}

impl CheckResult {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<CheckResult>,
}

impl Report {
    fn record(&mut self, name: &'static str, result: Result<Outcome>) {
        let outcome = result.unwrap_or_else(|err| Outcome::Failed(format!("{:#}", err)));

        match &outcome {
            Outcome::Passed => log::info!("{} {}", name, outcome),
            Outcome::Skipped(_) => log::warn!("{} {}", name, outcome),
            Outcome::Failed(_) => log::error!("{} {}", name, outcome),
        }

        self.results.push(CheckResult { name, outcome });
    }

    fn skip(&mut self, name: &'static str, reason: &'static str) {
        self.record(name, Ok(Outcome::Skipped(reason)));
    }

    pub fn passed(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|result| result.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Skipped(_)))
    }

    #[cfg(test)]
    pub fn outcome_of(&self, name: &str) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|result| result.name == name)
            .map(|result| &result.outcome)
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.results
            .iter()
            .filter(|result| predicate(&result.outcome))
            .count()
    }
}

/// Runs every `/repos` check against `role`, one request at a time.
pub async fn run_all(
    client: &GithubClient,
    role: &str,
    expectation: &Expectation,
) -> Result<Report> {
    let ctx = CheckContext::new(client, role, expectation)?;
    let mut report = Report::default();

    log::info!("checking /users/{}/repos", ctx.login());

    report.record("successful_response", suite::successful_response(&ctx).await);
    report.record("type_owner", suite::type_owner(&ctx).await);
    report.skip("type_member", "Lack of a user that is only a member to a repo");
    report.record("type_all", suite::type_all(&ctx).await);
    report.record("type_unknown", suite::type_unknown(&ctx).await);
    report.record("sort_full_name", suite::sort_full_name(&ctx).await);
    report.record("sort_created", suite::sort_created(&ctx).await);
    report.record("sort_updated", suite::sort_updated(&ctx).await);
    report.record("sort_pushed", suite::sort_pushed(&ctx).await);
    report.record("sort_unknown", suite::sort_unknown(&ctx).await);
    report.record("direction_asc", suite::direction_asc(&ctx).await);
    report.record("direction_desc", suite::direction_desc(&ctx).await);
    report.record("direction_unknown", suite::direction_unknown(&ctx).await);
    report.record("per_page_1", suite::per_page_1(&ctx).await);
    report.record("per_page_1000", suite::per_page_1000(&ctx).await);
    report.skip("page_5", "Need user with more than 120 repos to reach page 5");

    Ok(report)
}
