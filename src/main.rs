mod checks;
mod config;
mod github;
mod http;
mod logger;

use anyhow::{bail, Context, Result};
use config::Config;
use github::GithubClient;

const CANDIDATE_ROLE: &str = "candidate";

#[tokio::main]
async fn main() -> Result<()> {
    logger::init(logger::DEFAULT_LEVEL)?;

    log::info!("Starting");
    let config = Config::new();
    let client = GithubClient::from_config(&config)
        .await
        .context("Cannot create the github client")?;
    let expectation = config
        .expectation(CANDIDATE_ROLE)
        .await
        .context("Cannot load the check expectations")?;

    log::info!("Running /repos checks against {}", client.base_url());
    let report = checks::run_all(&client, CANDIDATE_ROLE, &expectation)
        .await
        .context("Cannot run the /repos checks")?;

    log::info!(
        "{} passed, {} failed, {} skipped",
        report.passed(),
        report.failed(),
        report.skipped()
    );

    for result in report.results.iter().filter(|result| result.is_failure()) {
        log::error!("failed check: {}", result.name);
    }

    if report.failed() > 0 {
        bail!("{} of {} checks failed", report.failed(), report.results.len());
    }

    Ok(())
}
