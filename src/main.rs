mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigOverrides};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::actions;
use crate::infra::github::GitHubClient;
use crate::infra::notion::NotionClient;

/// Cross-links a freshly opened pull request with its Notion ticket, based on
/// the `{username}/{ticket_num}-{ticket_name}` branch convention.
#[derive(Parser)]
#[command(name = "notion-linker", author, version, about)]
struct Cli {
    /// Code-host API token (defaults to the `github-token` input).
    #[arg(long)]
    github_token: Option<String>,
    /// Notion API token (defaults to the `notion-token` input).
    #[arg(long)]
    notion_token: Option<String>,
    /// Identifier of the Notion stories database (defaults to the
    /// `stories-db-id` input).
    #[arg(long)]
    stories_db_id: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(ConfigOverrides {
        github_token: cli.github_token,
        notion_token: cli.notion_token,
        stories_db_id: cli.stories_db_id,
    })?;

    let event = actions::read_event()?;
    debug!(
        action = %event.action,
        pull_request = event.pull_request.number,
        title = %event.pull_request.title,
        "received event"
    );

    let ticket_tracker = Arc::new(NotionClient::new(
        config.notion_token,
        config.stories_db_id,
    ));
    let code_host = Arc::new(GitHubClient::new(config.github_token));
    let context = AppContext::new(ticket_tracker, code_host);

    let outcome = workflow::opened::run(&context, &event).await?;

    actions::write_output("ticket-id", &outcome.ticket_id)?;
    actions::write_output("ticket-name", &outcome.ticket_name)?;
    actions::write_output("ticket-url", &outcome.ticket_url)?;

    println!(
        "Linked PR #{} to ticket: {}",
        event.pull_request.number, outcome.ticket_url
    );

    Ok(())
}
