use anyhow::Context;
use clap::Parser;
use jira_core::config::{DEFAULT_PROFILE, EnvironmentFile, JiraEnvironment, default_env_path};
use jira_fetcher::{DEFAULT_FETCH_SIZE, JiraApiFetcher};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod args;
mod fetch_cmd;

use args::*;

use fetch_cmd::{handle_array, handle_issues, handle_paginated};

pub fn run() -> anyhow::Result<()> {
    app::run()
}

fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Issues(_) => "issues",
        Commands::Array(_) => "array",
        Commands::Paginated(_) => "paginated",
    }
}
