//! # ovenctl — oven panel from the terminal
//!
//! Composition root that wires the HTTP adapter into the panel services.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration (file, env vars, flags)
//! - Initialise logging
//! - Construct the reqwest device client (adapter)
//! - Construct the application services, injecting the client via the port
//! - Run the requested command; `watch` polls until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod cli;
mod config;
mod console;

use std::sync::Arc;

use clap::Parser;
use ovenpanel_adapter_http_reqwest::ReqwestPanelApi;
use ovenpanel_app::poller::spawn_poller;
use ovenpanel_app::services::config_submitter::ConfigSubmitter;
use ovenpanel_app::services::increment_trigger::IncrementTrigger;
use ovenpanel_app::services::status_poller::StatusPoller;
use ovenpanel_domain::config_form::ConfigFormSubmission;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::console::TerminalReadout;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref(), cli.base_url)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let api = Arc::new(ReqwestPanelApi::new(&config.device)?);
    tracing::debug!(base_url = api.base_url(), "device client ready");

    match cli.command {
        Command::Watch => {
            let view = TerminalReadout::new(std::io::stdout());
            let poller = Arc::new(StatusPoller::new(api, view));
            let handle = spawn_poller(poller, config.poll_period());
            tokio::signal::ctrl_c().await?;
            handle.stop();
        }
        Command::State => {
            let view = TerminalReadout::new(std::io::stdout());
            StatusPoller::new(api, view).tick().await?;
        }
        Command::Increment { times } => increment(api, times).await?,
        Command::SetConfig { fields } => {
            let form: ConfigFormSubmission = fields.into_iter().collect();
            ConfigSubmitter::new(api).submit(&form).await?;
        }
        Command::SetSetpoint { value } => {
            ConfigSubmitter::new(api).submit_setpoint(value).await?;
        }
    }

    Ok(())
}

/// Fire `times` independent increments, like rapid clicks on the button.
async fn increment(
    api: Arc<ReqwestPanelApi>,
    times: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let trigger = Arc::new(IncrementTrigger::new(api));
    let mut requests = JoinSet::new();
    for _ in 0..times {
        let trigger = Arc::clone(&trigger);
        requests.spawn(async move { trigger.trigger().await });
    }

    let mut failed = 0_u32;
    while let Some(result) = requests.join_next().await {
        if result?.is_err() {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {times} increments failed").into());
    }
    Ok(())
}
