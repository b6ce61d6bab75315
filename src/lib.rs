//! `jtl`: log work time in Jira from the command line.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use jira_api::JiraClient;
use log::debug;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod secrets;
pub mod worklog;

use cli::{Cli, Commands};
use config::resolve_credentials;
use error::AppError;
use secrets::KeyringStore;

/// Entry point shared by the `jtl` binary: parses arguments, runs one command, maps errors to an exit code.
pub fn run() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .try_init();

    let Cli {
        jira_server,
        jira_user,
        command,
    } = Cli::parse();

    let Some(command) = command else {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };

    match execute(jira_server.as_deref(), jira_user.as_deref(), command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_configuration() => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            debug!("Command failed: {:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(server: Option<&str>, user: Option<&str>, command: Commands) -> Result<(), AppError> {
    let credentials = resolve_credentials(server, user, &KeyringStore)?;
    debug!("Connecting to {} as {}", credentials.server, credentials.user);
    let client = JiraClient::new(credentials.client_config())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::dispatch(command, &client))
}
