//! Command table. Server and user options are declared once and shared by every subcommand.

use clap::{Args, Parser, Subcommand};

use crate::config::{SERVER_ENV, USER_ENV};

pub const DEFAULT_ASSIGNED_JQL: &str = "assignee = currentUser()";
pub const DEFAULT_ISSUE_LIMIT: u32 = 50;

#[derive(Debug, Parser)]
#[command(name = "jtl", about = "Log time in Jira", version)]
#[command(after_help = "Subcommands: use jtl <cmd> -h to get detailed help")]
pub struct Cli {
    /// Jira server (default: JIRA_SERVER environment variable)
    #[arg(long = "jira-server", short = 'j', env = SERVER_ENV, global = true)]
    pub jira_server: Option<String>,

    /// Jira user (default: JIRA_USER environment variable)
    #[arg(long = "jira-user", short = 'u', env = USER_ENV, global = true)]
    pub jira_user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log time
    #[command(visible_alias = "l")]
    Log(LogArgs),
    /// Log time from vim worklog
    #[command(visible_alias = "v")]
    Vimlog,
    /// List assigned issues
    #[command(visible_alias = "i")]
    Issues(IssuesArgs),
}

#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Issue id
    pub issue: String,
    /// Amount of time to log, e.g. 1h 30m
    pub amount: String,
    /// Comment
    pub comment: String,
    /// Start of the logged work: RFC 3339 timestamp or HH:MM today (default: now)
    #[arg(long, short = 's')]
    pub started: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct IssuesArgs {
    /// JQL query selecting the issues to list
    #[arg(long, default_value = DEFAULT_ASSIGNED_JQL)]
    pub jql: String,
    /// Maximum number of issues to print
    #[arg(long, default_value_t = DEFAULT_ISSUE_LIMIT)]
    pub limit: u32,
}
