//! Errors surfaced by the command line front end.

use jira_api::JiraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please set JIRA_SERVER or provide --jira-server argument")]
    MissingServer,
    #[error("Please set JIRA_USER or provide --jira-user argument")]
    MissingUser,
    #[error("Please add password to keyring (run \"keyring set {server} {user}\")")]
    MissingPassword { server: String, user: String },
    #[error("Failed to read password from keyring: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("Invalid start time {value:?}: expected RFC 3339 timestamp or HH:MM")]
    InvalidStarted { value: String },
    #[error(transparent)]
    Tracker(#[from] JiraError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Configuration problems are reported without the generic `Error:` prefix.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AppError::MissingServer
                | AppError::MissingUser
                | AppError::MissingPassword { .. }
                | AppError::Keyring(_)
        )
    }
}
