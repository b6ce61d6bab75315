//! Typed Jira REST API client crate used by the `jtl` command line tool.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::JiraClient;
pub use config::JiraConfig;
pub use error::{JiraError, Result};
pub use models::{Issue, IssueFields, SearchResults, User, Worklog, WorklogCreate};
