//! Error model used by Jira API client operations.

use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JiraError>;

/// Represents the failures a Jira call can end with: HTTP errors carrying the messages Jira reported, rejected credentials, timeouts, network issues and decoding problems.
#[derive(Debug, Error)]
pub enum JiraError {
    #[error("http {status}: {}", .messages.join("; "))]
    Http {
        status: StatusCode,
        messages: Vec<String>,
    },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl JiraError {
    /// Builds an HTTP error from a raw response body, preferring Jira's structured messages.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let mut messages = extract_error_messages(body);
        if messages.is_empty() {
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                messages.push(trimmed.to_string());
            } else if let Some(reason) = status.canonical_reason() {
                messages.push(reason.to_string());
            }
        }
        JiraError::Http { status, messages }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            JiraError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for JiraError {
    /// Converts reqwest errors into semantic JiraError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JiraError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            JiraError::Http {
                status,
                messages: vec![err.to_string()],
            }
        } else if err.is_connect() {
            JiraError::Network(err.to_string())
        } else if err.is_decode() {
            JiraError::Serialization(err.to_string())
        } else {
            JiraError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JiraError {
    fn from(err: serde_json::Error) -> Self {
        JiraError::Serialization(err.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorCollection {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

/// Flattens Jira's `{"errorMessages": [...], "errors": {...}}` payload into display lines.
fn extract_error_messages(body: &str) -> Vec<String> {
    let Ok(collection) = serde_json::from_str::<ErrorCollection>(body) else {
        return Vec::new();
    };
    let mut messages = collection.error_messages;
    messages.extend(
        collection
            .errors
            .into_iter()
            .map(|(field, message)| format!("{field}: {message}")),
    );
    messages
}
