use crate::models::User;
use serde::{Deserialize, Serialize};

/// Request body for `POST issue/{key}/worklog`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogCreate {
    pub time_spent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
}

impl WorklogCreate {
    pub fn new(time_spent: impl Into<String>) -> Self {
        Self {
            time_spent: time_spent.into(),
            comment: None,
            started: None,
        }
    }

    /// Attaches a comment; blank comments are left out of the request.
    pub fn with_comment(mut self, comment: &str) -> Self {
        let trimmed = comment.trim();
        self.comment = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Attaches the comment exactly as given, surrounding whitespace and empty text included.
    pub fn with_raw_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Start timestamp in Jira's `yyyy-MM-dd'T'HH:mm:ss.SSSZ` format.
    pub fn with_started(mut self, started: impl Into<String>) -> Self {
        self.started = Some(started.into());
        self
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    pub id: String,
    pub issue_id: Option<String>,
    pub author: Option<User>,
    pub comment: Option<String>,
    pub started: Option<String>,
    pub time_spent: Option<String>,
    pub time_spent_seconds: Option<u64>,
}
