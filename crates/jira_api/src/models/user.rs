//! User models embedded in worklog payloads.

use serde::Deserialize;

/// Jira user reference. Server installs identify users by `name`/`key`, Cloud by `accountId`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: Option<String>,
    pub key: Option<String>,
    pub account_id: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
}

impl User {
    /// Returns the most readable identifier available.
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.account_id.as_deref())
    }
}
