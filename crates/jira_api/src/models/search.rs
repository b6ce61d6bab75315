use crate::models::Issue;
use serde::Deserialize;

/// One page of search results. Offset fields come from `GET search`, token fields from `GET search/jql`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub is_last: Option<bool>,
}

impl SearchResults {
    /// Offset of the page after this one, if the server reported more results.
    pub fn next_start(&self) -> Option<u32> {
        let next = self.start_at.saturating_add(self.issues.len() as u32);
        (!self.issues.is_empty() && next < self.total).then_some(next)
    }

    /// Token for the following `search/jql` page, unless this page is the last one.
    pub fn next_token(&self) -> Option<&str> {
        if self.is_last == Some(true) || self.issues.is_empty() {
            return None;
        }
        self.next_page_token.as_deref()
    }
}
