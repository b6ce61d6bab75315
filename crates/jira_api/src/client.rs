use crate::auth::basic_auth_value;
use crate::config::JiraConfig;
use crate::error::{JiraError, Result};
use crate::models::{Issue, SearchResults, Worklog, WorklogCreate};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const ISSUE_SUMMARY_FIELDS: &str = "summary,status";

#[derive(Clone)]
pub struct JiraClient {
    http: HttpClient,
    config: JiraConfig,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    pub async fn get_with_query<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        debug!("GET {}", url);
        let response = self.http.get(url).query(query).send().await?;
        Self::parse_json(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::POST, path, Some(body)).await
    }

    pub async fn send_with_body<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        debug!("{} {}", method, url);
        let mut request = self.http.request(method, url);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(JiraError::from)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            Err(JiraError::Authentication(format!(
                "Access denied ({}) - {}",
                status,
                body.trim()
            )))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(JiraError::from_response(status, &body))
        }
    }

    /// Fetches an issue by key, failing with a 404 error for unknown keys.
    pub async fn get_issue(&self, issue_key: &str) -> Result<Issue> {
        let path = format!("issue/{}", issue_key);
        self.get_with_query(&path, &[("fields", ISSUE_SUMMARY_FIELDS)]).await
    }

    pub async fn add_worklog(&self, issue_key: &str, entry: &WorklogCreate) -> Result<Worklog> {
        let path = format!("issue/{}/worklog", issue_key);
        self.post(&path, entry).await
    }

    /// Runs a JQL query and returns one page of matching issues via `GET search`.
    ///
    /// Jira Cloud has retired this endpoint and answers `410 Gone`; use
    /// [`JiraClient::search_issues_jql`] there. [`JiraClient::search_all_issues`]
    /// switches automatically.
    pub async fn search_issues(&self, jql: &str, start_at: u32, max_results: u32) -> Result<SearchResults> {
        let start_at = start_at.to_string();
        let max_results = max_results.clamp(1, 1000).to_string();
        let params = [
            ("jql", jql.trim()),
            ("startAt", start_at.as_str()),
            ("maxResults", max_results.as_str()),
            ("fields", ISSUE_SUMMARY_FIELDS),
        ];
        self.get_with_query("search", &params).await
    }

    /// Runs a JQL query against the token-paged `GET search/jql` endpoint.
    pub async fn search_issues_jql(
        &self,
        jql: &str,
        next_page_token: Option<&str>,
        max_results: u32,
    ) -> Result<SearchResults> {
        let max_results = max_results.clamp(1, 1000).to_string();
        let mut params = vec![
            ("jql", jql.trim()),
            ("maxResults", max_results.as_str()),
            ("fields", ISSUE_SUMMARY_FIELDS),
        ];
        if let Some(token) = next_page_token {
            params.push(("nextPageToken", token));
        }
        self.get_with_query("search/jql", &params).await
    }

    /// Runs a JQL query, following pages until `limit` issues are collected or results run out.
    /// Falls back to `search/jql` when the server reports `GET search` as gone.
    pub async fn search_all_issues(&self, jql: &str, limit: u32) -> Result<Vec<Issue>> {
        match self.collect_offset_pages(jql, limit).await {
            Err(err) if err.status() == Some(StatusCode::GONE) => {
                debug!("GET search is gone, retrying with search/jql");
                self.collect_token_pages(jql, limit).await
            }
            other => other,
        }
    }

    async fn collect_offset_pages(&self, jql: &str, limit: u32) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut start_at = 0;
        while (issues.len() as u32) < limit {
            let remaining = limit - issues.len() as u32;
            let page = self.search_issues(jql, start_at, remaining).await?;
            let next = page.next_start();
            issues.extend(page.issues.into_iter().take(remaining as usize));
            match next {
                Some(offset) => start_at = offset,
                None => break,
            }
        }
        Ok(issues)
    }

    async fn collect_token_pages(&self, jql: &str, limit: u32) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut token: Option<String> = None;
        while (issues.len() as u32) < limit {
            let remaining = limit - issues.len() as u32;
            let page = self.search_issues_jql(jql, token.as_deref(), remaining).await?;
            let next = page.next_token().map(str::to_string);
            issues.extend(page.issues.into_iter().take(remaining as usize));
            match next {
                Some(value) => token = Some(value),
                None => break,
            }
        }
        Ok(issues)
    }
}

fn build_http_client(config: &JiraConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    let mut auth_value = header_value(basic_auth_value(&config.username, &config.password))?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| JiraError::InvalidConfig(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| JiraError::InvalidConfig(err.to_string()))
}
