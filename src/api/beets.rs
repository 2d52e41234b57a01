use crate::api::models::*;
use crate::error::ApiError;

const QUERY_ROUTE: &str = "item/query/";

/// Relative path for a free-text query: each whitespace-separated term is
/// percent-encoded and becomes one path segment. `None` when there are no terms.
pub fn query_path(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|term| urlencoding::encode(term).into_owned())
        .collect();
    if terms.is_empty() {
        return None;
    }
    Some(format!("{QUERY_ROUTE}{}", terms.join("/")))
}

/// Orders in-flight queries so only the newest one may apply its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryGeneration {
    latest: u64,
}

impl QueryGeneration {
    /// Start a query and return its ticket. Every earlier ticket goes stale.
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[derive(Debug, Clone)]
pub struct LibraryClient {
    base: String,
    http: reqwest::Client,
}

impl LibraryClient {
    pub fn new(base: &str) -> Self {
        let mut base = base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Run a query against the library. An empty query returns no tracks
    /// without touching the network.
    pub async fn query(&self, query: &str) -> Result<Vec<Track>, ApiError> {
        let Some(path) = query_path(query) else {
            return Ok(Vec::new());
        };
        let url = self.url(&path);
        tracing::debug!("querying {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body: QueryResponse = response.json().await?;
        Ok(body.results)
    }
}
