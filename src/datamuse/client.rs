//! Datamuse API client
//!
//! Rate-limited HTTP client for the Datamuse `/words` endpoint. Every
//! query carries `md=sp` so records arrive with syllable counts and
//! part-of-speech tags.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tokio::time::sleep;
use tracing::debug;

use super::types::{self, DatamuseWord};
use crate::lexicon::{Relation, Word, WordSource};

const DATAMUSE_API_BASE: &str = "https://api.datamuse.com";
const RATE_LIMIT_DELAY_MS: u64 = 100; // quota is per day, not per second; just space out bursts
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Datamuse API client
pub struct DatamuseClient {
    http: Client,
    base_url: String,
    last_request: Mutex<Instant>,
}

impl DatamuseClient {
    /// Create a client against the public API, honoring the
    /// `DATAMUSE_BASE_URL` environment variable when set.
    pub fn new() -> Result<Self> {
        let base_url = std::env::var("DATAMUSE_BASE_URL")
            .unwrap_or_else(|_| DATAMUSE_API_BASE.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            last_request: Mutex::new(Instant::now()),
        })
    }

    /// Enforce a minimum delay between requests
    async fn rate_limit(&self) {
        let elapsed = {
            let last = self.last_request.lock().unwrap();
            last.elapsed()
        };

        if elapsed < Duration::from_millis(RATE_LIMIT_DELAY_MS) {
            sleep(Duration::from_millis(RATE_LIMIT_DELAY_MS) - elapsed).await;
        }

        let mut last = self.last_request.lock().unwrap();
        *last = Instant::now();
    }

    /// GET `/words` with a prebuilt query string
    async fn get_words(&self, query: &str) -> Result<Vec<DatamuseWord>> {
        self.rate_limit().await;

        let url = format!("{}/words?{}", self.base_url, query);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Datamuse API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            ));
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

#[async_trait]
impl WordSource for DatamuseClient {
    fn source_id(&self) -> &'static str {
        "datamuse"
    }

    async fn related_words(
        &self,
        query: &str,
        relation: Relation,
        starts_with: Option<char>,
    ) -> Result<Vec<Word>> {
        let records = self
            .get_words(&relation_query(relation, query, starts_with))
            .await?;
        let words = types::normalize(records);

        debug!(
            relation = %relation,
            query = %query,
            count = words.len(),
            "datamuse lookup complete"
        );

        Ok(words)
    }
}

/// Build the query string for one relation lookup.
///
/// `md=sp` requests syllable counts and part-of-speech tags; the optional
/// starting letter becomes a `sp=<letter>*` spelled-like pattern.
fn relation_query(relation: Relation, keyword: &str, starts_with: Option<char>) -> String {
    let mut query = format!(
        "{}={}&md=sp",
        relation.query_param(),
        encode_query_param(keyword)
    );
    if let Some(letter) = starts_with {
        query.push_str(&format!("&sp={}*", letter));
    }
    query
}

/// Simple URL encoding for query parameters
fn encode_query_param(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ' ' => "%20".to_string(),
            '&' => "%26".to_string(),
            '=' => "%3D".to_string(),
            '+' => "%2B".to_string(),
            '#' => "%23".to_string(),
            '%' => "%25".to_string(),
            '?' => "%3F".to_string(),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '~' => {
                c.to_string()
            }
            c => format!("%{:02X}", c as u32),
        })
        .collect()
}
