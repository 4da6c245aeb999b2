use crate::config::DiscogsConfig;
use crate::discogs::models::CollectionPage;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("spindle/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum DiscogsError {
    /// Transport failure, timeout, or an undecodable body
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Discogs returned {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("Invalid API token")]
    InvalidToken,
}

impl DiscogsError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DiscogsError::Request(e) if e.is_timeout())
    }
}

/// A source of collection pages.
///
/// The sync procedure only ever talks to the remote through this trait, so it
/// can be driven by an in-memory source in tests.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Fetch one page of a collection folder. Page numbers start at 1.
    async fn fetch_page(
        &self,
        folder_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<CollectionPage, DiscogsError>;
}

/// Long-lived Discogs client configuration.
///
/// Holds no connections itself; call [`DiscogsClient::open`] to get a
/// [`DiscogsSession`] that owns its connection pool for the duration of a sync.
#[derive(Clone, Debug)]
pub struct DiscogsClient {
    config: DiscogsConfig,
}

impl DiscogsClient {
    pub fn new(config: DiscogsConfig) -> Self {
        Self { config }
    }

    pub fn username(&self) -> &str {
        &self.config.username
    }

    pub fn is_authenticated(&self) -> bool {
        self.config.token.is_some()
    }

    /// Open a session with a fresh connection pool. Connections are closed
    /// when the session is dropped.
    pub fn open(&self) -> Result<DiscogsSession, DiscogsError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers(self.config.token.as_deref())?)
            .timeout(self.config.timeout)
            .build()?;

        Ok(DiscogsSession {
            http,
            base_url: self.config.base_url.trim_end_matches('/').to_string(),
            username: self.config.username.clone(),
        })
    }
}

/// Headers sent with every request. Anonymous when no token is configured.
fn default_headers(token: Option<&str>) -> Result<HeaderMap, DiscogsError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Discogs token={}", token))
            .map_err(|_| DiscogsError::InvalidToken)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// A single sync's worth of access to the Discogs API
pub struct DiscogsSession {
    http: Client,
    base_url: String,
    username: String,
}

impl DiscogsSession {
    fn collection_url(&self, folder_id: u64) -> String {
        format!(
            "{}/users/{}/collection/folders/{}/releases",
            self.base_url,
            urlencoding::encode(&self.username),
            folder_id
        )
    }
}

#[async_trait]
impl CollectionSource for DiscogsSession {
    async fn fetch_page(
        &self,
        folder_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<CollectionPage, DiscogsError> {
        let url = self.collection_url(folder_id);
        debug!("Discogs API: GET {} page={} per_page={}", url, page, per_page);

        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let page: CollectionPage = response.json().await?;
            debug!(
                "Discogs page {}/{} returned {} release(s)",
                page.pagination.page,
                page.pagination.pages,
                page.releases.len()
            );
            return Ok(page);
        }

        match status {
            StatusCode::NOT_FOUND => warn!("Discogs user or folder not found: {}", url),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("Discogs rejected credentials for {}", url)
            }
            StatusCode::TOO_MANY_REQUESTS => warn!("Discogs rate limit exceeded"),
            _ => warn!("Discogs API error: {}", status),
        }
        Err(DiscogsError::Status { status, url })
    }
}
