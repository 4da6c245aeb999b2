use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";
pub const DEFAULT_SNAPSHOT_PATH: &str = "collection.json";
pub const DEFAULT_PER_PAGE: u32 = 50;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Discogs' "All" meta folder
pub const ALL_FOLDER_ID: u64 = 0;

/// Connection settings for the Discogs API
#[derive(Clone, Debug)]
pub struct DiscogsConfig {
    pub base_url: String,
    pub username: String,
    /// Personal access token. None = anonymous (public collections only).
    pub token: Option<String>,
    /// Upper bound on each remote request, connect through body.
    pub timeout: Duration,
}

impl DiscogsConfig {
    /// Config against the public API. An empty token is treated as no token.
    pub fn new(username: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Which folder to mirror and where the snapshot lives
#[derive(Clone, Debug)]
pub struct CollectionConfig {
    pub folder_id: u64,
    pub per_page: u32,
    pub snapshot_path: PathBuf,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            folder_id: ALL_FOLDER_ID,
            per_page: DEFAULT_PER_PAGE,
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        }
    }
}
