use serde::{Deserialize, Serialize};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.pocketsmith.com/v2";

/// Connection settings for `PocketSmithClient`.
///
/// How the developer key is obtained is up to the caller; the client only
/// attaches it to every request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub developer_key: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(developer_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            developer_key: developer_key.into(),
        }
    }

    /// Point the client at a different API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
