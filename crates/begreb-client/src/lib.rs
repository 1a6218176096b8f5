mod client;

pub use client::HttpLookupClient;

use begreb_types::SearchPost;

/// Term-lookup provider interface
#[async_trait::async_trait]
pub trait LookupService: Send + Sync {
    /// Send the raw query text and return the matching pairs in service order
    async fn lookup(&self, query: &str) -> Result<Vec<SearchPost>, LookupError>;

    /// Where queries are sent
    fn endpoint(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Lookup service answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}
