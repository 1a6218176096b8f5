use async_trait::async_trait;
use begreb_types::SearchPost;
use serde_json::Value;

use crate::{LookupError, LookupService};

#[derive(Clone)]
pub struct HttpLookupClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpLookupClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LookupService for HttpLookupClient {
    async fn lookup(&self, query: &str) -> Result<Vec<SearchPost>, LookupError> {
        tracing::debug!("POST {} ({} bytes)", self.endpoint, query.len());

        // Body goes out as-is: no content type, no escaping
        let response = self
            .client
            .post(&self.endpoint)
            .body(query.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body = response.text().await?;
        // Only the outer array is strict, every element decodes to some post
        let entries: Vec<Value> = serde_json::from_str(&body)?;
        let posts: Vec<SearchPost> = entries.into_iter().map(SearchPost::from).collect();
        tracing::debug!("Lookup for '{}' returned {} posts", query, posts.len());

        Ok(posts)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
