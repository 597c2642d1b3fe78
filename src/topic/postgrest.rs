//! PostgREST-backed topic store.

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::{MinervaError, Result};

use super::{TopicRecord, TopicStore};

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Topic store over a PostgREST-style REST endpoint.
///
/// Constructed once at process startup and shared by every bootstrap; the
/// underlying client is safe for concurrent use.
#[derive(Debug, Clone)]
pub struct PostgrestTopicStore {
    base_url: String,
    service_key: String,
}

impl PostgrestTopicStore {
    /// Create a store for the given base URL and service key.
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(val) = HeaderValue::from_str(&self.service_key) {
            headers.insert("apikey", val);
        }
        if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", self.service_key)) {
            headers.insert(AUTHORIZATION, val);
        }
        headers
    }
}

#[async_trait]
impl TopicStore for PostgrestTopicStore {
    async fn fetch(&self, room_id: &str) -> Result<Option<TopicRecord>> {
        let url = format!("{}/rest/v1/topics", self.base_url);
        let response = shared_client()
            .get(&url)
            .headers(self.headers())
            .query(&[
                ("id", format!("eq.{room_id}")),
                ("select", "id,topic".to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MinervaError::datastore(status.as_u16(), body));
        }

        let rows: Vec<TopicRecord> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}
