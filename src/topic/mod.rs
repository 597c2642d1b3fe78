//! Per-room topic lookup.

pub mod postgrest;

pub use postgrest::PostgrestTopicStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A per-room personalization hint.
///
/// The `topic` field may be absent; the bootstrapper treats an absent or
/// empty topic the same as a missing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Read-only, single-row topic lookup keyed by room id.
#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Fetch the topic record for a room, if one exists.
    async fn fetch(&self, room_id: &str) -> Result<Option<TopicRecord>>;
}
