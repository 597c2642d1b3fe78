//! Realtime provider wire events.

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Events sent to the realtime endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RealtimeClientEvent {
    #[serde(rename = "session.update")]
    SessionUpdate { session: SessionUpdate },
    #[serde(rename = "conversation.item.create")]
    ConversationItemCreate { item: WireItem },
    #[serde(rename = "response.create")]
    ResponseCreate {},
}

/// Session parameters carried by `session.update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<serde_json::Value>,
}

/// A conversation item in wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: Role,
    pub content: Vec<WireContent>,
}

impl WireItem {
    /// A plain text message item.
    pub fn message(role: Role, text: impl Into<String>) -> Self {
        Self {
            kind: "message".to_string(),
            role,
            content: vec![WireContent {
                kind: "text".to_string(),
                text: text.into(),
            }],
        }
    }
}

/// One content part of a conversation item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Events received from the realtime endpoint. Only the handful the
/// bootstrapper acts on are modeled; everything else is `Unknown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RealtimeServerEvent {
    #[serde(rename = "session.created")]
    SessionCreated,
    #[serde(rename = "error")]
    Error { error: serde_json::Value },
    #[serde(other)]
    Unknown,
}
