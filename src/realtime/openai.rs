//! OpenAI-style realtime session over WebSocket.

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};

use crate::error::{MinervaError, Result};
use crate::transport::Participant;
use crate::types::{ConversationItem, Role};

use super::events::{RealtimeClientEvent, RealtimeServerEvent, SessionUpdate, WireItem};
use super::{ConversationSession, RealtimeModel, RealtimeProvider};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Realtime provider speaking the OpenAI realtime wire protocol.
///
/// One instance is shared by all bootstraps; each `start_session` opens its
/// own WebSocket.
#[derive(Debug, Clone)]
pub struct OpenAiRealtime {
    url: String,
    api_key: String,
}

impl OpenAiRealtime {
    /// Create a provider for the given endpoint and API key.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl RealtimeProvider for OpenAiRealtime {
    async fn start_session(
        &self,
        model: &RealtimeModel,
        room: &str,
        participant: &Participant,
    ) -> Result<Box<dyn ConversationSession>> {
        let url = format!("{}?model={}", self.url, model.model);
        let mut request = url
            .as_str()
            .into_client_request()
            .map_err(MinervaError::WebSocket)?;
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| MinervaError::Session("invalid realtime API key".into()))?;
        request.headers_mut().insert("authorization", auth);
        request
            .headers_mut()
            .insert("openai-beta", HeaderValue::from_static("realtime=v1"));

        let (socket, _response) = connect_async(request).await?;
        debug!(room, participant = %participant.identity, "realtime socket connected");

        let mut session = OpenAiSession {
            socket,
            items: Vec::new(),
        };
        session.await_created().await?;
        session
            .send(&RealtimeClientEvent::SessionUpdate {
                session: SessionUpdate {
                    instructions: model.instructions.clone(),
                    voice: model.voice.clone(),
                    tools: model.tools.wire_schemas(),
                },
            })
            .await?;

        Ok(Box::new(session))
    }
}

/// One live realtime conversation.
#[derive(Debug)]
struct OpenAiSession {
    socket: WsStream,
    items: Vec<ConversationItem>,
}

impl OpenAiSession {
    async fn send(&mut self, event: &RealtimeClientEvent) -> Result<()> {
        let payload = serde_json::to_string(event)?;
        self.socket.send(Message::Text(payload)).await?;
        Ok(())
    }

    /// Read events until the server confirms the session exists.
    async fn await_created(&mut self) -> Result<()> {
        loop {
            let frame = self
                .socket
                .next()
                .await
                .ok_or_else(|| MinervaError::Session("realtime connection closed".into()))??;
            let Message::Text(text) = frame else {
                continue;
            };
            match serde_json::from_str(&text) {
                Ok(RealtimeServerEvent::SessionCreated) => return Ok(()),
                Ok(RealtimeServerEvent::Error { error }) => {
                    return Err(MinervaError::Session(error.to_string()));
                }
                Ok(RealtimeServerEvent::Unknown) => {}
                Err(e) => {
                    warn!(error = %e, "ignoring malformed realtime event");
                }
            }
        }
    }
}

#[async_trait]
impl ConversationSession for OpenAiSession {
    async fn append_message(&mut self, role: Role, text: &str) -> Result<()> {
        self.send(&RealtimeClientEvent::ConversationItemCreate {
            item: WireItem::message(role, text),
        })
        .await?;
        self.items.push(ConversationItem::new(role, text));
        Ok(())
    }

    async fn request_response(&mut self) -> Result<()> {
        self.send(&RealtimeClientEvent::ResponseCreate {}).await
    }

    fn items(&self) -> &[ConversationItem] {
        &self.items
    }
}
