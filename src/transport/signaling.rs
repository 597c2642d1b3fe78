//! WebSocket signaling client for room control-plane traffic.

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};

use async_trait::async_trait;

use crate::error::{MinervaError, Result};

use super::events::{SignalClientEvent, SignalServerEvent};
use super::{Participant, RoomTransport};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Room transport over a WebSocket signaling endpoint.
///
/// `connect` performs the handshake and joins the room; `wait_for_participant`
/// then reads events until a remote party arrives. One instance serves one
/// bootstrap.
pub struct WsSignalingTransport {
    url: String,
    room: String,
    token: Option<String>,
    socket: Option<WsStream>,
}

impl WsSignalingTransport {
    /// Create a transport for `room` against the signaling endpoint `url`.
    pub fn new(url: impl Into<String>, room: impl Into<String>, token: Option<String>) -> Self {
        Self {
            url: url.into(),
            room: room.into(),
            token,
            socket: None,
        }
    }

    async fn send_event(&mut self, event: &SignalClientEvent) -> Result<()> {
        let socket = self
            .socket
            .as_mut()
            .ok_or_else(|| MinervaError::InvalidState("signaling socket not connected".into()))?;
        let payload = serde_json::to_string(event)?;
        socket.send(Message::Text(payload)).await?;
        Ok(())
    }

    /// Read the next server event, skipping non-text frames.
    async fn next_event(&mut self) -> Result<SignalServerEvent> {
        let socket = self
            .socket
            .as_mut()
            .ok_or_else(|| MinervaError::InvalidState("signaling socket not connected".into()))?;
        loop {
            let frame = socket
                .next()
                .await
                .ok_or_else(|| MinervaError::Transport("signaling connection closed".into()))??;
            match frame {
                Message::Text(text) => match serde_json::from_str(&text) {
                    Ok(event) => return Ok(event),
                    Err(e) => {
                        warn!(error = %e, "ignoring malformed signaling event");
                    }
                },
                Message::Close(_) => {
                    return Err(MinervaError::Transport("signaling connection closed".into()))
                }
                _ => {} // ping/pong/binary, handled by the socket itself
            }
        }
    }
}

#[async_trait]
impl RoomTransport for WsSignalingTransport {
    fn room_name(&self) -> &str {
        &self.room
    }

    async fn connect(&mut self) -> Result<()> {
        let mut request = self
            .url
            .as_str()
            .into_client_request()
            .map_err(MinervaError::WebSocket)?;
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| MinervaError::Transport("invalid signaling token".into()))?;
            request.headers_mut().insert("authorization", value);
        }

        let (socket, _response) = connect_async(request).await?;
        self.socket = Some(socket);
        debug!(room = %self.room, "signaling socket connected");

        self.send_event(&SignalClientEvent::Join {
            room: self.room.clone(),
        })
        .await?;

        // The join must be acknowledged before the room is usable.
        loop {
            match self.next_event().await? {
                SignalServerEvent::Joined { room } if room == self.room => {
                    debug!(room = %room, "joined room");
                    return Ok(());
                }
                SignalServerEvent::Joined { room } => {
                    return Err(MinervaError::Transport(format!(
                        "joined unexpected room {room}"
                    )));
                }
                SignalServerEvent::Error { message } => {
                    return Err(MinervaError::Transport(message));
                }
                other => {
                    debug!(?other, "ignoring signaling event before join ack");
                }
            }
        }
    }

    async fn wait_for_participant(&mut self) -> Result<Participant> {
        loop {
            match self.next_event().await? {
                SignalServerEvent::ParticipantJoined { identity } => {
                    return Ok(Participant { identity });
                }
                SignalServerEvent::Error { message } => {
                    return Err(MinervaError::Transport(message));
                }
                other => {
                    debug!(?other, "ignoring signaling event while waiting for participant");
                }
            }
        }
    }
}
