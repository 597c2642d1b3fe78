//! Room transport seam.
//!
//! Only the control plane lives here: joining a room and learning when a
//! remote participant arrives. The audio plane is carried by the external
//! media service end to end.

pub mod events;
pub mod signaling;

pub use signaling::WsSignalingTransport;

use async_trait::async_trait;

use crate::error::Result;

/// A remote party present in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub identity: String,
}

/// One call/room, borrowed by a single bootstrap for its duration.
#[async_trait]
pub trait RoomTransport: Send {
    /// The room identifier, used as the topic lookup key.
    fn room_name(&self) -> &str;

    /// Establish the media-room connection. No retry at this layer.
    async fn connect(&mut self) -> Result<()>;

    /// Block until a remote participant is present.
    async fn wait_for_participant(&mut self) -> Result<Participant>;
}
