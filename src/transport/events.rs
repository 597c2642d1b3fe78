//! Signaling wire events.

use serde::{Deserialize, Serialize};

/// Events sent to the signaling endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalClientEvent {
    Join { room: String },
    Leave { room: String },
}

/// Events received from the signaling endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalServerEvent {
    Joined { room: String },
    ParticipantJoined { identity: String },
    ParticipantLeft { identity: String },
    Error { message: String },
    /// Forward-compatible catch-all for event types this worker ignores.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_serializes_with_type_tag() {
        let json = serde_json::to_value(SignalClientEvent::Join {
            room: "room-42".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "join");
        assert_eq!(json["room"], "room-42");
    }

    #[test]
    fn unknown_event_types_parse_as_unknown() {
        let event: SignalServerEvent =
            serde_json::from_str(r#"{"type":"speaker_changed","identity":"x"}"#).unwrap();
        assert!(matches!(event, SignalServerEvent::Unknown));
    }

    #[test]
    fn participant_joined_round_trips() {
        let event: SignalServerEvent =
            serde_json::from_str(r#"{"type":"participant_joined","identity":"learner-7"}"#)
                .unwrap();
        assert!(matches!(
            event,
            SignalServerEvent::ParticipantJoined { identity } if identity == "learner-7"
        ));
    }
}
