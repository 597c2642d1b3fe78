//! The session bootstrapper.
//!
//! One instance runs per dispatched job. The sequence is strictly ordered:
//! connect the transport, resolve the room's topic (best effort), wait for a
//! remote participant, start the realtime session with a topic-conditioned
//! instructions prompt, seed exactly one assistant opening message, and
//! request exactly one spoken response.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::WorkerConfig;
use crate::error::Result;
use crate::prompt;
use crate::realtime::{RealtimeModel, RealtimeProvider};
use crate::tools::ToolRegistry;
use crate::topic::TopicStore;
use crate::transport::RoomTransport;
use crate::types::Role;
use crate::util::with_deadline;

/// Lifecycle phases of one bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    Disconnected,
    Connected,
    TopicResolved,
    ParticipantPresent,
    SessionStarted,
    MessageSeeded,
    ResponseRequested,
}

impl std::fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::TopicResolved => "topic_resolved",
            Self::ParticipantPresent => "participant_present",
            Self::SessionStarted => "session_started",
            Self::MessageSeeded => "message_seeded",
            Self::ResponseRequested => "response_requested",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful bootstrap.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub room: String,
    pub participant: String,
    pub has_topic: bool,
    pub phase: BootstrapPhase,
}

/// Runs the bootstrap sequence against injected collaborators.
///
/// The topic store and realtime provider are process-wide, constructed once
/// at startup and shared across concurrent bootstraps; the transport is owned
/// by the job.
pub struct Bootstrapper {
    topics: Arc<dyn TopicStore>,
    realtime: Arc<dyn RealtimeProvider>,
    tools: ToolRegistry,
    model_name: String,
    voice: Option<String>,
    participant_deadline: Option<Duration>,
}

impl Bootstrapper {
    pub fn new(topics: Arc<dyn TopicStore>, realtime: Arc<dyn RealtimeProvider>) -> Self {
        Self {
            topics,
            realtime,
            tools: ToolRegistry::new(),
            model_name: crate::config::DEFAULT_REALTIME_MODEL.to_string(),
            voice: None,
            participant_deadline: None,
        }
    }

    /// Apply model name, voice, and participant deadline from config.
    pub fn with_config(mut self, config: &WorkerConfig) -> Self {
        self.model_name = config.realtime_model.clone();
        self.voice = config.voice.clone();
        self.participant_deadline = config.participant_deadline;
        self
    }

    /// Attach the tool registry handed to every session (may be empty).
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Bound the wait for a remote participant. `None` waits forever.
    pub fn with_participant_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.participant_deadline = deadline;
        self
    }

    /// Run the bootstrap sequence for one room.
    ///
    /// Transport connection, session start, message seeding, and the response
    /// request propagate errors; the topic lookup never does — it degrades to
    /// the generic prompt.
    pub async fn bootstrap(&self, transport: &mut dyn RoomTransport) -> Result<BootstrapReport> {
        let room = transport.room_name().to_string();

        transport.connect().await?;
        debug!(%room, phase = %BootstrapPhase::Connected, "transport connected");

        let topic = self.resolve_topic(&room).await;
        let has_topic = topic.is_some();
        debug!(%room, has_topic, phase = %BootstrapPhase::TopicResolved, "topic resolved");

        info!(%room, "waiting for participant");
        let participant = with_deadline(
            self.participant_deadline,
            transport.wait_for_participant(),
        )
        .await?;
        info!(%room, participant = %participant.identity, phase = %BootstrapPhase::ParticipantPresent, "participant joined");

        let instructions = prompt::compose_instructions(topic.as_deref());
        let mut model = RealtimeModel::new(instructions)
            .with_model(self.model_name.clone())
            .with_tools(self.tools.clone());
        if let Some(voice) = &self.voice {
            model = model.with_voice(voice.clone());
        }

        let mut session = self
            .realtime
            .start_session(&model, &room, &participant)
            .await?;
        debug!(%room, phase = %BootstrapPhase::SessionStarted, "realtime session started");

        // Exactly one opening message and one response request, in that
        // order. No retry on either.
        let opening = prompt::initial_message(topic.as_deref());
        session.append_message(Role::Assistant, &opening).await?;
        debug!(%room, phase = %BootstrapPhase::MessageSeeded, "opening message seeded");

        session.request_response().await?;
        info!(%room, phase = %BootstrapPhase::ResponseRequested, "bootstrap complete");

        Ok(BootstrapReport {
            room,
            participant: participant.identity,
            has_topic,
            phase: BootstrapPhase::ResponseRequested,
        })
    }

    /// Best-effort topic lookup. A missing row, an empty topic field, and a
    /// lookup error are indistinguishable here: all yield `None`.
    async fn resolve_topic(&self, room: &str) -> Option<String> {
        match self.topics.fetch(room).await {
            Ok(Some(record)) => {
                debug!(%room, record = ?record, "topic record found");
                record.topic.filter(|topic| !topic.is_empty())
            }
            Ok(None) => None,
            Err(e) => {
                warn!(%room, error = %e, transient = e.is_transient(), "topic lookup failed, continuing without topic");
                None
            }
        }
    }
}
