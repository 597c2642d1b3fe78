//! Realtime speech model seam.

pub mod events;
pub mod openai;

pub use openai::OpenAiRealtime;

use async_trait::async_trait;

use crate::config::DEFAULT_REALTIME_MODEL;
use crate::error::Result;
use crate::tools::ToolRegistry;
use crate::transport::Participant;
use crate::types::{ConversationItem, Role};

/// Parameters for one realtime conversational model instance.
///
/// Built once per bootstrap; the instructions prompt is immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct RealtimeModel {
    pub instructions: String,
    pub model: String,
    pub voice: Option<String>,
    pub tools: ToolRegistry,
}

impl RealtimeModel {
    /// Create a model handle with the given instructions prompt.
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            model: DEFAULT_REALTIME_MODEL.to_string(),
            voice: None,
            tools: ToolRegistry::new(),
        }
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the voice preset.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Attach a tool registry (may be empty).
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }
}

/// A live, stateful model conversation with an ordered message log.
#[async_trait]
pub trait ConversationSession: Send + std::fmt::Debug {
    /// Append a message to the conversation log.
    async fn append_message(&mut self, role: Role, text: &str) -> Result<()>;

    /// Ask the model to produce the next spoken turn over the log so far.
    async fn request_response(&mut self) -> Result<()>;

    /// Local mirror of the items appended through this handle.
    fn items(&self) -> &[ConversationItem];
}

/// External realtime inference service.
#[async_trait]
pub trait RealtimeProvider: Send + Sync {
    /// Start an agent session bound to a model, room, and participant.
    async fn start_session(
        &self,
        model: &RealtimeModel,
        room: &str,
        participant: &Participant,
    ) -> Result<Box<dyn ConversationSession>>;
}
