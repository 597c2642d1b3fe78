//! Convenience re-exports.

pub use crate::bootstrap::{BootstrapPhase, BootstrapReport, Bootstrapper};
pub use crate::config::WorkerConfig;
pub use crate::error::{MinervaError, Result};
pub use crate::realtime::{ConversationSession, RealtimeModel, RealtimeProvider};
pub use crate::tools::{AgentTool, Tool, ToolParameters, ToolRegistry};
pub use crate::topic::{TopicRecord, TopicStore};
pub use crate::transport::{Participant, RoomTransport};
pub use crate::types::{ConversationItem, Role};
