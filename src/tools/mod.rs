//! Callable tools exposed to the realtime model.
//!
//! The registry is a capability map: each entry carries a name, a
//! description, a JSON-schema parameter definition, and an async executor
//! returning text. A deployment may register no tools at all; the bootstrap
//! shape does not change when tools are added later.

pub mod registry;
pub mod tool;
pub mod types;

pub use registry::ToolRegistry;
pub use tool::{AgentTool, Tool};
pub use types::ToolParameters;
