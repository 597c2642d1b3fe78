//! Capability map of registered tools.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::MinervaError;

use super::tool::Tool;

/// Registry of tools available to a realtime session, keyed by name.
///
/// Legitimately empty in the current deployment; the session wiring and the
/// wire schema export work the same way with zero or many entries.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Replaces any previous tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|k| k.as_str()).collect()
    }

    /// Execute a registered tool by name.
    pub async fn execute(&self, name: &str, args: serde_json::Value) -> Result<String, MinervaError> {
        let tool = self.get(name).ok_or_else(|| MinervaError::ToolExecution {
            tool_name: name.to_string(),
            message: "tool not registered".to_string(),
        })?;
        tool.execute(args).await
    }

    /// Export tool definitions in the realtime provider's wire format.
    pub fn wire_schemas(&self) -> Vec<serde_json::Value> {
        self.tools
            .values()
            .map(|tool| {
                serde_json::json!({
                    "type": "function",
                    "name": tool.name(),
                    "description": tool.description(),
                    "parameters": tool.parameters().schema,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("names", &self.names())
            .finish()
    }
}
