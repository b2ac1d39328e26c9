//! Reliable arithmetic for conversational agents: typed calculator tools, a
//! registry that advertises them, and an adapter that turns a
//! decision-maker's messy action blobs into validated invocations.

pub mod action;
pub mod arguments;
pub mod error;
pub mod prompt;
pub mod tools;
pub mod transcript;

use std::sync::Arc;

pub use action::{parse_action, AgentAction};
pub use arguments::{ParamSpec, RawArguments, ToolInput, ToolSchema};
pub use error::ToolError;
pub use prompt::{decision_prompt, tool_lines};
pub use tools::{
    CircumferenceTool, Dispatcher, HypotenuseTool, Invocation, Observation, Tool, ToolCapability,
    ToolRegistry,
};
pub use transcript::{Exchange, TranscriptWindow};

/// Everything the decision-maker is handed for one turn: persona text plus a
/// frozen snapshot of the tools on offer. Changing the tool set mid
/// conversation means deriving a new config with [`TurnConfig::with_registry`];
/// turns still holding the old config keep dispatching against the old set.
#[derive(Clone)]
pub struct TurnConfig {
    system_prompt: String,
    registry: Arc<ToolRegistry>,
}

impl TurnConfig {
    pub fn new(system_prompt: impl Into<String>, registry: ToolRegistry) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            registry: Arc::new(registry),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// A dispatcher bound to this config's tool snapshot.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::shared(Arc::clone(&self.registry))
    }

    pub fn capabilities(&self) -> Vec<ToolCapability> {
        self.registry.capabilities()
    }

    /// The full prompt for this turn: persona, tool listing, response format.
    pub fn decision_prompt(&self) -> String {
        prompt::decision_prompt(&self.system_prompt, &self.capabilities())
    }

    /// A new config with a different tool set and the same persona.
    pub fn with_registry(&self, registry: ToolRegistry) -> Self {
        Self {
            system_prompt: self.system_prompt.clone(),
            registry: Arc::new(registry),
        }
    }

    /// A new config with different persona text and the same tool set.
    pub fn with_system_prompt(&self, system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            registry: Arc::clone(&self.registry),
        }
    }
}
