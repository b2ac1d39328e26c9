use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::arguments::RawArguments;
use crate::error::ToolError;
use crate::tools::{ToolCapability, ToolRegistry};

/// A request naming a tool and supplying arguments for one call. Created per
/// agent turn, consumed by one dispatch, discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub tool_name: String,
    pub arguments: RawArguments,
}

impl Invocation {
    pub fn new(tool_name: impl Into<String>, arguments: impl Into<RawArguments>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: arguments.into(),
        }
    }
}

/// The successful result of one invocation. Displays as the bare numeral —
/// the text an agent loop splices after `Observation:` — and leaves all
/// natural-language framing to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub value: f64,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The invocation adapter: looks the tool up, binds the raw arguments
/// against its schema, runs it, and wraps the result. One attempt per
/// dispatch, no retries, every failure propagated to the caller.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Build on an already shared registry without copying it.
    pub fn shared(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Advertise the registered tools to the decision-maker, in registration
    /// order.
    pub fn advertise(&self) -> Vec<ToolCapability> {
        self.registry.capabilities()
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run one invocation through lookup → bind → run.
    pub async fn dispatch(&self, invocation: &Invocation) -> Result<Observation, ToolError> {
        let tool = match self.registry.lookup(&invocation.tool_name) {
            Ok(tool) => tool,
            Err(err) => {
                warn!(tool = %invocation.tool_name, "dispatch to unregistered tool");
                return Err(err);
            }
        };
        let input = tool.schema().bind(&invocation.arguments)?;
        let value = tool.run(&input).await?;
        debug!(tool = tool.name(), value, "tool invocation complete");
        Ok(Observation { value })
    }
}
