pub mod circumference;
pub mod dispatch;
pub mod hypotenuse;
pub mod registry;

pub use circumference::CircumferenceTool;
pub use dispatch::{Dispatcher, Invocation, Observation};
pub use hypotenuse::HypotenuseTool;
pub use registry::ToolRegistry;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use crate::arguments::{ToolInput, ToolSchema};
use crate::error::ToolError;

/// A deterministic, named function an external decision-maker may invoke.
/// Implementations are stateless and side-effect free; `run` only ever sees
/// input already bound against `schema` (the dispatch boundary rejects
/// everything else), so its own failures are domain checks.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable identifier the decision-maker dispatches on.
    fn name(&self) -> &str;

    /// Usage hint for the decision-maker. Not validated by this crate.
    fn description(&self) -> &str;

    /// The declared input shape.
    fn schema(&self) -> ToolSchema;

    /// Execute with validated input.
    async fn run(&self, input: &ToolInput) -> Result<f64, ToolError>;
}

/// The advertisement record for one registered tool — what the agent loop
/// hands its decision-maker.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCapability {
    pub name: String,
    pub description: String,
    pub parameters: Vec<CapabilityParam>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapabilityParam {
    pub name: String,
    pub description: String,
}

impl ToolCapability {
    pub fn from_tool(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool
                .schema()
                .params()
                .iter()
                .map(|p| CapabilityParam {
                    name: p.name.clone(),
                    description: p.description.clone(),
                })
                .collect(),
        }
    }

    /// The complete JSON tool definition (name, description, input_schema)
    /// for API-shaped consumers.
    pub fn schema_json(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::with_capacity(self.parameters.len());
        for param in &self.parameters {
            properties.insert(
                param.name.clone(),
                json!({
                    "type": "number",
                    "description": param.description,
                }),
            );
            required.push(param.name.clone());
        }
        json!({
            "name": self.name,
            "description": self.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_mirrors_the_tool() {
        let cap = ToolCapability::from_tool(&HypotenuseTool);
        assert_eq!(cap.name, "Hypotenuse calculator");
        assert_eq!(
            cap.parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["adjacent_side", "opposite_side"]
        );
    }

    #[test]
    fn schema_json_is_api_shaped() {
        let schema = ToolCapability::from_tool(&CircumferenceTool).schema_json();
        assert_eq!(schema["name"], "Circumference calculator");
        assert_eq!(schema["input_schema"]["type"], "object");
        assert_eq!(
            schema["input_schema"]["properties"]["radius"]["type"],
            "number"
        );
        assert_eq!(schema["input_schema"]["required"][0], "radius");
    }
}
