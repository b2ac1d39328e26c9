use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;
use crate::tools::{Tool, ToolCapability};

/// Catalog of available tools, in registration order. Names are unique;
/// membership never changes on a failed operation. Build one, freeze it
/// behind an `Arc` (see `TurnConfig`), and construct a new registry when the
/// active tool set should change.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Fails with `DuplicateName` if a tool with the same
    /// name is already present, leaving the registry as it was.
    pub fn register(&mut self, tool: impl Tool + 'static) -> Result<(), ToolError> {
        if self.has_tool(tool.name()) {
            return Err(ToolError::DuplicateName(tool.name().to_string()));
        }
        debug!(tool = tool.name(), "tool registered");
        self.tools.push(Arc::new(tool));
        Ok(())
    }

    /// Look up a tool by its exact name.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Tool>, ToolError> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .cloned()
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }

    /// Advertisement records for every tool, in registration order.
    pub fn capabilities(&self) -> Vec<ToolCapability> {
        self.tools
            .iter()
            .map(|t| ToolCapability::from_tool(t.as_ref()))
            .collect()
    }

    /// Complete JSON tool definitions for API-shaped consumers, in
    /// registration order.
    pub fn schemas(&self) -> Vec<Value> {
        self.capabilities()
            .iter()
            .map(ToolCapability::schema_json)
            .collect()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{CircumferenceTool, HypotenuseTool};

    fn calculators() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(CircumferenceTool).unwrap();
        registry.register(HypotenuseTool).unwrap();
        registry
    }

    #[test]
    fn lists_in_registration_order() {
        let registry = calculators();
        assert_eq!(
            registry.tool_names(),
            ["Circumference calculator", "Hypotenuse calculator"]
        );

        let mut reversed = ToolRegistry::new();
        reversed.register(HypotenuseTool).unwrap();
        reversed.register(CircumferenceTool).unwrap();
        assert_eq!(
            reversed.tool_names(),
            ["Hypotenuse calculator", "Circumference calculator"]
        );
    }

    #[test]
    fn duplicate_registration_fails_and_changes_nothing() {
        let mut registry = calculators();
        let err = registry.register(CircumferenceTool).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateName(_)));
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.tool_names(),
            ["Circumference calculator", "Hypotenuse calculator"]
        );
    }

    #[test]
    fn lookup_finds_by_exact_name() {
        let registry = calculators();
        let tool = registry.lookup("Hypotenuse calculator").unwrap();
        assert_eq!(tool.name(), "Hypotenuse calculator");
    }

    #[test]
    fn lookup_misses_with_unknown_tool() {
        let registry = calculators();
        let err = registry.lookup("Nonexistent").err().unwrap();
        assert!(matches!(err, ToolError::UnknownTool(_)));
        // Case and spelling matter.
        assert!(registry.lookup("circumference calculator").is_err());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn capabilities_carry_descriptions_and_parameters() {
        let caps = calculators().capabilities();
        assert_eq!(caps.len(), 2);
        assert_eq!(caps[0].name, "Circumference calculator");
        assert!(!caps[0].description.is_empty());
        assert_eq!(caps[1].parameters.len(), 2);
    }

    #[test]
    fn schemas_are_complete_tool_definitions() {
        let schemas = calculators().schemas();
        assert_eq!(schemas[0]["name"], "Circumference calculator");
        assert!(schemas[1]["input_schema"]["properties"]["opposite_side"].is_object());
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.capabilities().is_empty());
    }
}
