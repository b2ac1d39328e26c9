use async_trait::async_trait;

use crate::arguments::{ParamSpec, ToolInput, ToolSchema};
use crate::error::ToolError;
use crate::tools::Tool;

/// Circle circumference from a radius: `2 * π * radius`.
pub struct CircumferenceTool;

#[async_trait]
impl Tool for CircumferenceTool {
    fn name(&self) -> &str {
        "Circumference calculator"
    }

    fn description(&self) -> &str {
        "use this tool when you need to calculate the circumference of a \
         circle from its radius; the input is a single positive number, the \
         radius"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(vec![ParamSpec::new("radius", "radius of the circle")])
    }

    async fn run(&self, input: &ToolInput) -> Result<f64, ToolError> {
        let radius = input.require("radius")?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ToolError::InvalidArgument(format!(
                "radius must be a positive number, got {radius}"
            )));
        }
        Ok(2.0 * std::f64::consts::PI * radius)
    }
}
