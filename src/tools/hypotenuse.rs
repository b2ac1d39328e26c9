use async_trait::async_trait;

use crate::arguments::{ParamSpec, ToolInput, ToolSchema};
use crate::error::ToolError;
use crate::tools::Tool;

/// Right-triangle hypotenuse from its two legs: `sqrt(adjacent² + opposite²)`.
/// Both inputs are legs — the hypotenuse is never an input.
pub struct HypotenuseTool;

#[async_trait]
impl Tool for HypotenuseTool {
    fn name(&self) -> &str {
        "Hypotenuse calculator"
    }

    fn description(&self) -> &str {
        "use this tool when you need the length of a right triangle's \
         hypotenuse given the two other sides; the input is a mapping with \
         the numeric fields 'adjacent_side' and 'opposite_side'"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(vec![
            ParamSpec::new("adjacent_side", "one leg of the right triangle"),
            ParamSpec::new("opposite_side", "the other leg of the right triangle"),
        ])
    }

    async fn run(&self, input: &ToolInput) -> Result<f64, ToolError> {
        let adjacent = input.require("adjacent_side")?;
        let opposite = input.require("opposite_side")?;
        for (name, leg) in [("adjacent_side", adjacent), ("opposite_side", opposite)] {
            if !leg.is_finite() || leg < 0.0 {
                return Err(ToolError::InvalidArgument(format!(
                    "{name} must be a non-negative number, got {leg}"
                )));
            }
        }
        if adjacent == 0.0 && opposite == 0.0 {
            return Err(ToolError::InvalidArgument(
                "at least one side must be non-zero".into(),
            ));
        }
        Ok(adjacent.hypot(opposite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
    }

    async fn hypotenuse(adjacent: f64, opposite: f64) -> Result<f64, ToolError> {
        HypotenuseTool
            .run(&ToolInput::from_pairs([
                ("adjacent_side", adjacent),
                ("opposite_side", opposite),
            ]))
            .await
    }

    #[tokio::test]
    async fn matches_the_reference_transcript() {
        let value = hypotenuse(34.0, 51.0).await.unwrap();
        assert!(close(value, 61.29437168288782), "got {value}");
    }

    #[tokio::test]
    async fn pythagorean_triple_is_exact_enough() {
        let value = hypotenuse(3.0, 4.0).await.unwrap();
        assert!(close(value, 5.0), "got {value}");
    }

    #[tokio::test]
    async fn symmetric_in_its_legs() {
        for (a, b) in [(3.0, 4.0), (34.0, 51.0), (0.25, 0.5), (1e3, 2.5)] {
            let ab = hypotenuse(a, b).await.unwrap();
            let ba = hypotenuse(b, a).await.unwrap();
            assert!(close(ab, ba), "({a}, {b}): {ab} vs {ba}");
        }
    }

    #[tokio::test]
    async fn one_zero_leg_degenerates_to_the_other() {
        let value = hypotenuse(0.0, 5.0).await.unwrap();
        assert!(close(value, 5.0));
        let value = hypotenuse(5.0, 0.0).await.unwrap();
        assert!(close(value, 5.0));
    }

    #[tokio::test]
    async fn rejects_two_zero_legs() {
        let err = hypotenuse(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
        assert!(err.to_string().contains("non-zero"));
    }

    #[tokio::test]
    async fn rejects_negative_legs() {
        for (a, b) in [(-3.0, 4.0), (3.0, -4.0), (-3.0, -4.0)] {
            let err = hypotenuse(a, b).await.unwrap_err();
            assert!(matches!(err, ToolError::InvalidArgument(_)));
        }
    }

    #[tokio::test]
    async fn rejects_non_finite_legs() {
        for (a, b) in [(f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            let err = hypotenuse(a, b).await.unwrap_err();
            assert!(matches!(err, ToolError::InvalidArgument(_)));
        }
    }

    #[tokio::test]
    async fn rejects_input_missing_a_leg() {
        let err = HypotenuseTool
            .run(&ToolInput::single("adjacent_side", 3.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
    }

    #[test]
    fn declares_both_legs_in_order() {
        let schema = HypotenuseTool.schema();
        assert_eq!(
            schema
                .params()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>(),
            ["adjacent_side", "opposite_side"]
        );
    }
}
