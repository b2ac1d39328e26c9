//! Rendering of the decision prompt.
//!
//! The caller supplies the persona text; this module appends the parts that
//! must stay in lockstep with the rest of the crate: the tool listing (from
//! the registry's advertised capabilities) and the response format the
//! action parser understands.

use crate::tools::ToolCapability;

/// The reply grammar [`crate::parse_action`] accepts, spelled out for the
/// decision-maker.
const RESPONSE_FORMAT: &str = r#"Respond with a single JSON blob in a ```json fenced block, in one of two forms.

To use a tool:

```json
{
    "action": <tool name>,
    "action_input": <tool input>
}
```

To answer the user directly, or once an observation gives you what you need:

```json
{
    "action": "Final Answer",
    "action_input": <your reply to the user>
}
```"#;

/// One `name: description` line per tool, in registration order.
pub fn tool_lines(capabilities: &[ToolCapability]) -> String {
    let mut lines = String::new();
    for cap in capabilities {
        lines.push_str("- ");
        lines.push_str(&cap.name);
        lines.push_str(": ");
        lines.push_str(&cap.description);
        lines.push('\n');
    }
    lines
}

/// Assemble the full decision prompt for one turn: persona text, the tools
/// available this turn, and the response format. Swapping the registry
/// between turns changes only the tool block.
pub fn decision_prompt(system: &str, capabilities: &[ToolCapability]) -> String {
    let mut prompt = String::with_capacity(system.len() + 512);
    prompt.push_str(system.trim_end());
    prompt.push_str("\n\n");
    if capabilities.is_empty() {
        prompt.push_str("You have no tools available this turn.\n");
    } else {
        prompt.push_str("You have access to the following tools:\n\n");
        prompt.push_str(&tool_lines(capabilities));
    }
    prompt.push('\n');
    prompt.push_str(RESPONSE_FORMAT);
    prompt
}
