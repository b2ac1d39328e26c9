//! Parsing of decision-maker replies.
//!
//! A conversational decision-maker announces each step as a JSON blob,
//! usually inside a fenced code block, sometimes bare, often with prose
//! around it:
//!
//! ````text
//! ```json
//! {
//!     "action": "Circumference calculator",
//!     "action_input": "7.81"
//! }
//! ```
//! ````
//!
//! `parse_action` digs the first such blob out of a reply and turns it into
//! either an [`Invocation`] or a final answer.

use serde_json::{Map, Value};

use crate::arguments::RawArguments;
use crate::error::ToolError;
use crate::tools::Invocation;

/// The `action` value that ends a turn instead of naming a tool.
const FINAL_ANSWER: &str = "Final Answer";

/// One parsed decision-maker step.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentAction {
    /// Call a tool and fold the observation back into the dialogue.
    Invoke(Invocation),
    /// Reply to the user and end the turn.
    FinalAnswer(String),
}

/// Extract the first action blob from a reply. Fenced blocks are searched
/// before bare JSON; surrounding prose is ignored. Replies that contain no
/// object with an `action` key fail with `MalformedAction`; an action blob
/// with an unusable payload fails with the matching argument error.
///
/// ```
/// use reckon_tools::{parse_action, AgentAction, Invocation};
///
/// let reply = r#"{"action": "Circumference calculator", "action_input": "7.81"}"#;
/// assert_eq!(
///     parse_action(reply).unwrap(),
///     AgentAction::Invoke(Invocation::new("Circumference calculator", "7.81"))
/// );
/// ```
pub fn parse_action(reply: &str) -> Result<AgentAction, ToolError> {
    for chunk in fenced_chunks(reply) {
        if let Some(result) = first_action_in(chunk) {
            return result;
        }
    }
    if let Some(result) = first_action_in(reply) {
        return result;
    }
    Err(ToolError::MalformedAction(
        "reply contains no action blob".into(),
    ))
}

/// The contents of ``` fences, in order, with an optional `json` language
/// tag stripped. An unterminated final fence still yields its tail.
fn fenced_chunks(reply: &str) -> Vec<&str> {
    reply
        .split("```")
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(_, chunk)| {
            let chunk = chunk.trim_start();
            chunk
                .strip_prefix("json")
                .or_else(|| chunk.strip_prefix("JSON"))
                .unwrap_or(chunk)
        })
        .collect()
}

/// Scan a piece of text for JSON objects and return the first that claims to
/// be an action. Objects without an `action` key are skipped.
fn first_action_in(text: &str) -> Option<Result<AgentAction, ToolError>> {
    for object in json_objects(text) {
        if let Some(result) = action_from_object(&object) {
            return Some(result);
        }
    }
    None
}

/// Every JSON object parseable from some `{` in the text, leading with the
/// earliest. Trailing prose after a complete object is fine.
fn json_objects(text: &str) -> Vec<Map<String, Value>> {
    let mut objects = Vec::new();
    for (index, _) in text.match_indices('{') {
        let mut stream = serde_json::Deserializer::from_str(&text[index..]).into_iter::<Value>();
        if let Some(Ok(Value::Object(map))) = stream.next() {
            objects.push(map);
        }
    }
    objects
}

/// `None` when the object is not an action blob at all; `Some(Err)` when it
/// is one but unusable.
fn action_from_object(object: &Map<String, Value>) -> Option<Result<AgentAction, ToolError>> {
    let action = object.get("action")?;
    let Some(action) = action.as_str() else {
        return Some(Err(ToolError::MalformedAction(
            "'action' must be a string".into(),
        )));
    };
    let Some(input) = object.get("action_input") else {
        return Some(Err(ToolError::MalformedAction(format!(
            "action {action:?} carries no 'action_input'"
        ))));
    };

    if action == FINAL_ANSWER {
        let answer = match input {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Some(Ok(AgentAction::FinalAnswer(answer)));
    }

    Some(match RawArguments::from_value(input) {
        Ok(arguments) => Ok(AgentAction::Invoke(Invocation::new(action, arguments))),
        Err(err) => Err(err),
    })
}
