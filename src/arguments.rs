use serde_json::{Map, Value};

use crate::error::ToolError;

/// One declared tool parameter. All parameters in this crate are real-valued;
/// the description is for the decision-maker, nothing here interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub description: String,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A tool's declared input shape: an ordered list of named numeric
/// parameters. Binding raw arguments against the schema is the one place
/// shape errors are produced — tools only ever see validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    params: Vec<ParamSpec>,
}

impl ToolSchema {
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// Declared parameters in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    /// Bind raw arguments to this schema, producing the validated input the
    /// tool will run with. Every failure is a `MalformedArguments` naming the
    /// first violation found.
    pub fn bind(&self, args: &RawArguments) -> Result<ToolInput, ToolError> {
        match args {
            RawArguments::Number(v) => self.bind_scalar(*v),
            RawArguments::Text(s) => self.bind_text(s),
            RawArguments::Map(m) => self.bind_map(m),
        }
    }

    fn bind_scalar(&self, value: f64) -> Result<ToolInput, ToolError> {
        if self.arity() != 1 {
            return Err(ToolError::MalformedArguments(format!(
                "a bare number binds a single parameter, but this tool takes {} ({})",
                self.arity(),
                self.param_names().join(", "),
            )));
        }
        Ok(ToolInput {
            values: vec![(self.params[0].name.clone(), value)],
        })
    }

    fn bind_text(&self, text: &str) -> Result<ToolInput, ToolError> {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<f64>() {
            return self.bind_scalar(value);
        }
        // Decision-makers sometimes deliver a JSON object as a string.
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
            return self.bind_map(&map);
        }
        Err(ToolError::MalformedArguments(format!(
            "argument text {trimmed:?} is neither a number nor a JSON object"
        )))
    }

    fn bind_map(&self, map: &Map<String, Value>) -> Result<ToolInput, ToolError> {
        for key in map.keys() {
            if !self.has_param(key) {
                return Err(ToolError::MalformedArguments(format!(
                    "unexpected parameter '{key}' (expected: {})",
                    self.param_names().join(", "),
                )));
            }
        }

        let mut values = Vec::with_capacity(self.arity());
        for param in &self.params {
            let raw = map.get(&param.name).ok_or_else(|| {
                ToolError::MalformedArguments(format!(
                    "missing required parameter '{}'",
                    param.name
                ))
            })?;
            let value = numeric_value(raw).ok_or_else(|| {
                ToolError::MalformedArguments(format!(
                    "parameter '{}' must be numeric, got {}",
                    param.name,
                    json_type_name(raw)
                ))
            })?;
            values.push((param.name.clone(), value));
        }
        Ok(ToolInput { values })
    }

    fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }
}

/// The shapes an `action_input` arrives in: a bare number, free text, or a
/// structured mapping. Which shapes a given tool accepts depends only on its
/// schema — a single-parameter tool takes any of the three, a multi-parameter
/// tool needs a mapping (possibly delivered as text).
#[derive(Debug, Clone, PartialEq)]
pub enum RawArguments {
    Number(f64),
    Text(String),
    Map(Map<String, Value>),
}

impl RawArguments {
    /// Classify a decision-maker's `action_input` JSON value. Arrays,
    /// booleans, and null have no argument interpretation and are rejected.
    pub fn from_value(value: &Value) -> Result<Self, ToolError> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| {
                    ToolError::MalformedArguments(format!(
                        "number {n} does not fit a 64-bit float"
                    ))
                }),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Object(m) => Ok(Self::Map(m.clone())),
            other => Err(ToolError::MalformedArguments(format!(
                "unsupported argument shape: {}",
                json_type_name(other)
            ))),
        }
    }
}

impl From<f64> for RawArguments {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawArguments {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawArguments {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Map<String, Value>> for RawArguments {
    fn from(value: Map<String, Value>) -> Self {
        Self::Map(value)
    }
}

/// Validated numeric input, ordered as the schema declares. Produced by
/// `ToolSchema::bind`; hand-built only in tests and direct tool calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInput {
    values: Vec<(String, f64)>,
}

impl ToolInput {
    /// Input for a single-parameter tool.
    pub fn single(name: impl Into<String>, value: f64) -> Self {
        Self {
            values: vec![(name.into(), value)],
        }
    }

    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self {
            values: pairs.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Fetch a value a tool declared as required. Reachable only by calling
    /// `run` with a hand-built input — the adapter never produces a binding
    /// with holes.
    pub fn require(&self, name: &str) -> Result<f64, ToolError> {
        self.get(name).ok_or_else(|| {
            ToolError::InvalidArgument(format!("no value bound for '{name}'"))
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// JSON numbers and numeric strings count as numeric; models quote numbers
/// often enough that rejecting `"7.81"` would fail real traffic.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
