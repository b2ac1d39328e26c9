/// Everything that can go wrong between a decision-maker's request and a
/// numeric observation. Errors propagate upward to the agent loop unchanged —
/// nothing in this crate retries or swallows them.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The requested tool name is not registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A tool with this name is already registered.
    #[error("duplicate tool name: {0}")]
    DuplicateName(String),

    /// The supplied arguments do not match the tool's declared shape
    /// (wrong arity, unknown or missing parameter names, non-numeric values).
    #[error("malformed arguments: {0}")]
    MalformedArguments(String),

    /// The arguments had the right shape but a value is outside the tool's
    /// domain (non-positive radius, negative leg, both legs zero).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A decision-maker reply contained no usable action blob.
    #[error("malformed action: {0}")]
    MalformedAction(String),
}

impl ToolError {
    /// True for the error kinds a dispatch can produce from bad model output
    /// (as opposed to registration mistakes in the host program).
    pub fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_)
                | Self::MalformedArguments(_)
                | Self::InvalidArgument(_)
                | Self::MalformedAction(_)
        )
    }
}
