//! Windowed conversation memory.
//!
//! Dialogue history is kept as whole exchanges (one user message and the
//! assistant's final reply) and only the most recent `k` survive. Tool
//! invocations and observations happen inside a turn and never enter the
//! transcript; what the next turn sees is the finished dialogue so far.

use std::collections::VecDeque;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

/// One completed turn of dialogue.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub user: String,
    pub assistant: String,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

/// A sliding window over the last `k` exchanges.
#[derive(Debug, Clone)]
pub struct TranscriptWindow {
    window: usize,
    exchanges: VecDeque<Exchange>,
}

impl TranscriptWindow {
    /// A window that retains the `window` most recent exchanges. A window of
    /// zero retains nothing and every turn starts from a blank history.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            exchanges: VecDeque::with_capacity(window),
        }
    }

    /// Record a finished exchange, evicting the oldest once the window is
    /// full.
    pub fn record(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        if self.window == 0 {
            return;
        }
        while self.exchanges.len() >= self.window {
            let evicted = self.exchanges.pop_front();
            if let Some(old) = evicted {
                debug!(user = %old.user, "exchange evicted from transcript window");
            }
        }
        self.exchanges.push_back(Exchange {
            user: user.into(),
            assistant: assistant.into(),
            recorded_at: chrono::Utc::now(),
        });
    }

    /// Retained exchanges, oldest first.
    pub fn exchanges(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }

    /// The history as alternating role-tagged messages, ready to precede the
    /// next user message in an inference request.
    pub fn messages(&self) -> Vec<Value> {
        let mut messages = Vec::with_capacity(self.exchanges.len() * 2);
        for exchange in &self.exchanges {
            messages.push(json!({"role": "user", "content": exchange.user}));
            messages.push(json!({"role": "assistant", "content": exchange.assistant}));
        }
        messages
    }

    /// The history as `Human:` / `Assistant:` lines, for prompts that carry
    /// it inline as text.
    pub fn render_lines(&self) -> String {
        let mut rendered = String::new();
        for exchange in &self.exchanges {
            rendered.push_str("Human: ");
            rendered.push_str(&exchange.user);
            rendered.push('\n');
            rendered.push_str("Assistant: ");
            rendered.push_str(&exchange.assistant);
            rendered.push('\n');
        }
        rendered
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
