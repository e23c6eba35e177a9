use serde_json::Value;

use hookchat_types::{FetchError, Message};

/// Where the send workflow currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SendPhase {
    #[default]
    Idle,
    /// Exactly one request is outstanding
    Sending,
    /// Last attempt failed; the banner shows this text until dismissed
    Failed(String),
}

/// Outbound message produced by a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    message: String,
}

impl PendingSend {
    /// Trimmed user text to forward to the webhook
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Conversation thread plus the send workflow's phase.
///
/// Messages are append-only; display order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    phase: SendPhase,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn phase(&self) -> &SendPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SendPhase::Sending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SendPhase::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Submit user input.
    ///
    /// No-op (returns `None`) for blank input or while a send is outstanding.
    /// Otherwise appends the user message, clears any error and enters
    /// `Sending`.
    pub fn submit(&mut self, input: &str) -> Option<PendingSend> {
        let text = input.trim();
        if text.is_empty() || self.is_loading() {
            return None;
        }

        self.messages.push(Message::user(text));
        self.phase = SendPhase::Sending;

        Some(PendingSend {
            message: text.to_string(),
        })
    }

    /// Apply the outcome of the outstanding send.
    ///
    /// Ignored unless a send is outstanding. A `null` body carries no reply
    /// and is reported like a transport failure.
    pub fn complete(&mut self, result: Result<Value, FetchError>) {
        if !self.is_loading() {
            log::warn!("Dropping send result received while no send was outstanding");
            return;
        }

        match result {
            Ok(Value::Null) => {
                let err = FetchError::Network("reply body is null".to_string());
                log::error!("Send failed: {}", err);
                self.phase = SendPhase::Failed(err.user_message());
            }
            Ok(body) => {
                self.messages.push(Message::bot(extract_reply_text(&body)));
                self.phase = SendPhase::Idle;
            }
            Err(err) => {
                log::error!("Send failed: {}", err);
                self.phase = SendPhase::Failed(err.user_message());
            }
        }
    }

    /// Clear the error banner. Returns whether there was one.
    pub fn dismiss_error(&mut self) -> bool {
        if self.error().is_none() {
            return false;
        }
        self.phase = SendPhase::Idle;
        true
    }
}

/// Reply text from a webhook body: `message`, else `response`, else the
/// whole body as compact JSON.
///
/// Fields that are null, false, zero or empty strings are skipped; other
/// non-string values are rendered as JSON text.
pub fn extract_reply_text(body: &Value) -> String {
    ["message", "response"]
        .iter()
        .find_map(|field| body.get(field).and_then(truthy_text))
        .unwrap_or_else(|| body.to_string())
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
