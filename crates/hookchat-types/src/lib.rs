//! Core types and structures for hookchat
//!
//! This crate provides the foundational types shared by all hookchat crates:
//! conversation messages, the session identifier, the webhook wire payload
//! and the error raised when fetching a reply fails.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// Storage key under which the session identifier is persisted
pub const SESSION_STORAGE_KEY: &str = "chatbot-session-id";

/// Webhook used when nothing else is configured
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n-service-pa9k.onrender.com/webhook/433709cf-fbc1-4a64-84aa-e9cdea16b6f5";

/// Error shown when the webhook could not be reached at all
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: Check if n8n workflow is active and CORS is enabled";

/// Header title
pub const APP_TITLE: &str = "Chatbot Assistant v1.1";

/// Header subtitle
pub const APP_SUBTITLE: &str = "Always here to help";

// ============================================================================
// Session Types
// ============================================================================

/// Opaque identifier correlating this device's messages on the webhook side.
///
/// An empty id is valid; it is forwarded unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random (UUID v4) identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// One entry of the conversation thread. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    content: String,
    is_bot: bool,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Message typed by the user
    pub fn user(content: impl Into<String>) -> Self {
        Self::create(content.into(), false)
    }

    /// Reply received from the webhook
    pub fn bot(content: impl Into<String>) -> Self {
        Self::create(content.into(), true)
    }

    fn create(content: String, is_bot: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            is_bot,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Local time-of-day stamp, e.g. `3:04:05 PM`
    pub fn local_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%-I:%M:%S %p")
            .to_string()
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body POSTed to the webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub session_id: SessionId,
    pub message: String,
}

// ============================================================================
// Error Types
// ============================================================================

/// Failure of a single reply fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The webhook answered with a non-2xx status
    #[error("HTTP error! status: {status} - {body}")]
    Http { status: u16, body: String },

    /// No response could be obtained (connection refused, DNS, reset...)
    #[error("{0}")]
    Network(String),

    /// A 2xx response whose body could not be decoded
    #[error("{0}")]
    Decode(String),

    /// Anything else, e.g. a request that could not be built
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Text placed in the error banner for this failure
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
