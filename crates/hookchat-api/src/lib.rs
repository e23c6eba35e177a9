//! # hookchat-api
//!
//! The reply-fetching side of hookchat: a [`ReplyFetcher`] capability that
//! turns a session id plus a user message into the webhook's JSON reply,
//! and [`WebhookClient`], its reqwest-backed implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hookchat_api::{ReplyFetcher, WebhookClient};
//! use hookchat_types::SessionId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = WebhookClient::new("http://localhost:5678/webhook/chat");
//!     match client.fetch_reply(&SessionId::generate(), "Hello!").await {
//!         Ok(body) => println!("Reply body: {}", body),
//!         Err(e) => eprintln!("{}", e.user_message()),
//!     }
//! }
//! ```

pub mod client;

use async_trait::async_trait;
use hookchat_types::{FetchError, SessionId};

pub use client::{RequestLogging, WebhookClient};

/// Capability to obtain the webhook's reply for one user message.
///
/// Returns the decoded JSON body of a 2xx response; interpreting it is the
/// caller's business.
#[async_trait]
pub trait ReplyFetcher: Send + Sync {
    async fn fetch_reply(
        &self,
        session_id: &SessionId,
        message: &str,
    ) -> Result<serde_json::Value, FetchError>;
}
