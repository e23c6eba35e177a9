//! Conversation management for hookchat
//!
//! This crate provides session-id bootstrapping, the conversation state
//! machine, the send workflow that drives it and the view model the
//! terminal renderer paints.

pub mod session;
pub mod state;
pub mod view;
pub mod workflow;

// Re-export commonly used types
pub use session::{bootstrap_session, FileSessionStore, MemorySessionStore, SessionStore};
pub use state::{extract_reply_text, ConversationState, PendingSend, SendPhase};
pub use view::{Alignment, ChatView, ViewItem};
pub use workflow::ChatSession;
