use std::future::Future;
use std::sync::Arc;

use hookchat_api::ReplyFetcher;
use hookchat_types::{FetchError, SessionId};

use crate::state::{ConversationState, PendingSend};
use crate::view::ChatView;

/// One conversation with the webhook: the bootstrapped session id, the
/// reply fetcher, the conversation state and the input field.
pub struct ChatSession {
    session_id: SessionId,
    fetcher: Arc<dyn ReplyFetcher>,
    state: ConversationState,
    input: String,
}

impl ChatSession {
    pub fn new(session_id: SessionId, fetcher: Arc<dyn ReplyFetcher>) -> Self {
        Self {
            session_id,
            fetcher,
            state: ConversationState::new(),
            input: String::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the current input. On success the input field is cleared
    /// right away and the returned message must be dispatched.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        let pending = self.state.submit(&self.input)?;
        self.input.clear();
        Some(pending)
    }

    /// Request future for a pending send. Owns everything it needs so the
    /// caller may drop it to abandon the request.
    pub fn dispatch(
        &self,
        pending: PendingSend,
    ) -> impl Future<Output = Result<serde_json::Value, FetchError>> + Send + 'static {
        let fetcher = Arc::clone(&self.fetcher);
        let session_id = self.session_id.clone();
        async move { fetcher.fetch_reply(&session_id, pending.message()).await }
    }

    pub fn finish_send(&mut self, result: Result<serde_json::Value, FetchError>) {
        self.state.complete(result);
    }

    /// Submit, wait for the reply and apply it. Returns false when the
    /// submit was a no-op.
    pub async fn send(&mut self) -> bool {
        let Some(pending) = self.begin_send() else {
            return false;
        };
        let result = self.dispatch(pending).await;
        self.finish_send(result);
        true
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.state.dismiss_error()
    }

    pub fn view(&self) -> ChatView {
        ChatView::build(&self.state, &self.input)
    }
}
