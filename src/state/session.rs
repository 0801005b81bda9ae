//! Conversation session: the message list and the single in-flight question.
//!
//! DESIGN
//! ======
//! The session is last-request-wins, not a queue. Asking a new question (or
//! clearing the conversation) aborts whatever call is still outstanding, and
//! the aborted call never touches the message list or the loading flag.
//!
//! Each `ask` takes a generation number. The call that owns the in-flight
//! slot is the one whose generation is stored there; settling checks that
//! and mutates under the same lock, so a stale answer that slips past the
//! abort is still discarded.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view holds a clone of the session in a Leptos context and mirrors
//! state into a signal through [`ConversationSession::subscribe`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{self, AbortHandle, Abortable, Aborted, LocalBoxFuture};

use super::chat::Message;
use crate::net::api::AnswerClient;
use crate::net::error::ApiError;

/// Point-in-time copy of the session handed to listeners.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub loading: bool,
}

pub type SessionListener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct InFlight {
    generation: u64,
    handle: AbortHandle,
}

#[derive(Default)]
struct SessionInner {
    messages: Vec<Message>,
    /// Loading is exactly "some call owns this slot".
    in_flight: Option<InFlight>,
    generation: u64,
    conversation_id: Option<String>,
    listeners: Vec<SessionListener>,
}

impl SessionInner {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot { messages: self.messages.clone(), loading: self.in_flight.is_some() }
    }

    fn cancel_in_flight(&mut self, reason: &str) {
        if let Some(prev) = self.in_flight.take() {
            log::debug!("cancelling question #{} ({reason})", prev.generation);
            prev.handle.abort();
        }
    }

    /// Listeners and the state to hand them, collected while locked.
    fn pending_notification(&self) -> (Vec<SessionListener>, SessionSnapshot) {
        (self.listeners.clone(), self.snapshot())
    }
}

/// Cloneable handle to one conversation.
#[derive(Clone)]
pub struct ConversationSession {
    inner: Arc<Mutex<SessionInner>>,
    client: Arc<dyn AnswerClient>,
}

impl ConversationSession {
    #[must_use]
    pub fn new(client: Arc<dyn AnswerClient>) -> Self {
        Self { inner: Arc::new(Mutex::new(SessionInner::default())), client }
    }

    /// Forward `conversation_id` with every question asked from now on.
    #[must_use]
    pub fn with_conversation_id(self, conversation_id: impl Into<String>) -> Self {
        self.lock().conversation_id = Some(conversation_id.into());
        self
    }

    #[must_use]
    pub fn conversation_id(&self) -> Option<String> {
        self.lock().conversation_id.clone()
    }

    /// Ask a question.
    ///
    /// The user message is appended and the loading flag raised before this
    /// returns; the returned future performs the call and settles it. A
    /// blank question is ignored and yields a ready future.
    ///
    /// Failures become an assistant message carrying the error's
    /// user-facing text. Nothing is reported back to the caller.
    pub fn ask(&self, question: &str) -> LocalBoxFuture<'static, ()> {
        if question.trim().is_empty() {
            return Box::pin(future::ready(()));
        }

        let (handle, registration) = AbortHandle::new_pair();
        let (generation, conversation_id, (listeners, snapshot)) = {
            let mut inner = self.lock();
            inner.cancel_in_flight("superseded");
            inner.generation += 1;
            let generation = inner.generation;
            inner.messages.push(Message::user(question));
            inner.in_flight = Some(InFlight { generation, handle });
            (generation, inner.conversation_id.clone(), inner.pending_notification())
        };
        notify(&listeners, &snapshot);

        let session = self.clone();
        let question = question.to_owned();
        Box::pin(async move {
            let call = session.client.send_question(&question, conversation_id.as_deref());
            let outcome = Abortable::new(call, registration).await;
            session.settle(generation, outcome);
        })
    }

    /// Empty the conversation and cancel any outstanding question.
    pub fn clear_messages(&self) {
        let (listeners, snapshot) = {
            let mut inner = self.lock();
            inner.cancel_in_flight("conversation cleared");
            inner.messages.clear();
            inner.pending_notification()
        };
        notify(&listeners, &snapshot);
    }

    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().in_flight.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Call `listener` with a fresh snapshot after every state change.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + Send + Sync + 'static) {
        self.lock().listeners.push(Arc::new(listener));
    }

    fn settle(&self, generation: u64, outcome: Result<Result<Message, ApiError>, Aborted>) {
        let (listeners, snapshot) = {
            let mut inner = self.lock();
            let owns_slot = inner.in_flight.as_ref().is_some_and(|f| f.generation == generation);
            let result = match outcome {
                Ok(result) if owns_slot => result,
                _ => {
                    log::debug!("discarding result of cancelled question #{generation}");
                    return;
                }
            };

            inner.in_flight = None;
            match result {
                Ok(answer) => inner.messages.push(answer),
                Err(e) => {
                    log::warn!("question #{generation} failed: {e}");
                    inner.messages.push(Message::assistant_notice(e.user_message()));
                }
            }
            inner.pending_notification()
        };
        notify(&listeners, &snapshot);
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn notify(listeners: &[SessionListener], snapshot: &SessionSnapshot) {
    for listener in listeners {
        listener(snapshot);
    }
}
