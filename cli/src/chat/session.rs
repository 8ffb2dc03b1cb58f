//! # Chat Session
//!
//! File: cli/src/chat/session.rs
//!
//! ## Overview
//!
//! `ChatSession` owns the transcript and the loading flag of one chat and
//! implements the submit operation:
//!
//! 1. Blank input is ignored: no message, no request.
//! 2. The user message is appended and the loading flag is raised.
//! 3. Exactly one request goes to the `ChunkFinder`.
//! 4. The answer, or the variant's fallback text on any failure, is appended
//!    as a bot message.
//! 5. The loading flag is cleared whatever the outcome.
//!
//! ## Architecture
//!
//! Two traits keep the session free of terminal and network code:
//! - `ChunkFinder`: performs the remote call (`common::http::BackendClient`)
//! - `ChatView`: reflects appends and loading changes (`common::ui::terminal`)
//!
//! The session is shared through `Arc` so several submissions can be in flight
//! at once. Nothing orders their completions: a later question can be answered
//! first, and the first completion clears the single loading flag.
//!
//! ## Examples
//!
//! ```rust
//! let session = Arc::new(ChatSession::new(Variant::Classic, finder, view));
//! match session.submit("¿Cuándo cierra la inscripción?").await {
//!     SubmitOutcome::Answered(msg) => println!("{}", msg.text()),
//!     SubmitOutcome::Failed(msg) => eprintln!("{}", msg.text()),
//!     SubmitOutcome::Ignored => {}
//! }
//! ```
//!
use super::message::Message;
use super::profile::UserProfile;
use super::transcript::Transcript;
use super::variant::Variant;
use crate::core::error::ChatError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Sends one query to the chunk-finding backend and returns its answer text.
#[async_trait]
pub trait ChunkFinder: Send + Sync {
    async fn find_chunk(&self, query: &str) -> Result<String, ChatError>;
}

/// Receives every visible state change of a session.
pub trait ChatView: Send + Sync {
    fn message_appended(&self, message: &Message);
    fn loading_changed(&self, loading: bool);
}

/// Result of one call to [`ChatSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened.
    Ignored,
    /// The backend answered; holds the appended bot message.
    Answered(Message),
    /// The request failed; holds the appended fallback message.
    Failed(Message),
}

impl SubmitOutcome {
    pub fn bot_message(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Answered(msg) | SubmitOutcome::Failed(msg) => Some(msg),
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    transcript: Transcript,
    loading: bool,
}

pub struct ChatSession {
    variant: Variant,
    profile: Option<UserProfile>,
    finder: Arc<dyn ChunkFinder>,
    view: Arc<dyn ChatView>,
    state: Mutex<SessionState>,
}

impl ChatSession {
    pub fn new(variant: Variant, finder: Arc<dyn ChunkFinder>, view: Arc<dyn ChatView>) -> Self {
        Self {
            variant,
            profile: None,
            finder,
            view,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Attaches the profile captured by the welcome screen.
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().loading
    }

    /// Snapshot of the transcript at this instant.
    pub fn transcript(&self) -> Transcript {
        self.lock_state().transcript.clone()
    }

    /// Runs the submit operation for one line of input.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let Some(query) = self.variant.prepare_query(input) else {
            debug!("Ignoring blank input");
            return SubmitOutcome::Ignored;
        };

        self.append(Message::user(query.as_str()));
        self.set_loading(true);

        let outcome = match self.finder.find_chunk(&query).await {
            Ok(answer) => {
                let message = Message::bot(answer);
                self.append(message.clone());
                SubmitOutcome::Answered(message)
            }
            Err(e) => {
                warn!("Query failed: {}", e);
                let message = Message::bot(self.variant.fallback_message());
                self.append(message.clone());
                SubmitOutcome::Failed(message)
            }
        };

        self.set_loading(false);
        outcome
    }

    // The view is notified under the lock so render order matches transcript order.
    fn append(&self, message: Message) {
        let mut state = self.lock_state();
        self.view.message_appended(&message);
        state.transcript.push(message);
    }

    fn set_loading(&self, loading: bool) {
        let mut state = self.lock_state();
        state.loading = loading;
        self.view.loading_changed(loading);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
