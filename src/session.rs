//! Page-lifetime chat state.
//!
//! `ChatSession` owns everything the chat panel shows: the message sequence,
//! the welcome placeholder, the typing indicator and the in-flight turn. The
//! Dioxus views only mirror it, so every transition here is testable without
//! a browser.

use crate::api::{BotReply, ChatResult, ExchangeError};
use crate::types::{ERROR_REPLY, Message, MessageKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WelcomeState {
    #[default]
    Visible,
    /// Still in the panel but not displayed (first focus of the input).
    Hidden,
    /// Taken out of the panel by the first submission.
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnId(u64);

/// A submission accepted by [`ChatSession::begin_turn`], waiting for its reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub id: TurnId,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<Message>,
    welcome: WelcomeState,
    focus_seen: bool,
    typing: bool,
    pending: Option<TurnId>,
    next_turn: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn welcome(&self) -> WelcomeState {
        self.welcome
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Entries currently in the panel, counting the welcome placeholder.
    pub fn rendered_len(&self) -> usize {
        let welcome = usize::from(self.welcome != WelcomeState::Removed);
        self.messages.len() + welcome
    }

    /// First focus of the input hides the welcome placeholder. Later focus
    /// events, including any after a clear, do nothing.
    pub fn focus_input(&mut self) {
        if self.focus_seen {
            return;
        }
        self.focus_seen = true;
        if self.welcome == WelcomeState::Visible {
            self.welcome = WelcomeState::Hidden;
        }
    }

    /// Accept a submission. Returns `None`, without touching any state, when
    /// the trimmed input is empty or another turn is still pending.
    pub fn begin_turn(&mut self, raw: &str) -> Option<PendingTurn> {
        let text = raw.trim();
        if text.is_empty() || self.pending.is_some() {
            return None;
        }

        self.welcome = WelcomeState::Removed;
        self.messages.push(Message::user(text));
        self.show_typing();

        self.next_turn += 1;
        let id = TurnId(self.next_turn);
        self.pending = Some(id);
        Some(PendingTurn {
            id,
            text: text.to_string(),
        })
    }

    /// Render the outcome of a turn. Results for a turn that is no longer
    /// pending are dropped; returns whether anything was rendered.
    pub fn complete_turn(&mut self, id: TurnId, result: ChatResult<BotReply>) -> bool {
        if self.pending != Some(id) {
            tracing::debug!(turn = id.0, "discarding reply for stale turn");
            return false;
        }
        self.pending = None;
        self.hide_typing();

        let message = match result {
            Ok(reply) => Message::bot(reply.message, reply.kind),
            Err(err) => {
                log_exchange_failure(&err);
                Message::bot(ERROR_REPLY, MessageKind::Error)
            }
        };
        self.messages.push(message);
        true
    }

    /// Abandon the pending turn without rendering a reply.
    pub fn cancel_turn(&mut self) -> Option<TurnId> {
        let id = self.pending.take()?;
        self.hide_typing();
        tracing::debug!(turn = id.0, "turn cancelled");
        Some(id)
    }

    /// Reset the panel to the welcome placeholder. Callers confirm first.
    pub fn clear(&mut self) {
        self.cancel_turn();
        self.messages.clear();
        self.welcome = WelcomeState::Visible;
    }

    pub fn show_typing(&mut self) {
        self.typing = true;
    }

    pub fn hide_typing(&mut self) {
        self.typing = false;
    }
}

fn log_exchange_failure(err: &ExchangeError) {
    tracing::warn!(error = %err, "chat exchange failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_hides_welcome_once() {
        let mut session = ChatSession::new();
        session.focus_input();
        assert_eq!(session.welcome(), WelcomeState::Hidden);

        session.clear();
        session.focus_input();
        assert_eq!(session.welcome(), WelcomeState::Visible);
    }

    #[test]
    fn test_turn_ids_increase() {
        let mut session = ChatSession::new();
        let first = session.begin_turn("a").expect("first turn");
        session.cancel_turn();
        let second = session.begin_turn("b").expect("second turn");
        assert!(second.id > first.id);
    }

    #[test]
    fn test_typing_toggles_idempotent() {
        let mut session = ChatSession::new();
        session.show_typing();
        session.show_typing();
        assert!(session.is_typing());
        session.hide_typing();
        session.hide_typing();
        assert!(!session.is_typing());
    }

    #[test]
    fn test_cancel_without_pending() {
        let mut session = ChatSession::new();
        assert_eq!(session.cancel_turn(), None);
    }
}
