//! Assistant chat log and open/closed toggle.
//!
//! The log is append-only for the life of the page. Each accepted prompt
//! hands out a ticket; the delayed bot reply is appended only by presenting
//! that ticket, so one prompt yields exactly one reply.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::BTreeSet;
use std::time::Duration;

use catalog::ChatMessage;

/// Delay between a user prompt and the bot reply.
pub const CHAT_REPLY_DELAY: Duration = Duration::from_millis(800);

/// A prompt accepted by [`ChatState::submit`], awaiting its reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: u64,
    pub prompt: String,
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub open: bool,
    pending: BTreeSet<u64>,
    next_ticket: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { messages: Vec::new(), open: true, pending: BTreeSet::new(), next_ticket: 0 }
    }
}

impl ChatState {
    /// Fresh log seeded with the bot greeting.
    #[must_use]
    pub fn with_greeting(greeting: &str) -> Self {
        let mut state = Self::default();
        state.messages.push(ChatMessage::bot(greeting));
        state
    }

    /// Append `input` as a user message unless it is blank.
    ///
    /// The text is kept as typed; only the emptiness check trims.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.next_ticket += 1;
        self.pending.insert(self.next_ticket);
        Some(PendingReply { ticket: self.next_ticket, prompt: input.to_owned() })
    }

    /// Append the bot reply for `ticket`. Returns `false` for unknown or
    /// already answered tickets.
    pub fn deliver(&mut self, ticket: u64, reply: String) -> bool {
        if !self.pending.remove(&ticket) {
            return false;
        }
        self.messages.push(ChatMessage::bot(reply));
        true
    }

    #[must_use]
    pub fn awaiting_reply(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
