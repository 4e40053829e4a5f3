//! Assistant message model and reply selection.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::locale::{LabelKey, LabelSet, Language};
use crate::notices::{KnowledgeEntry, match_knowledge};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: ChatSender::User, text: text.into() }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: ChatSender::Bot, text: text.into() }
    }
}

/// How the assistant picks its answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyPolicy {
    /// Ignore the prompt; answer with the language's canned reply.
    #[default]
    Canned,
    /// Answer from the first knowledge entry whose keyword appears in the
    /// prompt, else the canned reply.
    KnowledgeBase,
}

/// Text of the bot reply to `prompt`.
#[must_use]
pub fn bot_reply(
    policy: ReplyPolicy,
    prompt: &str,
    language: Language,
    labels: &LabelSet,
    knowledge: &[KnowledgeEntry],
) -> String {
    if policy == ReplyPolicy::KnowledgeBase {
        if let Some(entry) = match_knowledge(knowledge, prompt) {
            return entry.response.get(language).to_owned();
        }
    }
    labels.get(LabelKey::ChatReply).to_owned()
}
