use super::*;
use crate::{Catalog, DashboardSource};

#[test]
fn canned_reply_depends_only_on_language() {
    let catalog = Catalog::builtin().unwrap();
    let kb = catalog.knowledge_base();
    for prompt in ["hello", "policy", "what is the anomaly in Bihar?", ""] {
        assert_eq!(
            bot_reply(ReplyPolicy::Canned, prompt, Language::En, catalog.labels(Language::En), kb),
            "I am analyzing the data..."
        );
        assert_eq!(
            bot_reply(ReplyPolicy::Canned, prompt, Language::Hi, catalog.labels(Language::Hi), kb),
            "मैं डेटा का विश्लेषण कर रहा हूं..."
        );
    }
}

#[test]
fn knowledge_policy_answers_keywords_in_active_language() {
    let catalog = Catalog::builtin().unwrap();
    let kb = catalog.knowledge_base();
    assert_eq!(
        bot_reply(ReplyPolicy::KnowledgeBase, "Hello!", Language::En, catalog.labels(Language::En), kb),
        "Namaste! I am your AI Assistant."
    );
    assert_eq!(
        bot_reply(ReplyPolicy::KnowledgeBase, "new POLICY?", Language::Hi, catalog.labels(Language::Hi), kb),
        "नवीनतम: जून 2026 तक मुफ्त आधार अपडेट।"
    );
}

#[test]
fn knowledge_policy_falls_back_to_canned() {
    let catalog = Catalog::builtin().unwrap();
    let reply = bot_reply(
        ReplyPolicy::KnowledgeBase,
        "migration numbers",
        Language::En,
        catalog.labels(Language::En),
        catalog.knowledge_base(),
    );
    assert_eq!(reply, "I am analyzing the data...");
}

#[test]
fn default_policy_is_canned() {
    assert_eq!(ReplyPolicy::default(), ReplyPolicy::Canned);
}

#[test]
fn message_constructors_set_sender() {
    assert_eq!(ChatMessage::user("a").sender, ChatSender::User);
    assert_eq!(ChatMessage::bot("b").sender, ChatSender::Bot);
}
