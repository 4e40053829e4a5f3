//! Display languages and their label sets.
//!
//! DESIGN
//! ======
//! Label keys are a closed enum so a typo in the JSON document is a parse
//! error rather than a blank caption. Completeness of each language's set is
//! checked once when the catalog loads.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Selectable display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Hi];

    /// Short code used as the select option value.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Caption shown in the language selector.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Hi => "HI",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every caption the dashboard renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    Title,
    LoginSubtitle,
    LoginPlaceholder,
    BtnLogin,
    LoginPending,
    PopTitle,
    Population,
    PolicyTitle,
    HelpTitle,
    GhostTitle,
    MigTitle,
    Updates,
    GenderTitle,
    EffTitle,
    BioTitle,
    InsightTitle,
    ChatTitle,
    ChatPlaceholder,
    ChatGreeting,
    ChatReply,
    Ticker,
    Footer,
    LastLogin,
    Live,
    Welcome,
    Male,
    Female,
    Other,
    WaitTime,
    ProcessTime,
    Enrolled,
    Saturation,
    Total,
    Kids,
    Adult,
}

impl LabelKey {
    pub const ALL: [Self; 35] = [
        Self::Title,
        Self::LoginSubtitle,
        Self::LoginPlaceholder,
        Self::BtnLogin,
        Self::LoginPending,
        Self::PopTitle,
        Self::Population,
        Self::PolicyTitle,
        Self::HelpTitle,
        Self::GhostTitle,
        Self::MigTitle,
        Self::Updates,
        Self::GenderTitle,
        Self::EffTitle,
        Self::BioTitle,
        Self::InsightTitle,
        Self::ChatTitle,
        Self::ChatPlaceholder,
        Self::ChatGreeting,
        Self::ChatReply,
        Self::Ticker,
        Self::Footer,
        Self::LastLogin,
        Self::Live,
        Self::Welcome,
        Self::Male,
        Self::Female,
        Self::Other,
        Self::WaitTime,
        Self::ProcessTime,
        Self::Enrolled,
        Self::Saturation,
        Self::Total,
        Self::Kids,
        Self::Adult,
    ];

    /// Key as spelled in the label documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::LoginSubtitle => "login_subtitle",
            Self::LoginPlaceholder => "login_placeholder",
            Self::BtnLogin => "btn_login",
            Self::LoginPending => "login_pending",
            Self::PopTitle => "pop_title",
            Self::Population => "population",
            Self::PolicyTitle => "policy_title",
            Self::HelpTitle => "help_title",
            Self::GhostTitle => "ghost_title",
            Self::MigTitle => "mig_title",
            Self::Updates => "updates",
            Self::GenderTitle => "gender_title",
            Self::EffTitle => "eff_title",
            Self::BioTitle => "bio_title",
            Self::InsightTitle => "insight_title",
            Self::ChatTitle => "chat_title",
            Self::ChatPlaceholder => "chat_placeholder",
            Self::ChatGreeting => "chat_greeting",
            Self::ChatReply => "chat_reply",
            Self::Ticker => "ticker",
            Self::Footer => "footer",
            Self::LastLogin => "last_login",
            Self::Live => "live",
            Self::Welcome => "welcome",
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::WaitTime => "wait_time",
            Self::ProcessTime => "process_time",
            Self::Enrolled => "enrolled",
            Self::Saturation => "saturation",
            Self::Total => "total",
            Self::Kids => "kids",
            Self::Adult => "adult",
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Captions for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    entries: BTreeMap<LabelKey, String>,
}

impl LabelSet {
    /// Caption for `key`, or an empty string when absent.
    #[must_use]
    pub fn get(&self, key: LabelKey) -> &str {
        self.entries.get(&key).map_or("", String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: LabelKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Keys in [`LabelKey::ALL`] order that this set lacks.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<LabelKey> {
        LabelKey::ALL.into_iter().filter(|key| !self.contains(*key)).collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = LabelKey> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<(LabelKey, String)> for LabelSet {
    fn from_iter<I: IntoIterator<Item = (LabelKey, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// A string carried in both display languages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub en: String,
    pub hi: String,
}

impl Bilingual {
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }
}
