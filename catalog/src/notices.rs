//! Language-independent announcement tables: policies, helplines, and the
//! assistant's keyword knowledge base.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::locale::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    New,
    Upcoming,
    Mandatory,
}

impl PolicyStatus {
    /// Badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::New => "NEW",
            Self::Upcoming => "UPCOMING",
            Self::Mandatory => "MANDATORY",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Green,
            Self::New => Tone::Blue,
            Self::Upcoming => Tone::Orange,
            Self::Mandatory => Tone::Red,
        }
    }
}

/// Color family used for badges and contact tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Red,
    Blue,
    Orange,
    Green,
}

impl Tone {
    /// CSS modifier suffix, e.g. `badge--green`.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }
}

/// Government directive. Text is English-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub text: String,
    pub status: PolicyStatus,
}

/// Emergency helpline tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub number: String,
    pub agency: String,
    pub tone: Tone,
}

/// Canned assistant answer triggered by any of its keywords.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub keywords: Vec<String>,
    pub response: Bilingual,
}

impl KnowledgeEntry {
    /// True when any keyword appears as a whole word in `input`, ignoring case.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        let lowered = input.to_lowercase();
        let words: Vec<&str> = lowered.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).collect();
        self.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            words.iter().any(|word| *word == keyword)
        })
    }
}

/// First knowledge entry matching `input`, in table order.
#[must_use]
pub fn match_knowledge<'a>(entries: &'a [KnowledgeEntry], input: &str) -> Option<&'a KnowledgeEntry> {
    entries.iter().find(|entry| entry.matches(input))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Notices {
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub knowledge_base: Vec<KnowledgeEntry>,
}

impl Notices {
    pub(crate) fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse { document: "notices", message: e.to_string() })
    }
}
