//! Static data tables and presentation helpers for the Bharat-Drishti dashboard.
//!
//! This crate is UI-framework agnostic: it owns the region datasets, label
//! sets, account directory, and notice tables, and the pure functions that
//! turn them into chart specs, ticker text, and assistant replies. The
//! `client` crate renders what this crate computes.
//!
//! The tables ship as JSON documents embedded at compile time and are parsed
//! and validated once. A load either yields a complete [`Catalog`] or a
//! [`CatalogError`] naming the first gap; lookups on a loaded catalog never
//! fail.

pub mod accounts;
pub mod charts;
pub mod chat;
pub mod error;
pub mod locale;
pub mod notices;
pub mod region;
pub mod ticker;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

pub use accounts::{AccountDirectory, UserAccount};
pub use charts::{AnomalyFilter, ChartSpec, Panel};
pub use chat::{ChatMessage, ChatSender, ReplyPolicy};
pub use error::CatalogError;
pub use locale::{Bilingual, LabelKey, LabelSet, Language};
pub use notices::{Contact, KnowledgeEntry, Notices, Policy};
pub use region::{Region, RegionDataset};

const REGIONS_JSON: &str = include_str!("../data/regions.json");
const LABELS_JSON: &str = include_str!("../data/labels.json");
const ACCOUNTS_JSON: &str = include_str!("../data/accounts.json");
const NOTICES_JSON: &str = include_str!("../data/notices.json");

/// Read-only provider of everything the dashboard displays.
///
/// [`Catalog`] is the embedded implementation; a fetched or generated source
/// can stand in without touching the panels.
pub trait DashboardSource: Send + Sync {
    fn dataset(&self, region: Region) -> &RegionDataset;
    fn labels(&self, language: Language) -> &LabelSet;
    fn accounts(&self) -> &AccountDirectory;
    fn policies(&self) -> &[Policy];
    fn contacts(&self) -> &[Contact];
    fn knowledge_base(&self) -> &[KnowledgeEntry];
}

/// Immutable, validated dashboard tables.
#[derive(Clone, Debug)]
pub struct Catalog {
    regions: BTreeMap<Region, RegionDataset>,
    labels: BTreeMap<Language, LabelSet>,
    accounts: AccountDirectory,
    notices: Notices,
    empty_dataset: RegionDataset,
    empty_labels: LabelSet,
}

impl Catalog {
    /// Parse the embedded documents.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if an embedded document is malformed or
    /// incomplete.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(REGIONS_JSON, LABELS_JSON, ACCOUNTS_JSON, NOTICES_JSON)
    }

    /// Parse and validate the four catalog documents.
    ///
    /// A non-national region whose age distribution is empty inherits the
    /// national records and keeps its own population headline.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and the matching
    /// completeness variant for the first missing region, empty chart
    /// category, missing language, or missing label.
    pub fn from_json(regions: &str, labels: &str, accounts: &str, notices: &str) -> Result<Self, CatalogError> {
        let mut regions: BTreeMap<Region, RegionDataset> = serde_json::from_str(regions)
            .map_err(|e| CatalogError::Parse { document: "regions", message: e.to_string() })?;
        let labels: BTreeMap<Language, LabelSet> = serde_json::from_str(labels)
            .map_err(|e| CatalogError::Parse { document: "labels", message: e.to_string() })?;
        let accounts = AccountDirectory::from_json(accounts)?;
        let notices = Notices::from_json(notices)?;

        inherit_national(&mut regions);

        let catalog = Self {
            regions,
            labels,
            accounts,
            notices,
            empty_dataset: RegionDataset::default(),
            empty_labels: LabelSet::default(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every selectable region and language is fully populated.
    ///
    /// # Errors
    ///
    /// Returns the first gap found, regions before languages.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for region in Region::ALL {
            let dataset = self.regions.get(&region).ok_or(CatalogError::MissingRegion(region))?;
            if let Some(field) = dataset.empty_fields().into_iter().next() {
                return Err(CatalogError::EmptyField { region, field });
            }
        }
        for language in Language::ALL {
            let set = self.labels.get(&language).ok_or(CatalogError::MissingLanguage(language))?;
            if let Some(key) = set.missing_keys().into_iter().next() {
                return Err(CatalogError::MissingLabel { language, key });
            }
        }
        Ok(())
    }
}

fn inherit_national(regions: &mut BTreeMap<Region, RegionDataset>) {
    let Some(national) = regions.get(&Region::India).cloned() else {
        return;
    };
    for (region, dataset) in regions.iter_mut() {
        if !region.is_national() && dataset.age.is_empty() {
            *dataset = dataset.inheriting(&national);
        }
    }
}

impl DashboardSource for Catalog {
    fn dataset(&self, region: Region) -> &RegionDataset {
        self.regions.get(&region).unwrap_or(&self.empty_dataset)
    }

    fn labels(&self, language: Language) -> &LabelSet {
        self.labels.get(&language).unwrap_or(&self.empty_labels)
    }

    fn accounts(&self) -> &AccountDirectory {
        &self.accounts
    }

    fn policies(&self) -> &[Policy] {
        &self.notices.policies
    }

    fn contacts(&self) -> &[Contact] {
        &self.notices.contacts
    }

    fn knowledge_base(&self) -> &[KnowledgeEntry] {
        &self.notices.knowledge_base
    }
}

static BUILTIN: LazyLock<Result<Arc<Catalog>, CatalogError>> = LazyLock::new(|| Catalog::builtin().map(Arc::new));

/// Process-wide embedded catalog, parsed on first use.
///
/// # Errors
///
/// Returns the load error of the embedded documents, every time.
pub fn shared() -> Result<Arc<Catalog>, CatalogError> {
    BUILTIN.clone()
}
