//! Load-time errors for the embedded dashboard tables.

use crate::locale::{LabelKey, Language};
use crate::region::{Region, RegionField};

/// Error returned when a catalog document is malformed or incomplete.
///
/// Every variant is raised while loading; once a [`crate::Catalog`] exists
/// its lookups cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A JSON document could not be deserialized.
    #[error("failed to parse {document}: {message}")]
    Parse { document: &'static str, message: String },

    /// No dataset was supplied for a selectable region.
    #[error("missing dataset for region {0}")]
    MissingRegion(Region),

    /// A region supplied an empty array for a charted category.
    #[error("region {region} has no {field} records")]
    EmptyField { region: Region, field: RegionField },

    /// A language has no label set at all.
    #[error("missing label set for language {0}")]
    MissingLanguage(Language),

    /// A label set lacks a key referenced by the UI.
    #[error("label {key} missing for language {language}")]
    MissingLabel { language: Language, key: LabelKey },

    /// The account list is empty.
    #[error("account directory is empty")]
    NoAccounts,

    /// The configured fallback account is not in the list.
    #[error("default account {0} is not in the account directory")]
    UnknownDefaultAccount(String),
}
