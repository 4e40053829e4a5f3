//! Fixed directory of official accounts used by the simulated login.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    pub display_name: String,
    pub role: String,
    /// Preformatted timestamp shown in the header.
    pub last_login: String,
}

impl UserAccount {
    /// First character of the display name, used for the avatar badge.
    #[must_use]
    pub fn initial(&self) -> String {
        self.display_name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct AccountDocument {
    default_email: String,
    accounts: Vec<UserAccount>,
}

/// Account list plus the account every unmatched login resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountDirectory {
    accounts: Vec<UserAccount>,
    default_index: usize,
}

impl AccountDirectory {
    /// Build a directory whose fallback is the account with `default_email`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoAccounts`] for an empty list and
    /// [`CatalogError::UnknownDefaultAccount`] when no account carries
    /// `default_email`.
    pub fn new(accounts: Vec<UserAccount>, default_email: &str) -> Result<Self, CatalogError> {
        if accounts.is_empty() {
            return Err(CatalogError::NoAccounts);
        }
        let default_index = position_of(&accounts, default_email)
            .ok_or_else(|| CatalogError::UnknownDefaultAccount(default_email.to_owned()))?;
        Ok(Self { accounts, default_index })
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: AccountDocument = serde_json::from_str(raw)
            .map_err(|e| CatalogError::Parse { document: "accounts", message: e.to_string() })?;
        Self::new(doc.accounts, &doc.default_email)
    }

    /// Account whose email equals `email` ignoring case, if any.
    #[must_use]
    pub fn find(&self, email: &str) -> Option<&UserAccount> {
        position_of(&self.accounts, email).map(|index| &self.accounts[index])
    }

    /// Resolve a login identifier. Never fails: unknown identifiers map to
    /// the default account.
    #[must_use]
    pub fn resolve(&self, email: &str) -> &UserAccount {
        self.find(email).unwrap_or_else(|| self.default_account())
    }

    #[must_use]
    pub fn default_account(&self) -> &UserAccount {
        &self.accounts[self.default_index]
    }

    #[must_use]
    pub fn accounts(&self) -> &[UserAccount] {
        &self.accounts
    }
}

fn position_of(accounts: &[UserAccount], email: &str) -> Option<usize> {
    let wanted = email.to_lowercase();
    accounts.iter().position(|account| account.email.to_lowercase() == wanted)
}
