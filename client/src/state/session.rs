//! Simulated login session for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page calls [`SessionState::submit`] synchronously and schedules
//! [`SessionState::complete`] after [`LOGIN_DELAY`]. The dashboard renders
//! only once a user is set. There is no logout; a reload starts over.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use catalog::{AccountDirectory, UserAccount};

/// Artificial verification delay before the resolved account is applied.
pub const LOGIN_DELAY: Duration = Duration::from_millis(800);

/// Login lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    LoggedOut,
    /// Account already resolved, waiting for the delay to elapse.
    Pending { account: UserAccount, ticket: u64 },
    LoggedIn(UserAccount),
}

/// Session state owned by the root component.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: LoginPhase,
    next_ticket: u64,
}

impl SessionState {
    /// Resolve `email` against `directory` and enter `Pending`.
    ///
    /// Returns the ticket the delayed completion must present, or `None` when
    /// already logged in. A second submit while pending supersedes the first.
    pub fn submit(&mut self, email: &str, directory: &AccountDirectory) -> Option<u64> {
        if matches!(self.phase, LoginPhase::LoggedIn(_)) {
            return None;
        }
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let account = directory.resolve(email).clone();
        self.phase = LoginPhase::Pending { account, ticket };
        Some(ticket)
    }

    /// Apply the pending account if `ticket` is still current.
    ///
    /// Returns `true` when this call logged the user in.
    pub fn complete(&mut self, ticket: u64) -> bool {
        let LoginPhase::Pending { account, ticket: current } = &self.phase else {
            return false;
        };
        if *current != ticket {
            return false;
        }
        self.phase = LoginPhase::LoggedIn(account.clone());
        true
    }

    /// The logged-in account. `None` while logged out or pending.
    #[must_use]
    pub fn user(&self) -> Option<&UserAccount> {
        match &self.phase {
            LoginPhase::LoggedIn(account) => Some(account),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, LoginPhase::Pending { .. })
    }
}
