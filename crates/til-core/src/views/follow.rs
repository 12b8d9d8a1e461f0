//! Follow control state.
//!
//! The relationship is queried once per control. Toggling flips the local
//! state only after the write has succeeded.

use crate::contract::ContractClient;
use crate::error::{TilError, TilResult};
use crate::types::AccountId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    /// Viewing your own profile
    Hidden,
    NotFollowing,
    Following,
}

impl FollowState {
    /// Button text, `None` when nothing is rendered
    pub fn label(&self) -> Option<&'static str> {
        match self {
            FollowState::Hidden => None,
            FollowState::NotFollowing => Some("Follow"),
            FollowState::Following => Some("Following"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowAction {
    Follow,
    Unfollow,
}

impl FollowAction {
    /// Issue the write for this action against `subject`
    pub async fn perform(self, contract: &dyn ContractClient, subject: &AccountId) -> TilResult<()> {
        match self {
            FollowAction::Follow => contract.follow(subject).await,
            FollowAction::Unfollow => contract.unfollow(subject).await,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowControl {
    subject: AccountId,
    viewer: Option<AccountId>,
    state: FollowState,
    checked: bool,
    pending: bool,
    /// A write has been issued; later check results are stale
    toggled: bool,
}

impl FollowControl {
    /// Control for `subject` as seen by `viewer`
    pub fn new(subject: AccountId, viewer: Option<AccountId>) -> Self {
        let state = if viewer.as_ref() == Some(&subject) {
            FollowState::Hidden
        } else {
            FollowState::NotFollowing
        };
        Self {
            subject,
            viewer,
            state,
            checked: false,
            pending: false,
            toggled: false,
        }
    }

    pub fn subject(&self) -> &AccountId {
        &self.subject
    }

    pub fn viewer(&self) -> Option<&AccountId> {
        self.viewer.as_ref()
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The (follower, followee) pair to query, if a check is still due.
    ///
    /// Yields at most once: nothing for your own profile or when signed out.
    pub fn begin_check(&mut self) -> Option<(AccountId, AccountId)> {
        if self.checked || self.state == FollowState::Hidden {
            return None;
        }
        let viewer = self.viewer.clone()?;
        self.checked = true;
        Some((viewer, self.subject.clone()))
    }

    /// Apply the relationship query. Ignored once a toggle has started.
    pub fn finish_check(&mut self, result: TilResult<bool>) {
        if self.toggled {
            tracing::debug!(subject = %self.subject, "dropping follow check after toggle");
            return;
        }
        match result {
            Ok(true) => self.state = FollowState::Following,
            Ok(false) => self.state = FollowState::NotFollowing,
            Err(e) => tracing::warn!(subject = %self.subject, "Failed to check follow state: {}", e),
        }
    }

    pub async fn check(&mut self, contract: &dyn ContractClient) {
        if let Some((follower, followee)) = self.begin_check() {
            let result = contract.is_follow(&follower, &followee).await;
            self.finish_check(result);
        }
    }

    /// Start a toggle and return the write to issue.
    ///
    /// `Ok(None)` means there is nothing to do (own profile, or a write is
    /// already in flight). Signed out is an error and issues nothing.
    pub fn begin_toggle(&mut self) -> TilResult<Option<FollowAction>> {
        let action = match self.state {
            FollowState::Hidden => return Ok(None),
            FollowState::NotFollowing => FollowAction::Follow,
            FollowState::Following => FollowAction::Unfollow,
        };
        if self.pending {
            return Ok(None);
        }
        if self.viewer.is_none() {
            return Err(TilError::NotSignedIn);
        }
        self.pending = true;
        self.toggled = true;
        Ok(Some(action))
    }

    /// Apply the outcome of `action`; the state only changes on success
    pub fn finish_toggle(&mut self, action: FollowAction, result: &TilResult<()>) {
        self.pending = false;
        match result {
            Ok(()) => {
                self.state = match action {
                    FollowAction::Follow => FollowState::Following,
                    FollowAction::Unfollow => FollowState::NotFollowing,
                };
                tracing::info!(subject = %self.subject, ?action, "follow state changed");
            }
            Err(e) => tracing::error!(subject = %self.subject, ?action, "Failed to update follow: {}", e),
        }
    }

    pub async fn toggle(&mut self, contract: &dyn ContractClient) -> TilResult<()> {
        let Some(action) = self.begin_toggle()? else {
            return Ok(());
        };
        let result = action.perform(contract, &self.subject).await;
        self.finish_toggle(action, &result);
        result
    }
}
