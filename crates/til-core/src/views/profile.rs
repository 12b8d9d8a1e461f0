//! User profile data: the account's posts and its follow lists.

use crate::contract::ContractClient;
use crate::types::{AccountId, Page, Post};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserProfile {
    pub posts: Vec<Post>,
    pub followings: Vec<AccountId>,
    pub followers: Vec<AccountId>,
    /// Messages from reads that failed; the matching list stays empty
    pub errors: Vec<String>,
}

impl UserProfile {
    /// Read the first page of each list for `user`
    pub async fn load(contract: &dyn ContractClient, user: &AccountId, page: Page) -> Self {
        let mut profile = UserProfile::default();

        match contract.user_timeline(user, page).await {
            Ok(posts) => profile.posts = posts,
            Err(e) => profile.failed("timeline", user, e.to_string()),
        }
        match contract.followings(user, page).await {
            Ok(accounts) => profile.followings = accounts,
            Err(e) => profile.failed("followings", user, e.to_string()),
        }
        match contract.followers(user, page).await {
            Ok(accounts) => profile.followers = accounts,
            Err(e) => profile.failed("followers", user, e.to_string()),
        }

        profile
    }

    fn failed(&mut self, what: &str, user: &AccountId, message: String) {
        tracing::warn!(user = %user, "Failed to load {}: {}", what, message);
        self.errors.push(message);
    }
}
