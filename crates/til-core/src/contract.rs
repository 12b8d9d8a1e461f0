//! The TIL contract interface.
//!
//! Every durable read and write goes through [`ContractClient`]. Two
//! implementations exist: [`crate::memory::MemoryContract`] for local use and
//! tests, and [`crate::near::NearContract`] for a deployed contract.

use async_trait::async_trait;

use crate::error::TilResult;
use crate::types::{AccountId, Page, Post};

/// Contract method names as deployed
pub mod methods {
    pub const CREATE_POST: &str = "create_post";
    pub const PUBLIC_TIMELINE: &str = "public_timeline";
    pub const USER_TIMELINE: &str = "user_timeline";
    pub const FOLLOW: &str = "follow";
    pub const UNFOLLOW: &str = "unfollow";
    pub const IS_FOLLOW: &str = "is_follow";
    pub const FOLLOWINGS: &str = "followings";
    pub const FOLLOWERS: &str = "followers";
}

/// Calls into the TIL contract.
///
/// Listings come back newest first, exactly as the contract orders them.
/// Writes are attributed to whoever signs them; implementations return
/// [`crate::TilError::NotSignedIn`] when there is no signer.
#[async_trait(?Send)]
pub trait ContractClient {
    /// Publish a post as the signed-in account
    async fn create_post(&self, content: &str) -> TilResult<Post>;

    /// Posts from everyone
    async fn public_timeline(&self, page: Page) -> TilResult<Vec<Post>>;

    /// Posts authored by `user`
    async fn user_timeline(&self, user: &AccountId, page: Page) -> TilResult<Vec<Post>>;

    async fn follow(&self, user: &AccountId) -> TilResult<()>;

    async fn unfollow(&self, user: &AccountId) -> TilResult<()>;

    /// Whether `follower` follows `followee`
    async fn is_follow(&self, follower: &AccountId, followee: &AccountId) -> TilResult<bool>;

    /// Accounts `user` follows
    async fn followings(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>>;

    /// Accounts following `user`
    async fn followers(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>>;
}
