//! In-memory TIL contract.
//!
//! Same observable behavior as the deployed contract: ids count up from 0,
//! listings are paged newest first, follow sets drop entries with
//! swap-remove, and writes are attributed to the session's account. Used by
//! the `local` network and as the test double.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::contract::ContractClient;
use crate::error::{TilError, TilResult};
use crate::session::Session;
use crate::types::{AccountId, Page, Post, PostId, MAX_CONTENT_LEN, MAX_PAGE_SIZE};

type Clock = Box<dyn Fn() -> u64>;

#[derive(Default)]
struct MemoryState {
    posts: Vec<Post>,
    user_posts: HashMap<AccountId, Vec<PostId>>,
    followings: HashMap<AccountId, Vec<AccountId>>,
    followers: HashMap<AccountId, Vec<AccountId>>,
}

pub struct MemoryContract {
    state: RefCell<MemoryState>,
    session: Rc<dyn Session>,
    clock: Clock,
}

impl MemoryContract {
    /// Contract whose writes are signed by `session`
    pub fn new(session: Rc<dyn Session>) -> Self {
        Self::with_clock(session, Box::new(crate::time::now_nanos))
    }

    /// Same as [`MemoryContract::new`] with a custom nanosecond clock
    pub fn with_clock(session: Rc<dyn Session>, clock: Clock) -> Self {
        Self {
            state: RefCell::new(MemoryState::default()),
            session,
            clock,
        }
    }

    /// Number of posts stored
    pub fn post_count(&self) -> usize {
        self.state.borrow().posts.len()
    }

    fn signer(&self) -> TilResult<AccountId> {
        self.session.account_id().ok_or(TilError::NotSignedIn)
    }
}

/// Insert keeping set semantics (no duplicates, insertion order)
fn set_insert(set: &mut Vec<AccountId>, account: &AccountId) {
    if !set.contains(account) {
        set.push(account.clone());
    }
}

/// Remove the way an unordered set does: the last element fills the hole
fn set_remove(set: &mut Vec<AccountId>, account: &AccountId) {
    if let Some(pos) = set.iter().position(|a| a == account) {
        set.swap_remove(pos);
    }
}

/// Page through `items` from the newest (last) element backwards
pub(crate) fn paged_descending<T: Clone>(items: &[T], page: Page) -> TilResult<Vec<T>> {
    if page.page_size > MAX_PAGE_SIZE {
        return Err(TilError::PageSizeTooLarge {
            requested: page.page_size,
            max: MAX_PAGE_SIZE,
        });
    }

    let len = items.len() as u64;
    let skipped = page.skipped();
    if skipped >= len {
        return Ok(Vec::new());
    }

    let remaining = (len - skipped) as usize;
    Ok(items[..remaining]
        .iter()
        .rev()
        .take(page.page_size as usize)
        .cloned()
        .collect())
}

#[async_trait(?Send)]
impl ContractClient for MemoryContract {
    async fn create_post(&self, content: &str) -> TilResult<Post> {
        let user = self.signer()?;
        if content.len() > MAX_CONTENT_LEN {
            return Err(TilError::ContentTooLong {
                len: content.len(),
                max: MAX_CONTENT_LEN,
            });
        }

        let mut state = self.state.borrow_mut();
        let post = Post {
            id: state.posts.len() as PostId,
            content: content.to_string(),
            user: user.clone(),
            created_at: (self.clock)(),
        };
        state.posts.push(post.clone());
        state.user_posts.entry(user).or_default().push(post.id);

        tracing::debug!(id = post.id, user = %post.user, "memory contract stored post");
        Ok(post)
    }

    async fn public_timeline(&self, page: Page) -> TilResult<Vec<Post>> {
        paged_descending(&self.state.borrow().posts, page)
    }

    async fn user_timeline(&self, user: &AccountId, page: Page) -> TilResult<Vec<Post>> {
        let state = self.state.borrow();
        let Some(ids) = state.user_posts.get(user) else {
            return Ok(Vec::new());
        };
        Ok(paged_descending(ids, page)?
            .into_iter()
            .filter_map(|id| state.posts.get(id as usize).cloned())
            .collect())
    }

    async fn follow(&self, user: &AccountId) -> TilResult<()> {
        let me = self.signer()?;
        let mut state = self.state.borrow_mut();
        set_insert(state.followings.entry(me.clone()).or_default(), user);
        set_insert(state.followers.entry(user.clone()).or_default(), &me);
        tracing::debug!(follower = %me, followee = %user, "memory contract follow");
        Ok(())
    }

    async fn unfollow(&self, user: &AccountId) -> TilResult<()> {
        let me = self.signer()?;
        let mut state = self.state.borrow_mut();
        if let Some(followings) = state.followings.get_mut(&me) {
            set_remove(followings, user);
        }
        if let Some(followers) = state.followers.get_mut(user) {
            set_remove(followers, &me);
        }
        tracing::debug!(follower = %me, followee = %user, "memory contract unfollow");
        Ok(())
    }

    async fn is_follow(&self, follower: &AccountId, followee: &AccountId) -> TilResult<bool> {
        Ok(self
            .state
            .borrow()
            .followings
            .get(follower)
            .is_some_and(|set| set.contains(followee)))
    }

    async fn followings(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>> {
        match self.state.borrow().followings.get(user) {
            Some(set) => paged_descending(set, page),
            None => Ok(Vec::new()),
        }
    }

    async fn followers(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>> {
        match self.state.borrow().followers.get(user) {
            Some(set) => paged_descending(set, page),
            None => Ok(Vec::new()),
        }
    }
}
