//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use til_core::{
    AccountId, ContractClient, LocalSession, MemoryContract, Page, Post, Session, TilError,
    TilResult,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn account(id: &str) -> AccountId {
    id.parse().unwrap()
}

/// In-memory contract that records every call and can be told to fail
pub struct RecordingContract {
    inner: MemoryContract,
    calls: RefCell<Vec<String>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
}

impl RecordingContract {
    pub fn new(session: Rc<dyn Session>) -> Self {
        Self {
            inner: MemoryContract::with_clock(session, Box::new(|| 1_653_485_695_227_452_700)),
            calls: RefCell::default(),
            fail_reads: Cell::new(false),
            fail_writes: Cell::new(false),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == method).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, method: &str) {
        self.calls.borrow_mut().push(method.to_string());
    }

    fn read(&self, method: &str) -> TilResult<()> {
        self.record(method);
        if self.fail_reads.get() {
            return Err(TilError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn write(&self, method: &str) -> TilResult<()> {
        self.record(method);
        if self.fail_writes.get() {
            return Err(TilError::Contract("Smart contract panicked".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ContractClient for RecordingContract {
    async fn create_post(&self, content: &str) -> TilResult<Post> {
        self.write("create_post")?;
        self.inner.create_post(content).await
    }

    async fn public_timeline(&self, page: Page) -> TilResult<Vec<Post>> {
        self.read("public_timeline")?;
        self.inner.public_timeline(page).await
    }

    async fn user_timeline(&self, user: &AccountId, page: Page) -> TilResult<Vec<Post>> {
        self.read("user_timeline")?;
        self.inner.user_timeline(user, page).await
    }

    async fn follow(&self, user: &AccountId) -> TilResult<()> {
        self.write("follow")?;
        self.inner.follow(user).await
    }

    async fn unfollow(&self, user: &AccountId) -> TilResult<()> {
        self.write("unfollow")?;
        self.inner.unfollow(user).await
    }

    async fn is_follow(&self, follower: &AccountId, followee: &AccountId) -> TilResult<bool> {
        self.read("is_follow")?;
        self.inner.is_follow(follower, followee).await
    }

    async fn followings(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>> {
        self.read("followings")?;
        self.inner.followings(user, page).await
    }

    async fn followers(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>> {
        self.read("followers")?;
        self.inner.followers(user, page).await
    }
}

/// A session plus a recording contract signing as that session
pub struct Fixture {
    pub session: Rc<LocalSession>,
    pub contract: RecordingContract,
}

impl Fixture {
    pub fn signed_in(id: &str) -> Self {
        let session = Rc::new(LocalSession::signed_in(account(id)));
        let contract = RecordingContract::new(session.clone());
        Self { session, contract }
    }

    pub fn signed_out(id: &str) -> Self {
        let session = Rc::new(LocalSession::new(account(id)));
        let contract = RecordingContract::new(session.clone());
        Self { session, contract }
    }
}
