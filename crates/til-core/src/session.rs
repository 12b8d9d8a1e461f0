//! Session identity.
//!
//! A [`Session`] answers "who is signed in" and triggers sign-in/sign-out.
//! Components only ever read it; the actual login mechanics live in the
//! implementation (wallet redirect in the browser, [`LocalSession`] offline).

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::TilResult;
use crate::types::AccountId;

pub trait Session {
    /// The signed-in account, if any
    fn account_id(&self) -> Option<AccountId>;

    fn is_signed_in(&self) -> bool {
        self.account_id().is_some()
    }

    /// Start signing in. May navigate away from the page.
    fn sign_in(&self) -> TilResult<()>;

    fn sign_out(&self) -> TilResult<()>;
}

impl<T: Session + ?Sized> Session for Rc<T> {
    fn account_id(&self) -> Option<AccountId> {
        (**self).account_id()
    }

    fn is_signed_in(&self) -> bool {
        (**self).is_signed_in()
    }

    fn sign_in(&self) -> TilResult<()> {
        (**self).sign_in()
    }

    fn sign_out(&self) -> TilResult<()> {
        (**self).sign_out()
    }
}

/// In-process session that signs in as a fixed account
#[derive(Debug)]
pub struct LocalSession {
    identity: AccountId,
    current: RefCell<Option<AccountId>>,
}

impl LocalSession {
    /// A signed-out session that will sign in as `identity`
    pub fn new(identity: AccountId) -> Self {
        Self {
            identity,
            current: RefCell::new(None),
        }
    }

    /// A session already signed in as `identity`
    pub fn signed_in(identity: AccountId) -> Self {
        Self {
            current: RefCell::new(Some(identity.clone())),
            identity,
        }
    }
}

impl Session for LocalSession {
    fn account_id(&self) -> Option<AccountId> {
        self.current.borrow().clone()
    }

    fn sign_in(&self) -> TilResult<()> {
        tracing::info!(account = %self.identity, "local session signed in");
        *self.current.borrow_mut() = Some(self.identity.clone());
        Ok(())
    }

    fn sign_out(&self) -> TilResult<()> {
        tracing::info!("local session signed out");
        *self.current.borrow_mut() = None;
        Ok(())
    }
}
