//! Service context for TIL.
//!
//! The contract client and session are built once in `App` and handed to
//! every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let contract = use_contract();
//! let viewer = use_viewer();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use til_core::{AccountId, Config, ContractClient, Page, Session};

/// Shared handles to the backend, provided at the root
#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<Config>,
    pub contract: Rc<dyn ContractClient>,
    pub session: Rc<dyn Session>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.contract, &other.contract)
            && Rc::ptr_eq(&self.session, &other.session)
    }
}

impl AppServices {
    /// Page requested for every listing
    pub fn page(&self) -> Page {
        Page::first(self.config.page_size)
    }
}

/// Bumped whenever the session signs in or out in place.
///
/// Sessions are not reactive themselves; reading this signal is what makes a
/// component re-render after a local sign-in.
#[derive(Clone, Copy)]
pub struct SessionEpoch(pub Signal<u64>);

impl SessionEpoch {
    pub fn bump(&mut self) {
        let next = *self.0.peek() + 1;
        self.0.set(next);
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

pub fn use_contract() -> Rc<dyn ContractClient> {
    use_services().contract
}

pub fn use_session() -> Rc<dyn Session> {
    use_services().session
}

pub fn use_session_epoch() -> SessionEpoch {
    use_context::<SessionEpoch>()
}

/// The signed-in account, re-evaluated when the session changes
pub fn use_viewer() -> Option<AccountId> {
    let session = use_session();
    let epoch = use_session_epoch();
    // subscribe
    let _ = epoch.0.read();
    session.account_id()
}
