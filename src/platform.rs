//! Browser glue: localStorage keys, fetch transport, wallet redirects, alerts.

use std::rc::Rc;

use async_trait::async_trait;
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde_json::Value;
use til_core::near::{JsonRpcClient, NearContract, Signer};
use til_core::{
    AccountId, Config, ContractClient, KeyPair, KeyStore, LocalSession, MemoryContract, NetworkId,
    RpcTransport, Session, TilError, TilResult, WalletConnection,
};

use crate::context::AppServices;

/// Blocking user-facing message
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

fn js_error(e: wasm_bindgen::JsValue) -> TilError {
    TilError::Storage(format!("{:?}", e))
}

/// Key store over `window.localStorage`, raw strings
pub struct LocalStorageKeyStore;

impl KeyStore for LocalStorageKeyStore {
    fn get(&self, key: &str) -> TilResult<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> TilResult<()> {
        LocalStorage::raw().set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> TilResult<()> {
        LocalStorage::raw().remove_item(key).map_err(js_error)
    }
}

/// JSON-RPC over the browser's fetch
pub struct FetchTransport;

#[async_trait(?Send)]
impl RpcTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: &Value) -> TilResult<Value> {
        let transport = |e: gloo::net::Error| TilError::Transport(e.to_string());

        let response = Request::post(url)
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let json = response.json::<Value>().await;
        match json {
            Ok(value) if status < 400 || value.get("error").is_some() => Ok(value),
            Ok(_) => Err(TilError::Transport(format!("HTTP {} from {}", status, url))),
            Err(e) => Err(TilError::Transport(format!("HTTP {}: {}", status, e))),
        }
    }
}

fn location() -> TilResult<web_sys::Location> {
    web_sys::window()
        .map(|w| w.location())
        .ok_or_else(|| TilError::Wallet("no window".to_string()))
}

/// Session backed by the NEAR wallet redirect flow
pub struct BrowserSession {
    wallet: WalletConnection<LocalStorageKeyStore>,
}

impl BrowserSession {
    /// Load the stored session and finish a login if the wallet just
    /// redirected back here
    pub fn connect(config: &Config) -> Self {
        let session = Self {
            wallet: WalletConnection::new(config, LocalStorageKeyStore),
        };
        session.complete_redirect();
        session
    }

    fn complete_redirect(&self) {
        let Ok(query) = location().and_then(|l| l.search().map_err(js_error)) else {
            return;
        };
        if query.is_empty() {
            return;
        }
        match self.wallet.complete_sign_in(&query) {
            Ok(Some(account)) => {
                tracing::info!(account = %account, "signed in through wallet");
                strip_query();
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Failed to complete wallet sign-in: {}", e),
        }
    }
}

/// Drop the wallet's callback parameters from the address bar
fn strip_query() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
        {
            tracing::warn!("Failed to clean up url: {:?}", e);
        }
    }
}

impl Session for BrowserSession {
    fn account_id(&self) -> Option<AccountId> {
        self.wallet.account_id()
    }

    fn sign_in(&self) -> TilResult<()> {
        let location = location()?;
        let here = location.href().map_err(js_error)?;
        let url = self.wallet.request_sign_in(&here, &here)?;
        location.set_href(&url).map_err(js_error)
    }

    fn sign_out(&self) -> TilResult<()> {
        self.wallet.sign_out()?;
        let location = location()?;
        let origin = location.origin().map_err(js_error)?;
        let path = location.pathname().map_err(js_error)?;
        location.replace(&format!("{}{}", origin, path)).map_err(js_error)
    }
}

impl Signer for BrowserSession {
    fn signer(&self) -> Option<(AccountId, KeyPair)> {
        self.wallet.signer()
    }
}

/// Wire up the contract client and session for the configured network
pub fn build_services(config: Config) -> AppServices {
    tracing::info!(
        network = %config.network,
        contract = %config.contract_name,
        "initializing TIL services"
    );

    let (contract, session) = match config.network {
        NetworkId::Local => {
            let session: Rc<dyn Session> = Rc::new(LocalSession::new(config.local_account.clone()));
            let contract: Rc<dyn ContractClient> = Rc::new(MemoryContract::new(session.clone()));
            (contract, session)
        }
        NetworkId::Testnet | NetworkId::Mainnet => {
            let browser = Rc::new(BrowserSession::connect(&config));
            let rpc = JsonRpcClient::new(FetchTransport, config.node_url.clone());
            let contract: Rc<dyn ContractClient> = Rc::new(NearContract::new(
                rpc,
                config.contract_name.clone(),
                browser.clone(),
            ));
            let session: Rc<dyn Session> = browser;
            (contract, session)
        }
    };

    AppServices {
        config: Rc::new(config),
        contract,
        session,
    }
}
