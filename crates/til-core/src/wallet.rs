//! Wallet login flow.
//!
//! Sign-in works by redirect: a fresh key pair is stored as *pending*, the
//! browser goes to the wallet's `/login/` page with that public key, and the
//! wallet comes back with `account_id` and `public_key` in the query. The
//! pending key is then promoted to the account's function-call key, which
//! signs every later change call.
//!
//! Storage layout matches the one near-api-js uses so existing sessions are
//! picked up:
//!
//! ```text
//! {app_key_prefix}_wallet_auth_key            {"accountId": "...", "allKeys": [...]}
//! near-api-js:keystore:{account}:{network}    ed25519:<secret>
//! near-api-js:keystore:pending_key{pk}:{network}
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{Config, NetworkId};
use crate::error::{TilError, TilResult};
use crate::near::{KeyPair, Signer};
use crate::types::AccountId;

const KEYSTORE_PREFIX: &str = "near-api-js:keystore:";
const PENDING_KEY_PREFIX: &str = "pending_key";
const LOGIN_PATH: &str = "/login/";

/// String key/value persistence for keys and the auth record
pub trait KeyStore {
    fn get(&self, key: &str) -> TilResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> TilResult<()>;
    fn remove(&self, key: &str) -> TilResult<()>;
}

impl<K: KeyStore + ?Sized> KeyStore for Rc<K> {
    fn get(&self, key: &str) -> TilResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TilResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> TilResult<()> {
        (**self).remove(key)
    }
}

/// Key store backed by a map, for tests and non-browser use
#[derive(Default, Debug)]
pub struct MemoryKeyStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyStore {
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyStore for MemoryKeyStore {
    fn get(&self, key: &str) -> TilResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TilResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> TilResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthData {
    account_id: Option<AccountId>,
    #[serde(default)]
    all_keys: Vec<String>,
}

/// Wallet-backed session state
pub struct WalletConnection<K> {
    network: NetworkId,
    wallet_url: String,
    contract_name: AccountId,
    auth_key: String,
    store: K,
    auth: RefCell<AuthData>,
}

impl<K: KeyStore> WalletConnection<K> {
    /// Load any existing auth record from `store`
    pub fn new(config: &Config, store: K) -> Self {
        let auth_key = format!("{}_wallet_auth_key", config.app_key_prefix);
        let auth = match store.get(&auth_key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable wallet auth record: {}", e);
                AuthData::default()
            }),
            Ok(None) => AuthData::default(),
            Err(e) => {
                tracing::warn!("Failed to read wallet auth record: {}", e);
                AuthData::default()
            }
        };

        Self {
            network: config.network,
            wallet_url: config.wallet_url.clone(),
            contract_name: config.contract_name.clone(),
            auth_key,
            store,
            auth: RefCell::new(auth),
        }
    }

    pub fn account_id(&self) -> Option<AccountId> {
        self.auth.borrow().account_id.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.account_id().is_some()
    }

    fn account_key_name(&self, account: &AccountId) -> String {
        format!("{}{}:{}", KEYSTORE_PREFIX, account, self.network)
    }

    fn pending_key_name(&self, public_key: &str) -> String {
        format!(
            "{}{}{}:{}",
            KEYSTORE_PREFIX, PENDING_KEY_PREFIX, public_key, self.network
        )
    }

    /// Create a pending key and return the wallet URL to redirect to
    pub fn request_sign_in(&self, success_url: &str, failure_url: &str) -> TilResult<String> {
        let key = KeyPair::generate()?;
        let public_key = key.public_key().to_string();
        self.store
            .set(&self.pending_key_name(&public_key), &key.to_string())?;

        let base = format!("{}{}", self.wallet_url.trim_end_matches('/'), LOGIN_PATH);
        let mut url = Url::parse(&base).map_err(|e| TilError::Wallet(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("success_url", success_url)
            .append_pair("failure_url", failure_url)
            .append_pair("contract_id", self.contract_name.as_str())
            .append_pair("public_key", &public_key);

        tracing::info!(public_key = %public_key, "requesting wallet sign-in");
        Ok(url.into())
    }

    /// Finish a login from the query string the wallet redirected back with.
    ///
    /// Returns `Ok(None)` when the query carries no login response.
    pub fn complete_sign_in(&self, query: &str) -> TilResult<Option<AccountId>> {
        let params: HashMap<String, String> =
            url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect();

        let Some(account) = params.get("account_id") else {
            return Ok(None);
        };
        let account: AccountId = account.parse()?;
        let all_keys = params
            .get("all_keys")
            .map(|keys| keys.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        if let Some(public_key) = params.get("public_key") {
            let pending = self.pending_key_name(public_key);
            let secret = self.store.get(&pending)?.ok_or_else(|| {
                TilError::Wallet(format!("no pending key for {}", public_key))
            })?;
            self.store.set(&self.account_key_name(&account), &secret)?;
            self.store.remove(&pending)?;
        }

        let auth = AuthData {
            account_id: Some(account.clone()),
            all_keys,
        };
        self.store.set(&self.auth_key, &serde_json::to_string(&auth)?)?;
        *self.auth.borrow_mut() = auth;

        tracing::info!(account = %account, "wallet sign-in completed");
        Ok(Some(account))
    }

    pub fn sign_out(&self) -> TilResult<()> {
        if let Some(account) = self.account_id() {
            self.store.remove(&self.account_key_name(&account))?;
        }
        self.store.remove(&self.auth_key)?;
        *self.auth.borrow_mut() = AuthData::default();
        tracing::info!("wallet signed out");
        Ok(())
    }

    /// The signed-in account's stored key, if any
    pub fn key_pair(&self) -> TilResult<Option<KeyPair>> {
        let Some(account) = self.account_id() else {
            return Ok(None);
        };
        match self.store.get(&self.account_key_name(&account))? {
            Some(secret) => Ok(Some(secret.parse()?)),
            None => Ok(None),
        }
    }
}

impl<K: KeyStore> Signer for WalletConnection<K> {
    fn signer(&self) -> Option<(AccountId, KeyPair)> {
        let account = self.account_id()?;
        match self.key_pair() {
            Ok(Some(key)) => Some((account, key)),
            Ok(None) => {
                tracing::warn!(account = %account, "signed in but no access key stored");
                None
            }
            Err(e) => {
                tracing::error!("Failed to load access key: {}", e);
                None
            }
        }
    }
}
