//! [`ContractClient`] over NEAR JSON-RPC.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::keys::KeyPair;
use super::rpc::{JsonRpcClient, RpcTransport};
use super::transaction::{Action, FunctionCall, Transaction};
use crate::contract::{methods, ContractClient};
use crate::error::{TilError, TilResult};
use crate::types::{AccountId, Page, Post};

/// Supplies the account and key that sign change calls
pub trait Signer {
    fn signer(&self) -> Option<(AccountId, KeyPair)>;
}

impl<S: Signer + ?Sized> Signer for Rc<S> {
    fn signer(&self) -> Option<(AccountId, KeyPair)> {
        (**self).signer()
    }
}

/// Deployed TIL contract reached through a NEAR RPC node
pub struct NearContract<T, S> {
    rpc: JsonRpcClient<T>,
    contract_id: AccountId,
    signer: S,
}

fn page_args(page: Page) -> Value {
    // U64 arguments travel as decimal strings
    json!({
        "page": page.page.to_string(),
        "page_size": page.page_size.to_string(),
    })
}

impl<T: RpcTransport, S: Signer> NearContract<T, S> {
    pub fn new(rpc: JsonRpcClient<T>, contract_id: AccountId, signer: S) -> Self {
        Self {
            rpc,
            contract_id,
            signer,
        }
    }

    async fn view<R: DeserializeOwned>(&self, method: &str, args: Value) -> TilResult<R> {
        let value = self.rpc.view_function(&self.contract_id, method, &args).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Sign and submit a single function call, returning its JSON result
    async fn change(&self, method: &str, args: Value) -> TilResult<Value> {
        let (account, key) = self.signer.signer().ok_or(TilError::NotSignedIn)?;
        let public_key = key.public_key();
        let access_key = self.rpc.view_access_key(&account, &public_key).await?;

        let transaction = Transaction {
            signer_id: account,
            public_key,
            nonce: access_key.nonce + 1,
            receiver_id: self.contract_id.clone(),
            block_hash: access_key.block_hash,
            actions: vec![Action::FunctionCall(FunctionCall::new(
                method,
                serde_json::to_vec(&args)?,
            ))],
        };
        tracing::debug!(method, nonce = transaction.nonce, "signing change call");

        let signed = transaction.sign(&key)?;
        self.rpc.broadcast_tx_commit(&signed).await
    }
}

#[async_trait(?Send)]
impl<T: RpcTransport, S: Signer> ContractClient for NearContract<T, S> {
    async fn create_post(&self, content: &str) -> TilResult<Post> {
        let value = self
            .change(methods::CREATE_POST, json!({ "content": content }))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn public_timeline(&self, page: Page) -> TilResult<Vec<Post>> {
        self.view(methods::PUBLIC_TIMELINE, page_args(page)).await
    }

    async fn user_timeline(&self, user: &AccountId, page: Page) -> TilResult<Vec<Post>> {
        let mut args = page_args(page);
        args["user"] = json!(user);
        self.view(methods::USER_TIMELINE, args).await
    }

    async fn follow(&self, user: &AccountId) -> TilResult<()> {
        self.change(methods::FOLLOW, json!({ "user": user })).await?;
        Ok(())
    }

    async fn unfollow(&self, user: &AccountId) -> TilResult<()> {
        self.change(methods::UNFOLLOW, json!({ "user": user })).await?;
        Ok(())
    }

    async fn is_follow(&self, follower: &AccountId, followee: &AccountId) -> TilResult<bool> {
        self.view(
            methods::IS_FOLLOW,
            json!({ "user1": follower, "user2": followee }),
        )
        .await
    }

    async fn followings(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>> {
        let mut args = page_args(page);
        args["user"] = json!(user);
        self.view(methods::FOLLOWINGS, args).await
    }

    async fn followers(&self, user: &AccountId, page: Page) -> TilResult<Vec<AccountId>> {
        let mut args = page_args(page);
        args["user"] = json!(user);
        self.view(methods::FOLLOWERS, args).await
    }
}
