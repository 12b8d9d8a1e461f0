//! NEAR JSON-RPC client.
//!
//! The HTTP layer is abstracted behind [`RpcTransport`] so the same client
//! runs over the browser's fetch in the app and over a scripted fake in tests.

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};

use super::keys::PublicKey;
use super::transaction::SignedTransaction;
use crate::error::{TilError, TilResult};
use crate::types::AccountId;

const JSONRPC_ID: &str = "til";

/// POSTs a JSON body and returns the decoded JSON response
#[async_trait(?Send)]
pub trait RpcTransport {
    async fn post_json(&self, url: &str, body: &Value) -> TilResult<Value>;
}

/// Access key state needed to build a transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessKeyView {
    pub nonce: u64,
    pub block_hash: [u8; 32],
}

#[async_trait(?Send)]
impl<T: RpcTransport + ?Sized> RpcTransport for std::rc::Rc<T> {
    async fn post_json(&self, url: &str, body: &Value) -> TilResult<Value> {
        (**self).post_json(url, body).await
    }
}

#[derive(Deserialize)]
struct RawAccessKeyView {
    nonce: u64,
    block_hash: String,
}

pub struct JsonRpcClient<T> {
    transport: T,
    url: String,
}

impl<T: RpcTransport> JsonRpcClient<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// Issue one JSON-RPC call and return its `result`
    pub async fn call(&self, method: &str, params: Value) -> TilResult<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": JSONRPC_ID,
            "method": method,
            "params": params,
        });
        tracing::debug!(method, url = %self.url, "rpc request");

        let mut response = self.transport.post_json(&self.url, &body).await?;
        if let Some(error) = response.get("error") {
            return Err(rpc_error(error));
        }
        match response.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(TilError::Rpc("response has neither result nor error".to_string())),
        }
    }

    /// Run a view method and decode its JSON return value
    pub async fn view_function(
        &self,
        contract: &AccountId,
        method: &str,
        args: &Value,
    ) -> TilResult<Value> {
        let args_base64 =
            base64::engine::general_purpose::STANDARD.encode(serde_json::to_vec(args)?);
        let result = self
            .call(
                "query",
                json!({
                    "request_type": "call_function",
                    "finality": "final",
                    "account_id": contract,
                    "method_name": method,
                    "args_base64": args_base64,
                }),
            )
            .await?;

        if let Some(error) = result.get("error").and_then(Value::as_str) {
            return Err(TilError::Contract(error.to_string()));
        }
        let bytes: Vec<u8> = match result.get("result") {
            Some(raw) => serde_json::from_value(raw.clone())?,
            None => return Err(TilError::Rpc("view result missing 'result' bytes".to_string())),
        };
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn view_access_key(
        &self,
        account: &AccountId,
        public_key: &PublicKey,
    ) -> TilResult<AccessKeyView> {
        let result = self
            .call(
                "query",
                json!({
                    "request_type": "view_access_key",
                    "finality": "final",
                    "account_id": account,
                    "public_key": public_key.to_string(),
                }),
            )
            .await?;

        if let Some(error) = result.get("error").and_then(Value::as_str) {
            return Err(TilError::Rpc(error.to_string()));
        }
        let raw: RawAccessKeyView = serde_json::from_value(result)?;
        let block_hash: [u8; 32] = bs58::decode(&raw.block_hash)
            .into_vec()
            .map_err(|e| TilError::Rpc(format!("bad block hash: {}", e)))?
            .try_into()
            .map_err(|_| TilError::Rpc("block hash must be 32 bytes".to_string()))?;

        Ok(AccessKeyView {
            nonce: raw.nonce,
            block_hash,
        })
    }

    /// Submit a signed transaction and wait for its final outcome.
    ///
    /// Returns the decoded JSON return value of the call (`Null` for methods
    /// returning nothing).
    pub async fn broadcast_tx_commit(&self, signed: &SignedTransaction) -> TilResult<Value> {
        tracing::debug!(hash = %signed.hash_base58()?, "broadcasting transaction");
        let outcome = self
            .call("broadcast_tx_commit", json!([signed.to_base64()?]))
            .await?;
        parse_outcome(&outcome)
    }
}

fn rpc_error(error: &Value) -> TilError {
    let cause = error
        .pointer("/cause/name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let detail = error
        .get("data")
        .map(|d| match d {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .or_else(|| error.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| error.to_string());

    if cause == "CONTRACT_EXECUTION_ERROR" {
        TilError::Contract(detail)
    } else {
        TilError::Rpc(detail)
    }
}

/// Interpret a `FinalExecutionOutcome`
fn parse_outcome(outcome: &Value) -> TilResult<Value> {
    let status = outcome
        .get("status")
        .ok_or_else(|| TilError::Rpc("outcome missing status".to_string()))?;

    if let Some(failure) = status.get("Failure") {
        return Err(TilError::Contract(describe_failure(failure)));
    }

    match status.get("SuccessValue").and_then(Value::as_str) {
        Some("") => Ok(Value::Null),
        Some(encoded) => {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .map_err(|e| TilError::Rpc(format!("bad SuccessValue: {}", e)))?;
            Ok(serde_json::from_slice(&bytes)?)
        }
        None => Err(TilError::Rpc(format!("unexpected status: {}", status))),
    }
}

/// Pull the panic message out of a nested failure, if there is one
fn describe_failure(failure: &Value) -> String {
    failure
        .pointer("/ActionError/kind/FunctionCallError/ExecutionError")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| failure.to_string())
}
