//! NEAR protocol client: keys, transactions, JSON-RPC and the contract binding.

pub mod contract;
pub mod keys;
pub mod rpc;
pub mod transaction;

pub use contract::{NearContract, Signer};
pub use keys::{KeyPair, PublicKey};
pub use rpc::{AccessKeyView, JsonRpcClient, RpcTransport};
pub use transaction::{Action, FunctionCall, SignedTransaction, Transaction, DEFAULT_GAS};
