//! Network configuration.
//!
//! A wasm front-end has no process environment, so overrides are baked in at
//! compile time through `TIL_NETWORK` and `TIL_CONTRACT_NAME`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TilError, TilResult};
use crate::types::{AccountId, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Contract account used when no override is compiled in
pub const DEFAULT_CONTRACT_NAME: &str = "til.testnet";

/// Account the local session signs in as
pub const DEFAULT_LOCAL_ACCOUNT: &str = "dev.local";

/// Which backend the front-end talks to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// In-memory contract, no chain
    Local,
    Testnet,
    Mainnet,
}

impl NetworkId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Local => "local",
            NetworkId::Testnet => "testnet",
            NetworkId::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = TilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" | "development" => Ok(NetworkId::Local),
            "testnet" => Ok(NetworkId::Testnet),
            "mainnet" | "production" => Ok(NetworkId::Mainnet),
            other => Err(TilError::Config(format!("unknown network '{}'", other))),
        }
    }
}

/// Front-end configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkId,
    /// Account the TIL contract is deployed to
    pub contract_name: AccountId,
    /// JSON-RPC endpoint
    pub node_url: String,
    /// Wallet used for the login redirect
    pub wallet_url: String,
    /// Prefix for the stored wallet auth record
    pub app_key_prefix: String,
    /// Page size for timeline reads
    pub page_size: u64,
    /// Identity used by the local session
    pub local_account: AccountId,
}

impl Config {
    /// Preset for a network with the given contract account
    pub fn for_network(network: NetworkId, contract_name: AccountId) -> Self {
        let (node_url, wallet_url) = match network {
            NetworkId::Local => ("", ""),
            NetworkId::Testnet => (
                "https://rpc.testnet.near.org",
                "https://wallet.testnet.near.org",
            ),
            NetworkId::Mainnet => ("https://rpc.mainnet.near.org", "https://wallet.near.org"),
        };

        Self {
            network,
            app_key_prefix: contract_name.to_string(),
            contract_name,
            node_url: node_url.to_string(),
            wallet_url: wallet_url.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            local_account: default_local_account(),
        }
    }

    /// Build from compile-time environment, falling back to testnet defaults
    pub fn from_build_env() -> TilResult<Self> {
        Self::from_values(option_env!("TIL_NETWORK"), option_env!("TIL_CONTRACT_NAME"))
    }

    fn from_values(network: Option<&str>, contract_name: Option<&str>) -> TilResult<Self> {
        let network = match network {
            Some(n) => n.parse()?,
            None => NetworkId::Testnet,
        };
        let contract_name: AccountId = contract_name.unwrap_or(DEFAULT_CONTRACT_NAME).parse()?;
        let config = Self::for_network(network, contract_name);
        config.validate()?;
        Ok(config)
    }

    /// Override the page size used for timeline reads
    pub fn with_page_size(mut self, page_size: u64) -> TilResult<Self> {
        self.page_size = page_size;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> TilResult<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(TilError::Config(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.network != NetworkId::Local
            && (self.node_url.is_empty() || self.wallet_url.is_empty())
        {
            return Err(TilError::Config(format!(
                "{} requires node and wallet urls",
                self.network
            )));
        }
        Ok(())
    }
}

fn default_local_account() -> AccountId {
    AccountId::new_unchecked(DEFAULT_LOCAL_ACCOUNT)
}
