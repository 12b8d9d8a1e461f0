//! TIL Core Library
//!
//! Everything the TIL front-end does that is not rendering.
//!
//! ## Overview
//!
//! TIL ("today I learned") is a small social app on NEAR: accounts post short
//! notes, browse a public timeline and their own, and follow each other. All
//! durable state lives in the TIL contract; this crate holds the client side
//! of that conversation.
//!
//! ## Layout
//!
//! - [`ContractClient`]: the contract API, implemented by [`MemoryContract`]
//!   (local network, tests) and [`NearContract`] (JSON-RPC + signed calls)
//! - [`Session`]: who is signed in, implemented by [`LocalSession`] and, for
//!   chain networks, on top of [`WalletConnection`]
//! - [`views`]: composer, timeline tabs, follow control and profile state
//! - [`avatar`], [`time`]: letter avatars and relative timestamps
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//! use til_core::{views::HomeTimelines, LocalSession, MemoryContract, Page};
//!
//! let session = Rc::new(LocalSession::signed_in("bob.near".parse()?));
//! let contract = MemoryContract::new(session.clone());
//!
//! contract.create_post("Rust closures capture by reference").await?;
//!
//! let mut timelines = HomeTimelines::default();
//! timelines.load_initial(&contract, &*session, Page::default()).await;
//! assert_eq!(timelines.active_posts().len(), 1);
//! ```

pub mod avatar;
pub mod config;
pub mod contract;
pub mod error;
pub mod memory;
pub mod near;
pub mod session;
pub mod time;
pub mod types;
pub mod views;
pub mod wallet;

// Re-exports
pub use avatar::LetterAvatar;
pub use config::{Config, NetworkId};
pub use contract::ContractClient;
pub use error::{TilError, TilResult};
pub use memory::MemoryContract;
pub use near::{JsonRpcClient, KeyPair, NearContract, PublicKey, RpcTransport, Signer};
pub use session::{LocalSession, Session};
pub use types::*;
pub use wallet::{KeyStore, MemoryKeyStore, WalletConnection};
