//! Edge case and boundary condition tests
//!
//! These tests verify the client handles unusual inputs, error conditions
//! and boundary values the same way the deployed contract does.

mod common;

use std::rc::Rc;

use common::{account, Fixture};
use til_core::avatar::LetterAvatar;
use til_core::config::{Config, NetworkId};
use til_core::wallet::{KeyStore, MemoryKeyStore, WalletConnection};
use til_core::{AccountId, ContractClient, Page, Signer, TilError, MAX_CONTENT_LEN};

// ============================================================================
// Account ids
// ============================================================================

#[test]
fn test_account_id_length_bounds() {
    assert!("a".parse::<AccountId>().is_err());
    assert!("ab".parse::<AccountId>().is_ok());
    assert!("a".repeat(64).parse::<AccountId>().is_ok());
    assert!("a".repeat(65).parse::<AccountId>().is_err());
}

#[test]
fn test_account_id_separators() {
    for bad in [".near", "bob.", "bob..near", "bob.-near", "bob near", "Bob.near", ""] {
        assert!(bad.parse::<AccountId>().is_err(), "{bad:?} should be rejected");
    }
    assert!(serde_json::from_str::<AccountId>("\"bob..near\"").is_err());
}

// ============================================================================
// Content limits
// ============================================================================

#[tokio::test]
async fn test_content_limit_counts_bytes() {
    let fx = Fixture::signed_in("bob.near");

    // 150 two-byte characters is exactly the limit
    let at_limit = "é".repeat(MAX_CONTENT_LEN / 2);
    assert!(fx.contract.create_post(&at_limit).await.is_ok());

    let over = "é".repeat(MAX_CONTENT_LEN / 2 + 1);
    let err = fx.contract.create_post(&over).await.unwrap_err();
    assert!(matches!(err, TilError::ContentTooLong { len: 302, max: 300 }));
}

#[tokio::test]
async fn test_whitespace_and_empty_posts_are_accepted() {
    let fx = Fixture::signed_in("bob.near");
    for content in ["", " ", "\n\n", "line one\nline two"] {
        let post = fx.contract.create_post(content).await.unwrap();
        assert_eq!(post.content, content);
    }
}

// ============================================================================
// Paging
// ============================================================================

#[tokio::test]
async fn test_page_zero_reads_as_second_page() {
    let fx = Fixture::signed_in("bob.near");
    for i in 0..13 {
        fx.contract.create_post(&format!("{}", i)).await.unwrap();
    }
    let zero = fx.contract.public_timeline(Page::new(0, 3)).await.unwrap();
    let two = fx.contract.public_timeline(Page::new(2, 3)).await.unwrap();
    assert_eq!(zero.iter().map(|p| p.id).collect::<Vec<_>>(), vec![9, 8, 7]);
    assert_eq!(zero, two);
}

#[tokio::test]
async fn test_huge_page_number_is_empty() {
    let fx = Fixture::signed_in("bob.near");
    fx.contract.create_post("only").await.unwrap();
    let posts = fx
        .contract
        .public_timeline(Page::new(u64::MAX, 100))
        .await
        .unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_follow_lists_for_unknown_account() {
    let fx = Fixture::signed_in("bob.near");
    let nobody = account("nobody.near");
    assert!(fx.contract.followings(&nobody, Page::default()).await.unwrap().is_empty());
    assert!(fx.contract.followers(&nobody, Page::default()).await.unwrap().is_empty());
    assert!(!fx.contract.is_follow(&nobody, &account("bob.near")).await.unwrap());
}

// ============================================================================
// Avatars
// ============================================================================

#[test]
fn test_avatar_edge_names() {
    let empty = LetterAvatar::for_name("");
    assert_eq!(empty.color, "#000000");
    assert_eq!(empty.initial, "?");

    let crab = LetterAvatar::for_name("🦀");
    assert_eq!(crab.color, "#020d1b");
    assert_eq!(crab.initial, "🦀");

    assert_eq!(LetterAvatar::for_name(&"x".repeat(40)).color, "#00ac80");
}

// ============================================================================
// Wallet
// ============================================================================

fn testnet() -> Config {
    Config::for_network(NetworkId::Testnet, "til.testnet".parse().unwrap())
}

#[test]
fn test_wallet_rejects_invalid_account_in_callback() {
    let wallet = WalletConnection::new(&testnet(), MemoryKeyStore::default());
    let err = wallet.complete_sign_in("account_id=Not%20Valid").unwrap_err();
    assert!(matches!(err, TilError::InvalidAccountId(_)));
    assert!(!wallet.is_signed_in());
}

#[test]
fn test_wallet_callback_without_key_signs_in_read_only() {
    let wallet = WalletConnection::new(&testnet(), MemoryKeyStore::default());
    let signed = wallet.complete_sign_in("account_id=bob.testnet").unwrap();
    assert_eq!(signed, Some(account("bob.testnet")));

    // no function-call key, so nothing can be signed
    assert!(wallet.signer().is_none());
}

#[test]
fn test_wallet_ignores_garbage_stored_key() {
    let store = Rc::new(MemoryKeyStore::default());
    store
        .set(
            "til.testnet_wallet_auth_key",
            r#"{"accountId":"bob.testnet","allKeys":[]}"#,
        )
        .unwrap();
    store
        .set("near-api-js:keystore:bob.testnet:testnet", "ed25519:???")
        .unwrap();

    let wallet = WalletConnection::new(&testnet(), store);
    assert!(wallet.is_signed_in());
    assert!(wallet.key_pair().is_err());
    assert!(wallet.signer().is_none());
}

#[test]
fn test_wallet_auth_is_scoped_by_app_prefix() {
    let store = Rc::new(MemoryKeyStore::default());
    let testnet_wallet = WalletConnection::new(&testnet(), store.clone());
    testnet_wallet.complete_sign_in("account_id=bob.testnet").unwrap();

    let mainnet = Config::for_network(NetworkId::Mainnet, "til.near".parse().unwrap());
    let mainnet_wallet = WalletConnection::new(&mainnet, store);
    assert!(!mainnet_wallet.is_signed_in());
}
