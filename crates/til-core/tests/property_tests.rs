//! Property-based tests for avatars, account ids and paging
//!
//! Uses proptest to check invariants that should hold for any input.

mod common;

use std::rc::Rc;

use futures::executor::block_on;
use proptest::prelude::*;
use til_core::avatar::{string_to_color, LetterAvatar};
use til_core::{AccountId, ContractClient, LocalSession, MemoryContract, Page, MAX_PAGE_SIZE};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Account-like names, valid or not
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,64}").expect("valid regex")
}

/// Syntactically valid account ids
fn account_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,20}(\\.[a-z0-9]{1,20}){0,2}")
        .expect("valid regex")
        .prop_filter("min length", |s| s.len() >= AccountId::MIN_LEN)
}

fn seeded_contract(posts: usize) -> MemoryContract {
    let session = Rc::new(LocalSession::signed_in(common::account("bob.near")));
    let contract = MemoryContract::with_clock(session, Box::new(|| 0));
    for i in 0..posts {
        block_on(contract.create_post(&format!("post {}", i))).unwrap();
    }
    contract
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Same name, same avatar
    #[test]
    fn avatar_is_deterministic(name in name_strategy()) {
        prop_assert_eq!(LetterAvatar::for_name(&name), LetterAvatar::for_name(&name));
    }

    /// Colors are always `#` plus six lowercase hex digits
    #[test]
    fn avatar_color_format(name in name_strategy()) {
        let color = string_to_color(&name);
        prop_assert_eq!(color.len(), 7);
        prop_assert!(color.starts_with('#'));
        prop_assert!(color[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    /// The label is a single uppercased character
    #[test]
    fn avatar_initial_is_uppercase(name in "[a-z][a-z0-9._-]{0,30}") {
        let avatar = LetterAvatar::for_name(&name);
        let expected = name.chars().next().unwrap().to_uppercase().to_string();
        prop_assert_eq!(avatar.initial, expected);
    }

    /// Valid ids survive a string round trip through serde
    #[test]
    fn account_id_serde_roundtrip(id in account_strategy()) {
        let account: AccountId = id.parse().unwrap();
        let json = serde_json::to_string(&account).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.as_str(), id.as_str());
    }

    /// Uppercase letters are never accepted
    #[test]
    fn account_id_rejects_uppercase(id in "[a-z]{1,10}[A-Z][a-z]{0,10}") {
        prop_assert!(id.parse::<AccountId>().is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A page holds the expected descending window of ids
    #[test]
    fn page_is_descending_window(
        total in 0usize..60,
        page in 0u64..10,
        page_size in 1u64..=MAX_PAGE_SIZE,
    ) {
        let contract = seeded_contract(total);
        let posts = block_on(contract.public_timeline(Page::new(page, page_size))).unwrap();

        let raw_page = if page == 0 { 1 } else { page - 1 };
        let skipped = raw_page * page_size;
        let expected: Vec<u64> = (0..total as u64)
            .rev()
            .skip(skipped as usize)
            .take(page_size as usize)
            .collect();
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Walking every page visits every post exactly once
    #[test]
    fn pages_partition_the_timeline(total in 0usize..40, page_size in 1u64..8) {
        let contract = seeded_contract(total);
        let mut seen = Vec::new();
        let mut page = 1;
        loop {
            let posts = block_on(contract.public_timeline(Page::new(page, page_size))).unwrap();
            if posts.is_empty() {
                break;
            }
            seen.extend(posts.into_iter().map(|p| p.id));
            page += 1;
        }
        let expected: Vec<u64> = (0..total as u64).rev().collect();
        prop_assert_eq!(seen, expected);
    }

    /// Oversized pages are refused regardless of the other arguments
    #[test]
    fn oversized_page_is_error(page in 0u64..5, extra in 1u64..1000) {
        let contract = seeded_contract(3);
        let result = block_on(contract.public_timeline(Page::new(page, MAX_PAGE_SIZE + extra)));
        prop_assert!(result.is_err());
    }
}
