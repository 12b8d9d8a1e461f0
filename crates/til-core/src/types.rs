//! Core types for the TIL front-end.
//!
//! These mirror the JSON shapes returned by the TIL contract. None of them is
//! authoritative: the contract owns every post and follow edge, the front-end
//! only holds the last copy it read.

use std::fmt;
use std::str::FromStr;

use borsh::BorshSerialize;
use serde::{Deserialize, Serialize};

use crate::error::TilError;

/// Contract-assigned post identifier
pub type PostId = u64;

/// Longest post body the contract accepts, in bytes
pub const MAX_CONTENT_LEN: usize = 300;

/// Largest page the contract will return
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size the front-end requests by default
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// A validated NEAR account identifier.
///
/// Rules: 2 to 64 characters of `a-z`, `0-9`, `-`, `_`, `.`; separators may
/// not lead, trail or repeat.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, BorshSerialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 64;

    /// Validate an account id string
    pub fn validate(id: &str) -> Result<(), TilError> {
        if id.len() < Self::MIN_LEN || id.len() > Self::MAX_LEN {
            return Err(TilError::InvalidAccountId(id.to_string()));
        }

        let mut prev_separator = true;
        for c in id.chars() {
            let is_separator = matches!(c, '-' | '_' | '.');
            let is_alnum = c.is_ascii_lowercase() || c.is_ascii_digit();
            if !is_separator && !is_alnum {
                return Err(TilError::InvalidAccountId(id.to_string()));
            }
            if is_separator && prev_separator {
                return Err(TilError::InvalidAccountId(id.to_string()));
            }
            prev_separator = is_separator;
        }
        if prev_separator {
            return Err(TilError::InvalidAccountId(id.to_string()));
        }
        Ok(())
    }

    /// Wrap a string already known to be valid
    pub(crate) fn new_unchecked(id: &str) -> Self {
        debug_assert!(Self::validate(id).is_ok());
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = TilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for AccountId {
    type Error = TilError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A post as returned by the contract.
///
/// ```json
/// { "id": 8, "content": "hehe", "user": "fgfm999.testnet", "created_at": 1653485695227452700 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub user: AccountId,
    /// Block timestamp in nanoseconds since the Unix epoch
    pub created_at: u64,
}

impl Post {
    /// Creation time as milliseconds since the Unix epoch
    pub fn created_at_millis(&self) -> i64 {
        crate::time::nanos_to_millis(self.created_at)
    }
}

/// One page of a descending listing. Pages start at 1; page 0 skips one
/// page, the same as page 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: u64,
    pub page_size: u64,
}

impl Page {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// The first page with the given size
    pub fn first(page_size: u64) -> Self {
        Self::new(1, page_size)
    }

    /// Number of items before this page
    pub fn skipped(&self) -> u64 {
        let raw_page = if self.page == 0 { 1 } else { self.page - 1 };
        raw_page.saturating_mul(self.page_size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_account_ids() {
        for id in ["bob.near", "fgfm999.testnet", "a-b_c.near", "ab", "0x1"] {
            assert!(id.parse::<AccountId>().is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_account_ids() {
        let too_long = "a".repeat(65);
        for id in [
            "",
            "a",
            "Bob.near",
            ".bob",
            "bob.",
            "bob..near",
            "bob-.near",
            "bob near",
            too_long.as_str(),
        ] {
            assert!(id.parse::<AccountId>().is_err(), "{id:?} should be invalid");
        }
    }

    #[test]
    fn test_post_json_shape() {
        let json = r#"{"content":"hehe","created_at":1653485695227452700,"id":8,"user":"fgfm999.testnet"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 8);
        assert_eq!(post.user.as_str(), "fgfm999.testnet");
        assert_eq!(post.created_at_millis(), 1_653_485_695_227);
    }

    #[test]
    fn test_post_rejects_bad_user() {
        let json = r#"{"content":"x","created_at":0,"id":0,"user":"NOT VALID"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn test_page_skipped() {
        assert_eq!(Page::new(0, 10).skipped(), 10);
        assert_eq!(Page::new(1, 10).skipped(), 0);
        assert_eq!(Page::new(3, 10).skipped(), 20);
        assert_eq!(Page::default(), Page::first(100));
    }
}
