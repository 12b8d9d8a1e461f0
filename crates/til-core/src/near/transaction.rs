//! Signed function-call transactions.
//!
//! Encoding follows NEAR's borsh layout for `Transaction` and
//! `SignedTransaction`, restricted to the single action the front-end needs:
//! `FunctionCall`.
//!
//! ```text
//! Transaction:
//!   signer_id    string   (u32 len LE + utf8)
//!   public_key   u8 key type (0 = ed25519) + 32 bytes
//!   nonce        u64 LE
//!   receiver_id  string
//!   block_hash   32 bytes
//!   actions      u32 count LE + actions
//! FunctionCall action:
//!   u8 variant (2), method_name string, args (u32 len + bytes), gas u64 LE, deposit u128 LE
//! SignedTransaction:
//!   transaction, u8 key type (0) + 64-byte signature
//! ```

use std::io;

use base64::Engine;
use borsh::BorshSerialize;
use sha2::{Digest, Sha256};

use super::keys::{KeyPair, PublicKey, ED25519_KEY_TYPE};
use crate::error::TilResult;
use crate::types::AccountId;

/// Position of `FunctionCall` in NEAR's `Action` enum
const FUNCTION_CALL_ACTION: u8 = 2;

/// 30 Tgas, enough for every TIL change method
pub const DEFAULT_GAS: u64 = 30_000_000_000_000;

/// A contract method invocation
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize)]
pub struct FunctionCall {
    pub method_name: String,
    /// JSON-encoded arguments
    pub args: Vec<u8>,
    pub gas: u64,
    /// Attached yoctoNEAR
    pub deposit: u128,
}

impl FunctionCall {
    pub fn new(method_name: &str, args: Vec<u8>) -> Self {
        Self {
            method_name: method_name.to_string(),
            args,
            gas: DEFAULT_GAS,
            deposit: 0,
        }
    }
}

/// The subset of NEAR actions TIL sends
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FunctionCall(FunctionCall),
}

// Tags follow NEAR's full Action enum, where FunctionCall is variant 2
impl BorshSerialize for Action {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Action::FunctionCall(call) => {
                FUNCTION_CALL_ACTION.serialize(writer)?;
                call.serialize(writer)
            }
        }
    }
}

/// Unsigned transaction
#[derive(Clone, Debug, BorshSerialize)]
pub struct Transaction {
    pub signer_id: AccountId,
    pub public_key: PublicKey,
    pub nonce: u64,
    pub receiver_id: AccountId,
    pub block_hash: [u8; 32],
    pub actions: Vec<Action>,
}

impl Transaction {
    pub fn to_borsh(&self) -> TilResult<Vec<u8>> {
        Ok(borsh::to_vec(self)?)
    }

    /// sha256 of the borsh encoding; this is what gets signed
    pub fn hash(&self) -> TilResult<[u8; 32]> {
        Ok(Sha256::digest(self.to_borsh()?).into())
    }

    pub fn sign(self, key: &KeyPair) -> TilResult<SignedTransaction> {
        let signature = key.sign(&self.hash()?);
        Ok(SignedTransaction {
            transaction: self,
            signature,
        })
    }
}

fn serialize_signature<W: io::Write>(signature: &[u8; 64], writer: &mut W) -> io::Result<()> {
    ED25519_KEY_TYPE.serialize(writer)?;
    signature.serialize(writer)
}

/// Transaction plus its ed25519 signature
#[derive(Clone, Debug, BorshSerialize)]
pub struct SignedTransaction {
    pub transaction: Transaction,
    #[borsh(serialize_with = "serialize_signature")]
    pub signature: [u8; 64],
}

impl SignedTransaction {
    pub fn to_borsh(&self) -> TilResult<Vec<u8>> {
        Ok(borsh::to_vec(self)?)
    }

    /// Encoding accepted by `broadcast_tx_commit`
    pub fn to_base64(&self) -> TilResult<String> {
        Ok(base64::engine::general_purpose::STANDARD.encode(self.to_borsh()?))
    }

    /// Transaction hash in the base58 form explorers show
    pub fn hash_base58(&self) -> TilResult<String> {
        Ok(bs58::encode(self.transaction.hash()?).into_string())
    }

    pub fn verify(&self) -> bool {
        match self.transaction.hash() {
            Ok(hash) => self.transaction.public_key.verify(&hash, &self.signature),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(key: &KeyPair) -> Transaction {
        Transaction {
            signer_id: "bob.near".parse().unwrap(),
            public_key: key.public_key(),
            nonce: 42,
            receiver_id: "til.near".parse().unwrap(),
            block_hash: [5u8; 32],
            actions: vec![Action::FunctionCall(FunctionCall::new(
                "follow",
                br#"{"user":"alice.near"}"#.to_vec(),
            ))],
        }
    }

    #[test]
    fn test_transaction_layout() {
        let key = KeyPair::from_seed(&[1u8; 32]);
        let bytes = sample(&key).to_borsh().unwrap();

        // signer_id
        assert_eq!(&bytes[0..4], &8u32.to_le_bytes());
        assert_eq!(&bytes[4..12], b"bob.near");
        // public key
        assert_eq!(bytes[12], 0);
        assert_eq!(&bytes[13..45], key.public_key().as_bytes());
        // nonce
        assert_eq!(&bytes[45..53], &42u64.to_le_bytes());
        // receiver
        assert_eq!(&bytes[53..57], &8u32.to_le_bytes());
        assert_eq!(&bytes[57..65], b"til.near");
        // block hash, one action of variant 2
        assert_eq!(&bytes[65..97], &[5u8; 32]);
        assert_eq!(&bytes[97..101], &1u32.to_le_bytes());
        assert_eq!(bytes[101], 2);

        let args = br#"{"user":"alice.near"}"#;
        let expected_len = 101 + 1 + (4 + 6) + (4 + args.len()) + 8 + 16;
        assert_eq!(bytes.len(), expected_len);
        assert_eq!(&bytes[bytes.len() - 24..bytes.len() - 16], &DEFAULT_GAS.to_le_bytes());
        assert_eq!(&bytes[bytes.len() - 16..], &0u128.to_le_bytes());
    }

    #[test]
    fn test_signed_transaction() {
        let key = KeyPair::from_seed(&[2u8; 32]);
        let tx = sample(&key);
        let unsigned = tx.to_borsh().unwrap();
        let signed = tx.sign(&key).unwrap();

        assert!(signed.verify());

        let bytes = signed.to_borsh().unwrap();
        assert_eq!(bytes.len(), unsigned.len() + 1 + 64);
        assert_eq!(&bytes[..unsigned.len()], unsigned.as_slice());
        assert_eq!(bytes[unsigned.len()], 0);

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(signed.to_base64().unwrap())
            .unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_signature_bound_to_content() {
        let key = KeyPair::from_seed(&[2u8; 32]);
        let mut signed = sample(&key).sign(&key).unwrap();
        signed.transaction.nonce += 1;
        assert!(!signed.verify());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let key = KeyPair::from_seed(&[4u8; 32]);
        assert_eq!(sample(&key).hash().unwrap(), sample(&key).hash().unwrap());
        let signed = sample(&key).sign(&key).unwrap();
        assert_eq!(
            signed.hash_base58().unwrap(),
            bs58::encode(sample(&key).hash().unwrap()).into_string()
        );
    }
}
