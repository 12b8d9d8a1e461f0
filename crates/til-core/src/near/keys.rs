//! Ed25519 keys in NEAR's string encoding.
//!
//! Public keys print as `ed25519:<base58(32 bytes)>`, key pairs as
//! `ed25519:<base58(seed ‖ public)>`, the format wallets and key stores use.

use std::fmt;
use std::io;
use std::str::FromStr;

use borsh::BorshSerialize;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::{TilError, TilResult};

const ED25519_PREFIX: &str = "ed25519:";

/// Key type tag in borsh-encoded keys and signatures
pub(crate) const ED25519_KEY_TYPE: u8 = 0;

fn strip_prefix(s: &str) -> TilResult<&str> {
    s.strip_prefix(ED25519_PREFIX)
        .ok_or_else(|| TilError::InvalidKey(format!("expected '{}' prefix", ED25519_PREFIX)))
}

fn decode_base58(s: &str) -> TilResult<Vec<u8>> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| TilError::InvalidKey(e.to_string()))
}

/// Ed25519 public key
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8; 32]) -> TilResult<Self> {
        VerifyingKey::from_bytes(bytes)
            .map(Self)
            .map_err(|e| TilError::InvalidKey(e.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// Check a 64-byte signature over `message`
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        let signature = Signature::from_bytes(signature);
        self.0.verify(message, &signature).is_ok()
    }
}

impl BorshSerialize for PublicKey {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        ED25519_KEY_TYPE.serialize(writer)?;
        self.as_bytes().serialize(writer)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ED25519_PREFIX, bs58::encode(self.as_bytes()).into_string())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl FromStr for PublicKey {
    type Err = TilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 32] = decode_base58(strip_prefix(s)?)?
            .try_into()
            .map_err(|_| TilError::InvalidKey("public key must be 32 bytes".to_string()))?;
        Self::from_bytes(&bytes)
    }
}

/// Ed25519 signing key pair
#[derive(Clone)]
pub struct KeyPair {
    signing: SigningKey,
}

impl KeyPair {
    /// Generate a fresh key pair from OS/browser entropy
    pub fn generate() -> TilResult<Self> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed).map_err(|e| TilError::Crypto(e.to_string()))?;
        Ok(Self::from_seed(&seed))
    }

    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(seed),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing.verifying_key())
    }

    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.signing.to_keypair_bytes();
        write!(f, "{}{}", ED25519_PREFIX, bs58::encode(bytes).into_string())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the secret half
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key())
            .finish()
    }
}

impl FromStr for KeyPair {
    type Err = TilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_base58(strip_prefix(s)?)?;
        match bytes.len() {
            64 => {
                let bytes: [u8; 64] = bytes
                    .try_into()
                    .map_err(|_| TilError::InvalidKey("bad key length".to_string()))?;
                SigningKey::from_keypair_bytes(&bytes)
                    .map(|signing| Self { signing })
                    .map_err(|_| TilError::InvalidKey("public half does not match seed".to_string()))
            }
            32 => {
                let seed: [u8; 32] = bytes
                    .try_into()
                    .map_err(|_| TilError::InvalidKey("bad key length".to_string()))?;
                Ok(Self::from_seed(&seed))
            }
            n => Err(TilError::InvalidKey(format!("secret key must be 32 or 64 bytes, got {}", n))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypair_string_roundtrip() {
        let key = KeyPair::from_seed(&[7u8; 32]);
        let encoded = key.to_string();
        assert!(encoded.starts_with("ed25519:"));

        let decoded: KeyPair = encoded.parse().unwrap();
        assert_eq!(decoded.public_key(), key.public_key());
    }

    #[test]
    fn test_seed_only_secret() {
        let seed = [9u8; 32];
        let encoded = format!("ed25519:{}", bs58::encode(seed).into_string());
        let key: KeyPair = encoded.parse().unwrap();
        assert_eq!(key.public_key(), KeyPair::from_seed(&seed).public_key());
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!("secp256k1:abc".parse::<PublicKey>().is_err());
        assert!("ed25519:0OIl".parse::<PublicKey>().is_err());
        assert!("ed25519:2g".parse::<KeyPair>().is_err());

        // mismatched public half
        let mut bytes = KeyPair::from_seed(&[1u8; 32]).signing.to_keypair_bytes();
        bytes[63] ^= 0xff;
        let tampered = format!("ed25519:{}", bs58::encode(bytes).into_string());
        assert!(tampered.parse::<KeyPair>().is_err());
    }

    #[test]
    fn test_sign_and_verify() {
        let key = KeyPair::generate().unwrap();
        let signature = key.sign(b"learned today");
        assert!(key.public_key().verify(b"learned today", &signature));
        assert!(!key.public_key().verify(b"learned yesterday", &signature));
    }

    #[test]
    fn test_public_key_borsh() {
        let key = KeyPair::from_seed(&[5u8; 32]).public_key();
        let bytes = borsh::to_vec(&key).unwrap();
        assert_eq!(bytes.len(), 33);
        assert_eq!(bytes[0], ED25519_KEY_TYPE);
        assert_eq!(&bytes[1..], key.as_bytes());
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = KeyPair::from_seed(&[3u8; 32]);
        let debug = format!("{:?}", key);
        assert!(debug.contains(&key.public_key().to_string()));
        assert!(!debug.contains(&key.to_string()));
    }
}
