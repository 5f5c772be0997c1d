//! Local accounts backed by a secp256k1 private key

use ethrpc_crypto::{public_key_to_address, sign, to_checksum_address, PrivateKey, Signature};
use ethrpc_primitives::{Address, H256};
use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::ClientError;

/// Key pair and derived address.
///
/// Clone is not implemented so a key is not duplicated by accident.
pub struct Account {
    private_key: PrivateKey,
    address: Address,
}

impl Account {
    /// Generate a random account
    pub fn create() -> Self {
        Self::from_signing_key(SigningKey::random(&mut OsRng))
    }

    /// Create an account from a hex-encoded 32-byte private key.
    ///
    /// Accepts both with and without "0x" prefix.
    pub fn from_hex_key(hex: &str) -> Result<Self, ClientError> {
        let hex = hex.trim();
        let hex = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        let mut bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            let len = bytes.len();
            bytes.zeroize();
            return Err(ClientError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                len
            )));
        }

        let result = SigningKey::from_slice(&bytes)
            .map(Self::from_signing_key)
            .map_err(|e| ClientError::InvalidPrivateKey(e.to_string()));
        bytes.zeroize();
        result
    }

    fn from_signing_key(private_key: SigningKey) -> Self {
        let address = public_key_to_address(private_key.verifying_key());
        Self {
            private_key,
            address,
        }
    }

    /// Account address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Address with EIP-55 mixed-case checksum
    pub fn checksum_address(&self) -> String {
        to_checksum_address(&self.address)
    }

    /// Private key as 64 lowercase hex digits, without prefix
    pub fn private_key_hex(&self) -> String {
        let mut bytes: [u8; 32] = self.private_key.to_bytes().into();
        let hex = hex::encode(bytes);
        bytes.zeroize();
        hex
    }

    /// Sign a 32-byte hash
    pub fn sign_hash(&self, hash: &H256) -> Result<Signature, ClientError> {
        Ok(sign(hash, &self.private_key)?)
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
