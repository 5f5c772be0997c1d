//! EIP-155 transaction signing

use bytes::Bytes;
use ethrpc_crypto::keccak256;
use ethrpc_primitives::{Address, H256, U256};
use rlp::RlpStream;

use crate::account::Account;
use crate::ClientError;

/// Legacy (pre-typed) transaction fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegacyTx {
    /// Sender nonce
    pub nonce: u64,
    /// Gas price in wei
    pub gas_price: U256,
    /// Gas limit
    pub gas_limit: u64,
    /// Recipient, `None` for contract creation
    pub to: Option<Address>,
    /// Value in wei
    pub value: U256,
    /// Call data or init code
    pub data: Bytes,
}

impl LegacyTx {
    fn append_fields(&self, stream: &mut RlpStream) {
        stream.append(&self.nonce);
        stream.append(&self.gas_price);
        stream.append(&self.gas_limit);
        match &self.to {
            Some(to) => stream.append(to),
            None => stream.append_empty_data(),
        };
        stream.append(&self.value);
        stream.append(&self.data.to_vec());
    }
}

/// Signed, RLP-encoded transaction ready for `eth_sendRawTransaction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// RLP of `[nonce, gasPrice, gas, to, value, data, v, r, s]`
    pub raw: Bytes,
    /// Keccak-256 of `raw`
    pub hash: H256,
}

impl SignedTransaction {
    /// `0x`-prefixed hex of the raw bytes
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.raw))
    }
}

/// Replay-protected signer for one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eip155Signer {
    chain_id: u64,
}

impl Eip155Signer {
    /// Create a signer for `chain_id`
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }

    /// Chain id mixed into signatures
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// `keccak256(rlp([nonce, gasPrice, gas, to, value, data, chainId, 0, 0]))`
    pub fn signing_hash(&self, tx: &LegacyTx) -> H256 {
        let mut stream = RlpStream::new_list(9);
        tx.append_fields(&mut stream);
        stream.append(&self.chain_id);
        stream.append(&0u8);
        stream.append(&0u8);
        keccak256(&stream.out())
    }

    /// Sign `tx` with `account`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidChainId`] for chain id 0.
    pub fn sign(&self, tx: &LegacyTx, account: &Account) -> Result<SignedTransaction, ClientError> {
        if self.chain_id == 0 {
            return Err(ClientError::InvalidChainId(
                "chain id 0 gives no replay protection".to_string(),
            ));
        }
        let v = self
            .chain_id
            .checked_mul(2)
            .and_then(|n| n.checked_add(35))
            .ok_or_else(|| ClientError::InvalidChainId(format!("{} is too large", self.chain_id)))?;

        let signature = account.sign_hash(&self.signing_hash(tx))?;
        let v = v + signature.recovery_id() as u64;

        let mut stream = RlpStream::new_list(9);
        tx.append_fields(&mut stream);
        stream.append(&v);
        stream.append(&U256::from_big_endian(&signature.r));
        stream.append(&U256::from_big_endian(&signature.s));

        let raw = Bytes::from(stream.out().to_vec());
        let hash = keccak256(&raw);
        tracing::debug!(chain_id = self.chain_id, hash = %hash, "signed transaction");

        Ok(SignedTransaction { raw, hash })
    }
}

/// Build and sign a legacy transaction in one step
#[allow(clippy::too_many_arguments)]
pub fn sign_transaction(
    signer: &Eip155Signer,
    account: &Account,
    nonce: u64,
    to: Option<Address>,
    value: U256,
    gas_limit: u64,
    gas_price: U256,
    data: impl Into<Bytes>,
) -> Result<SignedTransaction, ClientError> {
    let tx = LegacyTx {
        nonce,
        gas_price,
        gas_limit,
        to,
        value,
        data: data.into(),
    };
    signer.sign(&tx, account)
}
