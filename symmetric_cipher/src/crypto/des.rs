use crate::crypto::cipher_context::CipherContext;
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::des_key_expansion::{DesKeyExpansion, DES_KEY_BITS};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::permutation::permute;
use crate::crypto::utils::{Bits, BitsSlice};
use std::sync::Arc;

pub const DES_BLOCK_BITS: usize = 64;
pub const DES_ROUNDS: usize = 16;

pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        DES {
            feistel_network: FeistelNetwork::new(DES_ROUNDS, transformation),
            key_expansion,
        }
    }

    fn check_block(block: &BitsSlice) -> Result<(), CipherError> {
        if block.len() != DES_BLOCK_BITS {
            return Err(CipherError::InvalidBlockLength {
                expected: DES_BLOCK_BITS,
                actual: block.len(),
            });
        }
        Ok(())
    }
}

impl Default for DES {
    fn default() -> Self {
        DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }
}

impl BlockCipher for DES {
    fn name(&self) -> &'static str {
        "DES"
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_BITS
    }

    fn key_size(&self) -> usize {
        DES_KEY_BITS
    }

    fn expand_key(&self, key: &BitsSlice) -> Result<Vec<Bits>, CipherError> {
        self.key_expansion.generate_round_keys(key)
    }

    fn encrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError> {
        Self::check_block(block)?;
        let permuted = permute(block, &IP, 1)?;
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, round_keys)?;
        permute(&result, &FP, 1)
    }

    fn decrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError> {
        Self::check_block(block)?;
        let permuted = permute(block, &IP, 1)?;
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, round_keys)?;
        permute(&result, &FP, 1)
    }
}

/// Encrypts UTF-8 text under a hex key with zero padding.
pub fn encode(text: &str, key: &str) -> Result<Bits, CipherError> {
    CipherContext::for_cipher(Box::new(DES::default())).encode(text, key)
}

/// Decrypts ciphertext bits; the result still carries the zero padding.
pub fn decode(ciphertext: &BitsSlice, key: &str) -> Result<Bits, CipherError> {
    CipherContext::for_cipher(Box::new(DES::default())).decode(ciphertext, key)
}
