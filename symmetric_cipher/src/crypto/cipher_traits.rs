use crate::crypto::error::CipherError;
use crate::crypto::utils::{Bits, BitsSlice, Padding};

/// A block cipher driven by a precomputed round key set.
///
/// Implementations hold no key state: the façade derives the round keys once
/// per call and hands the same slice to every block.
pub trait BlockCipher {
    fn name(&self) -> &'static str;

    /// Block width in bits.
    fn block_size(&self) -> usize;

    /// Width in bits a hex key is normalized to before expansion.
    fn key_size(&self) -> usize;

    fn default_padding(&self) -> Padding {
        Padding::Zeros
    }

    /// Round keys in encryption order.
    fn expand_key(&self, key: &BitsSlice) -> Result<Vec<Bits>, CipherError>;

    fn encrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError>;

    /// Inverts [`BlockCipher::encrypt_block`] given the same, encryption
    /// ordered, round keys.
    fn decrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError>;
}
