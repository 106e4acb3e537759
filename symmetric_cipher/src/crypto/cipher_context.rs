use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::error::CipherError;
use crate::crypto::utils::{
    hex_key_to_bits, hex_to_bits, split_into_blocks, text_to_bits, Bits, BitsSlice, Padding,
};
use rayon::prelude::*;
use std::sync::Arc;

// Below this many blocks thread dispatch costs more than it saves.
const PARALLELISM_THRESHOLD: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    Sequential,
    #[default]
    Auto,
    Parallel,
}

/// Runs a [`BlockCipher`] over whole messages, block by block.
///
/// Every call derives a fresh round key set from the hex key and shares it,
/// read-only, across all blocks of that call. Blocks are independent (no
/// chaining), so they may be processed in parallel; output order always
/// follows input order.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher + Send + Sync>,
    padding: Padding,
    parallelism: Parallelism,
}

impl CipherContext {
    pub fn new(algorithm: Box<dyn BlockCipher + Send + Sync>, padding: Padding) -> Self {
        Self {
            algorithm: Arc::from(algorithm),
            padding,
            parallelism: Parallelism::default(),
        }
    }

    /// Context using the algorithm's own padding policy.
    pub fn for_cipher(algorithm: Box<dyn BlockCipher + Send + Sync>) -> Self {
        let padding = algorithm.default_padding();
        Self::new(algorithm, padding)
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// Normalizes a hex key and expands it into the round key set.
    pub fn round_keys(&self, key: &str) -> Result<Vec<Bits>, CipherError> {
        let key_bits = hex_key_to_bits(key, self.algorithm.key_size())?;
        let round_keys = self.algorithm.expand_key(&key_bits)?;
        log::debug!(
            "{}: derived {} round keys",
            self.algorithm.name(),
            round_keys.len()
        );
        Ok(round_keys)
    }

    pub fn encode(&self, text: &str, key: &str) -> Result<Bits, CipherError> {
        self.encrypt_bits(&text_to_bits(text), key)
    }

    pub fn encrypt_bits(&self, plaintext: &BitsSlice, key: &str) -> Result<Bits, CipherError> {
        let round_keys = self.round_keys(key)?;
        self.process(plaintext, &round_keys, true)
    }

    pub fn decode(&self, ciphertext: &BitsSlice, key: &str) -> Result<Bits, CipherError> {
        let round_keys = self.round_keys(key)?;
        self.process(ciphertext, &round_keys, false)
    }

    pub fn decode_hex(&self, ciphertext: &str, key: &str) -> Result<Bits, CipherError> {
        self.decode(&hex_to_bits(ciphertext)?, key)
    }

    fn process(
        &self,
        data: &BitsSlice,
        round_keys: &[Bits],
        encrypt: bool,
    ) -> Result<Bits, CipherError> {
        let blocks = split_into_blocks(data, self.algorithm.block_size(), self.padding)?;
        let parallel = match self.parallelism {
            Parallelism::Sequential => false,
            Parallelism::Parallel => true,
            Parallelism::Auto => blocks.len() >= PARALLELISM_THRESHOLD,
        };
        log::debug!(
            "{}: {} {} blocks{}",
            self.algorithm.name(),
            if encrypt { "encrypting" } else { "decrypting" },
            blocks.len(),
            if parallel { " in parallel" } else { "" }
        );

        let run_block = |block: &Bits| {
            if encrypt {
                self.algorithm.encrypt_block(block, round_keys)
            } else {
                self.algorithm.decrypt_block(block, round_keys)
            }
        };

        let processed: Vec<Bits> = if parallel {
            blocks.par_iter().map(run_block).collect::<Result<_, _>>()?
        } else {
            blocks.iter().map(run_block).collect::<Result<_, _>>()?
        };

        let mut output = Bits::with_capacity(processed.len() * self.algorithm.block_size());
        for block in &processed {
            output.extend_from_bitslice(block);
        }
        Ok(output)
    }
}
