use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::utils::{xor_bits, Bits, BitsSlice};
use std::sync::Arc;

/// Balanced Feistel structure. Encryption and decryption run the same rounds
/// and differ only in the order the round keys are consumed.
pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &BitsSlice,
        round_keys: &[Bits],
    ) -> Result<Bits, CipherError> {
        self.check_round_keys(round_keys)?;
        self.run(block, round_keys.iter())
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &BitsSlice,
        round_keys: &[Bits],
    ) -> Result<Bits, CipherError> {
        self.check_round_keys(round_keys)?;
        self.run(block, round_keys.iter().rev())
    }

    fn check_round_keys(&self, round_keys: &[Bits]) -> Result<(), CipherError> {
        if round_keys.len() != self.num_round {
            return Err(CipherError::RoundKeyCount {
                expected: self.num_round,
                actual: round_keys.len(),
            });
        }
        Ok(())
    }

    fn run<'a>(
        &self,
        block: &BitsSlice,
        round_keys: impl Iterator<Item = &'a Bits>,
    ) -> Result<Bits, CipherError> {
        if block.len() % 2 != 0 {
            return Err(CipherError::OddBlockLength(block.len()));
        }

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_bitvec();
        let mut right = right.to_bitvec();

        for round_key in round_keys {
            let feistel_out = self.transformation.transform(&right, round_key)?;
            let new_right = xor_bits(&left, &feistel_out)?;
            left = std::mem::replace(&mut right, new_right);
        }

        // halves leave the network swapped: R‖L
        right.extend_from_bitslice(&left);
        Ok(right)
    }
}
