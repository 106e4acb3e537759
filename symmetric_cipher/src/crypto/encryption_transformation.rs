use crate::crypto::error::CipherError;
use crate::crypto::utils::{Bits, BitsSlice};

/// Round function of a Feistel network.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &BitsSlice, round_key: &BitsSlice)
        -> Result<Bits, CipherError>;
}
