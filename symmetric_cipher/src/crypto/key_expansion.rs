use crate::crypto::error::CipherError;
use crate::crypto::utils::{Bits, BitsSlice};

pub trait KeyExpansion {
    /// Derives the ordered round keys from an already normalized key.
    fn generate_round_keys(&self, key: &BitsSlice) -> Result<Vec<Bits>, CipherError>;
}
