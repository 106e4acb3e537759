use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::permutation::{cyclic_shift, permute, ShiftDirection};
use crate::crypto::utils::{Bits, BitsSlice};

/// Effective DES key width.
pub const DES_KEY_BITS: usize = 56;
/// Key bits covered by one parity bit.
pub const PARITY_GROUP: usize = 7;
pub const SUBKEY_BITS: usize = 48;

/// Parity bit that makes `group` plus the bit hold an odd number of ones.
pub fn odd_parity_bit(group: &BitsSlice) -> bool {
    group.count_ones() % 2 == 0
}

/// Appends an odd parity bit to every `PARITY_GROUP` bits of `key`.
///
/// A 56-bit key becomes the 64-bit extended key that [`PC1`] expects.
pub fn add_parity_bits(key: &BitsSlice) -> Result<Bits, CipherError> {
    if key.len() % PARITY_GROUP != 0 {
        return Err(CipherError::InvalidKeyFormat(format!(
            "key length {} is not a multiple of {PARITY_GROUP}",
            key.len()
        )));
    }

    let mut extended = Bits::with_capacity(key.len() / PARITY_GROUP * (PARITY_GROUP + 1));
    for group in key.chunks(PARITY_GROUP) {
        extended.extend_from_bitslice(group);
        extended.push(odd_parity_bit(group));
    }
    Ok(extended)
}

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &BitsSlice) -> Result<Vec<Bits>, CipherError> {
        if key.len() != DES_KEY_BITS {
            return Err(CipherError::InvalidKeyFormat(format!(
                "DES key must be {DES_KEY_BITS} bits, got {}",
                key.len()
            )));
        }

        let extended = add_parity_bits(key)?;
        let shuffled = permute(&extended, &PC1, 1)?;

        let (c, d) = shuffled.split_at(shuffled.len() / 2);
        let mut c = c.to_bitvec();
        let mut d = d.to_bitvec();

        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            c = cyclic_shift(&c, shift, ShiftDirection::Left);
            d = cyclic_shift(&d, shift, ShiftDirection::Left);

            let mut cd = c.clone();
            cd.extend_from_bitslice(&d);
            round_keys.push(permute(&cd, &PC2, 1)?);
        }

        Ok(round_keys)
    }
}
