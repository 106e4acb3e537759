use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::permutation::permute;
use crate::crypto::utils::{bits_to_usize, push_value, xor_bits, Bits, BitsSlice};

const S_BOX_INPUT: usize = 6;
const S_BOX_OUTPUT: usize = 4;

/// Looks up one 6-bit group: outer bits pick the row, inner four the column.
fn substitute(box_index: usize, group: &BitsSlice) -> u8 {
    let row = (usize::from(group[0]) << 1) | usize::from(group[S_BOX_INPUT - 1]);
    let col = bits_to_usize(&group[1..S_BOX_INPUT - 1]);
    S_BOXES[box_index][row][col]
}

/// The DES round function f(R, K).
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, r_block: &BitsSlice, round_key: &BitsSlice) -> Result<Bits, CipherError> {
        // 1. Expansion
        let expanded = permute(r_block, &E, 1)?;

        // 2. XOR
        let mixed = xor_bits(&expanded, round_key)?;

        // 3. S-boxes
        let mut s_result = Bits::with_capacity(S_BOXES.len() * S_BOX_OUTPUT);
        for (box_index, group) in mixed.chunks_exact(S_BOX_INPUT).enumerate() {
            let value = substitute(box_index, group);
            push_value(&mut s_result, usize::from(value), S_BOX_OUTPUT);
        }

        // 4. P-permutation
        permute(&s_result, &P, 1)
    }
}
