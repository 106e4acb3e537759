use crate::crypto::error::CipherError;
use crate::crypto::utils::{Bits, BitsSlice};

/// Reorders bits of `block` by a table of source positions.
///
/// Output bit `i` is input bit `table[i] - bias`. The table may select fewer
/// or more bits than the block holds (compression and expansion tables), but
/// every biased position has to lie inside the block.
pub fn permute(block: &BitsSlice, table: &[usize], bias: usize) -> Result<Bits, CipherError> {
    let (Some(&min), Some(&max)) = (table.iter().min(), table.iter().max()) else {
        return Ok(Bits::new());
    };

    if min < bias || max - bias >= block.len() {
        return Err(CipherError::PermutationOutOfRange {
            min: min as isize - bias as isize,
            max: max as isize - bias as isize,
            block_len: block.len(),
        });
    }

    Ok(table.iter().map(|&position| block[position - bias]).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Left,
    Right,
}

/// Cyclic rotation of a bit vector. Amounts wrap around its length.
pub fn cyclic_shift(bits: &BitsSlice, amount: usize, direction: ShiftDirection) -> Bits {
    let mut shifted = bits.to_bitvec();
    if shifted.is_empty() {
        return shifted;
    }

    let amount = amount % shifted.len();
    match direction {
        ShiftDirection::Left => shifted.rotate_left(amount),
        ShiftDirection::Right => shifted.rotate_right(amount),
    }
    shifted
}
