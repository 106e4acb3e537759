use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// Owned bit vector, most significant bit of every byte first.
pub type Bits = BitVec<u8, Msb0>;

/// Borrowed view of [`Bits`].
pub type BitsSlice = BitSlice<u8, Msb0>;

/// Width of one fill-pattern repetition.
pub const FILL_UNIT: usize = 8;

/// How the last, short block of a message is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Append zero bits.
    Zeros,
    /// Append repetitions of an 8-bit pattern. The gap must be a whole number
    /// of bytes.
    Fill(u8),
}

pub fn bytes_to_bits(input: &[u8]) -> Bits {
    Bits::from_slice(input)
}

/// Packs bits into bytes. A trailing partial byte is left aligned.
pub fn bits_to_bytes(bits: &BitsSlice) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .by_vals()
                .enumerate()
                .fold(0u8, |byte, (i, bit)| if bit { byte | 1 << (7 - i) } else { byte })
        })
        .collect()
}

pub fn text_to_bits(text: &str) -> Bits {
    bytes_to_bits(text.as_bytes())
}

/// Parses hex digits into exactly four bits per digit.
fn parse_hex_digits(digits: &str) -> Result<Bits, hex::FromHexError> {
    if digits.len() % 2 == 0 {
        return hex::decode(digits).map(Bits::from_vec);
    }

    let bytes = hex::decode(format!("0{digits}"))?;
    Ok(bytes_to_bits(&bytes)[4..].to_bitvec())
}

/// Parses a hexadecimal key and normalizes it to `target_length` bits.
///
/// Shorter keys are left-padded with zero bits. Longer keys keep only their
/// `target_length` least significant bits, so `"1F"` normalized to 4 bits is
/// `0xF`.
pub fn hex_key_to_bits(hex_key: &str, target_length: usize) -> Result<Bits, CipherError> {
    if target_length == 0 {
        return Err(CipherError::InvalidKeyFormat(
            "target length must be greater than zero".into(),
        ));
    }

    let digits = hex_key.trim();
    if digits.is_empty() {
        return Err(CipherError::InvalidKeyFormat("key is empty".into()));
    }

    let natural = parse_hex_digits(digits)
        .map_err(|e| CipherError::InvalidKeyFormat(format!("{digits:?}: {e}")))?;

    if natural.len() >= target_length {
        return Ok(natural[natural.len() - target_length..].to_bitvec());
    }

    let mut key = Bits::repeat(false, target_length - natural.len());
    key.extend_from_bitslice(&natural);
    Ok(key)
}

/// Parses ciphertext rendered as hex, four bits per digit.
pub fn hex_to_bits(hex_text: &str) -> Result<Bits, CipherError> {
    parse_hex_digits(hex_text.trim())
        .map_err(|e| CipherError::InvalidCiphertext(e.to_string()))
}

/// Renders bits as lowercase hex, one digit per started nibble.
pub fn bits_to_hex(bits: &BitsSlice) -> String {
    let mut rendered = hex::encode(bits_to_bytes(bits));
    rendered.truncate(bits.len().div_ceil(4));
    rendered
}

/// Partitions `bits` into blocks of `block_length`, padding the last one.
///
/// Input that is already a multiple of `block_length` gets no extra block,
/// and empty input yields no blocks at all.
///
/// # Panics
///
/// Panics if `block_length` is zero.
pub fn split_into_blocks(
    bits: &BitsSlice,
    block_length: usize,
    padding: Padding,
) -> Result<Vec<Bits>, CipherError> {
    let mut blocks: Vec<Bits> = bits
        .chunks(block_length)
        .map(|chunk| chunk.to_bitvec())
        .collect();

    if let Some(last) = blocks.last_mut() {
        let gap = block_length - last.len();
        if gap > 0 {
            pad_block(last, gap, padding)?;
        }
    }

    Ok(blocks)
}

fn pad_block(block: &mut Bits, gap: usize, padding: Padding) -> Result<(), CipherError> {
    match padding {
        Padding::Zeros => block.resize(block.len() + gap, false),
        Padding::Fill(pattern) => {
            if gap % FILL_UNIT != 0 {
                return Err(CipherError::UnfillableBlock {
                    gap,
                    unit: FILL_UNIT,
                });
            }
            for _ in 0..gap / FILL_UNIT {
                block.extend_from_bitslice(pattern.view_bits::<Msb0>());
            }
        }
    }
    Ok(())
}

/// Drops the trailing zero bytes left behind by zero padding.
pub fn strip_zero_padding(data: &[u8]) -> &[u8] {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &data[..end]
}

/// Bitwise XOR of two equally long bit vectors.
pub fn xor_bits(left: &BitsSlice, right: &BitsSlice) -> Result<Bits, CipherError> {
    if left.len() != right.len() {
        return Err(CipherError::InvalidBlockLength {
            expected: left.len(),
            actual: right.len(),
        });
    }

    Ok(left
        .iter()
        .by_vals()
        .zip(right.iter().by_vals())
        .map(|(a, b)| a ^ b)
        .collect())
}

/// Reads a bit slice as an unsigned big-endian number.
pub fn bits_to_usize(bits: &BitsSlice) -> usize {
    bits.iter()
        .by_vals()
        .fold(0, |acc, bit| (acc << 1) | usize::from(bit))
}

/// Appends the `width` low bits of `value`, most significant first.
pub fn push_value(bits: &mut Bits, value: usize, width: usize) {
    for shift in (0..width).rev() {
        bits.push((value >> shift) & 1 == 1);
    }
}
