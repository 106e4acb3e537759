//! The AES state and its round transformations.
//!
//! A state is four columns of four bytes; block byte `4c + r` sits in column
//! `c`, row `r`. Every transformation takes a state by value and returns the
//! transformed one.

use crate::rijndael::sbox::{inv_sbox, sbox};
use crate::rijndael::tables::{GaloisTable, INV_MIX_COLUMNS_MATRIX, MIX_COLUMNS_MATRIX};
use bitvec::prelude::*;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::{bits_to_bytes, Bits, BitsSlice};

pub const BLOCK_BITS: usize = 128;

pub type Word = [u8; 4];
pub type State = [Word; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

pub fn state_from_bytes(bytes: &[u8; 16]) -> State {
    std::array::from_fn(|c| std::array::from_fn(|r| bytes[c * 4 + r]))
}

pub fn state_to_bytes(state: &State) -> [u8; 16] {
    std::array::from_fn(|i| state[i / 4][i % 4])
}

pub fn state_from_bits(bits: &BitsSlice) -> Result<State, CipherError> {
    if bits.len() != BLOCK_BITS {
        return Err(CipherError::InvalidBlockLength {
            expected: BLOCK_BITS,
            actual: bits.len(),
        });
    }
    let bytes = bits_to_bytes(bits);
    Ok(std::array::from_fn(|c| {
        std::array::from_fn(|r| bytes[c * 4 + r])
    }))
}

pub fn state_to_bits(state: &State) -> Bits {
    state_to_bytes(state).view_bits::<Msb0>().to_bitvec()
}

pub fn substitute_word(word: Word, direction: Direction) -> Word {
    let lookup = match direction {
        Direction::Forward => sbox,
        Direction::Inverse => inv_sbox,
    };
    word.map(lookup)
}

pub fn substitute_state(state: State, direction: Direction) -> State {
    state.map(|word| substitute_word(word, direction))
}

fn transpose(state: State) -> State {
    std::array::from_fn(|i| std::array::from_fn(|j| state[j][i]))
}

/// Rotates row `i` by `i` positions, left forward and right inverse.
pub fn shift_rows(state: State, direction: Direction) -> State {
    let mut rows = transpose(state);
    for (i, row) in rows.iter_mut().enumerate() {
        match direction {
            Direction::Forward => row.rotate_left(i),
            Direction::Inverse => row.rotate_right(i),
        }
    }
    transpose(rows)
}

fn mix_column(word: Word, matrix: &GaloisTable) -> Word {
    std::array::from_fn(|i| {
        matrix[i]
            .iter()
            .zip(word)
            .fold(0, |acc, (table, byte)| acc ^ table[usize::from(byte)])
    })
}

pub fn mix_columns(state: State, direction: Direction) -> State {
    let matrix = match direction {
        Direction::Forward => &MIX_COLUMNS_MATRIX,
        Direction::Inverse => &INV_MIX_COLUMNS_MATRIX,
    };
    state.map(|word| mix_column(word, matrix))
}

pub fn xor_words(first: Word, second: Word) -> Word {
    std::array::from_fn(|i| first[i] ^ second[i])
}

pub fn add_round_key(state: State, round_key: &State) -> State {
    std::array::from_fn(|c| xor_words(state[c], round_key[c]))
}
