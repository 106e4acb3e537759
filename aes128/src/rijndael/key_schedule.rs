use crate::rijndael::state::{
    state_from_bits, state_to_bits, substitute_word, xor_words, Direction, State, Word,
};
use crate::rijndael::tables::RCON;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::crypto::utils::{Bits, BitsSlice};

pub const KEY_BITS: usize = 128;
pub const ROUNDS: usize = 10;

fn rot_word(mut word: Word) -> Word {
    word.rotate_left(1);
    word
}

/// Derives round key `round + 1` from round key `round`.
pub fn next_round_key(previous: &State, round: usize) -> State {
    let temp = substitute_word(rot_word(previous[3]), Direction::Forward);
    let mut next = *previous;
    next[0] = xor_words(xor_words(previous[0], temp), RCON[round]);
    for i in 1..4 {
        next[i] = xor_words(previous[i], next[i - 1]);
    }
    next
}

/// All 11 round keys, the cipher key first.
pub fn expand_key(key: &State) -> Vec<State> {
    let mut round_keys = Vec::with_capacity(ROUNDS + 1);
    round_keys.push(*key);
    for round in 0..ROUNDS {
        let next = next_round_key(&round_keys[round], round);
        round_keys.push(next);
    }
    round_keys
}

pub struct AesKeyExpansion;

impl KeyExpansion for AesKeyExpansion {
    fn generate_round_keys(&self, key: &BitsSlice) -> Result<Vec<Bits>, CipherError> {
        if key.len() != KEY_BITS {
            return Err(CipherError::InvalidKeyFormat(format!(
                "AES-128 expects a {KEY_BITS}-bit key, got {} bits",
                key.len()
            )));
        }
        let round_keys = expand_key(&state_from_bits(key)?);
        log::trace!("AES-128: expanded key into {} round keys", round_keys.len());
        Ok(round_keys.iter().map(state_to_bits).collect())
    }
}
