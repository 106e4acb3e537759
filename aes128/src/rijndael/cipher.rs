use crate::rijndael::key_schedule::{AesKeyExpansion, KEY_BITS, ROUNDS};
use crate::rijndael::state::{
    add_round_key, mix_columns, shift_rows, state_from_bits, state_to_bits, substitute_state,
    Direction, State, BLOCK_BITS,
};
use std::sync::Arc;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::crypto::utils::{Bits, BitsSlice};

pub type RoundKeys = [State; ROUNDS + 1];

/// AES with a 128-bit key: ten rounds over a column-major 4×4 byte state.
pub struct Aes128 {
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
}

impl Aes128 {
    pub fn new(key_expansion: Arc<dyn KeyExpansion + Send + Sync>) -> Self {
        Aes128 { key_expansion }
    }

    fn round_states(round_keys: &[Bits]) -> Result<RoundKeys, CipherError> {
        let states = round_keys
            .iter()
            .map(|key| state_from_bits(key))
            .collect::<Result<Vec<State>, _>>()?;
        states
            .try_into()
            .map_err(|states: Vec<State>| CipherError::RoundKeyCount {
                expected: ROUNDS + 1,
                actual: states.len(),
            })
    }
}

impl Default for Aes128 {
    fn default() -> Self {
        Aes128::new(Arc::new(AesKeyExpansion))
    }
}

pub fn encrypt_state(block: State, round_keys: &RoundKeys) -> State {
    let mut state = add_round_key(block, &round_keys[0]);
    for round_key in &round_keys[1..ROUNDS] {
        state = substitute_state(state, Direction::Forward);
        state = shift_rows(state, Direction::Forward);
        state = mix_columns(state, Direction::Forward);
        state = add_round_key(state, round_key);
    }
    state = substitute_state(state, Direction::Forward);
    state = shift_rows(state, Direction::Forward);
    add_round_key(state, &round_keys[ROUNDS])
}

pub fn decrypt_state(block: State, round_keys: &RoundKeys) -> State {
    let mut state = add_round_key(block, &round_keys[ROUNDS]);
    for round_key in round_keys[1..ROUNDS].iter().rev() {
        state = shift_rows(state, Direction::Inverse);
        state = substitute_state(state, Direction::Inverse);
        state = add_round_key(state, round_key);
        state = mix_columns(state, Direction::Inverse);
    }
    state = shift_rows(state, Direction::Inverse);
    state = substitute_state(state, Direction::Inverse);
    add_round_key(state, &round_keys[0])
}

impl BlockCipher for Aes128 {
    fn name(&self) -> &'static str {
        "AES-128"
    }

    fn block_size(&self) -> usize {
        BLOCK_BITS
    }

    fn key_size(&self) -> usize {
        KEY_BITS
    }

    fn expand_key(&self, key: &BitsSlice) -> Result<Vec<Bits>, CipherError> {
        self.key_expansion.generate_round_keys(key)
    }

    fn encrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError> {
        let state = state_from_bits(block)?;
        let keys = Self::round_states(round_keys)?;
        Ok(state_to_bits(&encrypt_state(state, &keys)))
    }

    fn decrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError> {
        let state = state_from_bits(block)?;
        let keys = Self::round_states(round_keys)?;
        Ok(state_to_bits(&decrypt_state(state, &keys)))
    }
}

/// Encrypts UTF-8 text under a hex key, zero padding the last block.
pub fn encode(text: &str, key: &str) -> Result<Bits, CipherError> {
    CipherContext::for_cipher(Box::new(Aes128::default())).encode(text, key)
}

pub fn decode(ciphertext: &BitsSlice, key: &str) -> Result<Bits, CipherError> {
    CipherContext::for_cipher(Box::new(Aes128::default())).decode(ciphertext, key)
}
