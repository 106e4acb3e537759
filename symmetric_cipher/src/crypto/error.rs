use thiserror::Error;

/// Failures of the block cipher engines.
///
/// None of them is recoverable inside a single `encode`/`decode` call: the
/// call is aborted and no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error(
        "permutation table range [{min}, {max}] does not fit a block of {block_len} bits"
    )]
    PermutationOutOfRange {
        min: isize,
        max: isize,
        block_len: usize,
    },

    #[error("block of {0} bits cannot be split into equal halves")]
    OddBlockLength(usize),

    #[error("a gap of {gap} bits cannot be filled with {unit}-bit fill units")]
    UnfillableBlock { gap: usize, unit: usize },

    #[error("expected a block of {expected} bits, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("expected {expected} round keys, got {actual}")]
    RoundKeyCount { expected: usize, actual: usize },

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),
}
