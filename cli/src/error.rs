use symmetric_cipher::CipherError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CliResult<T> = Result<T, CliError>;
