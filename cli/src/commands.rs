use crate::error::{CliError, CliResult};
use aes128::Aes128;
use clap::{Args, ValueEnum};
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::utils::{
    bits_to_bytes, bits_to_hex, bytes_to_bits, strip_zero_padding,
};
use symmetric_cipher::{BlockCipher, CipherContext, Padding, Parallelism};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Des,
    Aes,
}

/// Settings shared by both subcommands.
#[derive(Args, Debug, Clone)]
pub struct Options {
    /// Cipher to use
    #[arg(short, long, value_enum, default_value = "des")]
    pub algorithm: Algorithm,

    /// Key as a hex string, widened or truncated to the cipher's key size
    #[arg(short, long)]
    pub key: String,

    /// Pad the last block with this character instead of zero bytes
    #[arg(long)]
    pub fill: Option<char>,

    /// Always process blocks on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

impl Options {
    fn padding(&self) -> CliResult<Padding> {
        match self.fill {
            None => Ok(Padding::Zeros),
            Some(c) if c.is_ascii() => Ok(Padding::Fill(c as u8)),
            Some(c) => Err(CliError::InvalidInput(format!(
                "fill character {c:?} is not a single byte"
            ))),
        }
    }

    fn context(&self) -> CliResult<CipherContext> {
        validate_hex("key", &self.key)?;
        let algorithm: Box<dyn BlockCipher + Send + Sync> = match self.algorithm {
            Algorithm::Des => Box::new(DES::default()),
            Algorithm::Aes => Box::new(Aes128::default()),
        };
        let parallelism = if self.parallel {
            Parallelism::Parallel
        } else {
            Parallelism::Auto
        };
        Ok(CipherContext::new(algorithm, self.padding()?).with_parallelism(parallelism))
    }
}

fn validate_hex(field: &str, value: &str) -> CliResult<()> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CliError::InvalidInput(format!(
            "{field} must be a non-empty hex string, got {value:?}"
        )));
    }
    Ok(())
}

/// Encrypts `text` and renders the ciphertext as hex.
pub fn encode(options: &Options, text: &str) -> CliResult<String> {
    let ctx = options.context()?;
    let ciphertext = ctx.encode(text, &options.key)?;
    log::info!("encoded {} bytes into {} bits", text.len(), ciphertext.len());
    Ok(bits_to_hex(&ciphertext))
}

/// Decrypts hex ciphertext. Shows text when the plaintext, minus its
/// padding, is valid UTF-8 and falls back to hex otherwise.
pub fn decode(options: &Options, ciphertext: &str) -> CliResult<String> {
    validate_hex("ciphertext", ciphertext)?;
    let ctx = options.context()?;
    let plaintext = bits_to_bytes(&ctx.decode_hex(ciphertext, &options.key)?);
    let unpadded = match ctx.padding() {
        Padding::Zeros => strip_zero_padding(&plaintext),
        Padding::Fill(_) => &plaintext[..],
    };
    match std::str::from_utf8(unpadded) {
        Ok(text) => Ok(text.to_owned()),
        Err(e) => {
            log::warn!("plaintext is not valid UTF-8 ({e}), showing hex");
            Ok(bits_to_hex(&bytes_to_bits(&plaintext)))
        }
    }
}
