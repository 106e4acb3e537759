use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::{bits_to_bytes, bits_to_hex, strip_zero_padding, Padding};

fn main() -> Result<(), CipherError> {
    let text = "The quick brown fox jumps over the lazy dog.";
    let key = "0E329232EA6D0D73";

    for (label, padding) in [("zeros", Padding::Zeros), ("fill ' '", Padding::Fill(b' '))] {
        let ctx = CipherContext::new(Box::new(DES::default()), padding);

        let encrypted = ctx.encode(text, key)?;
        println!("DES [{label}] ciphertext: {}", bits_to_hex(&encrypted));

        let decrypted = bits_to_bytes(&ctx.decode(&encrypted, key)?);
        println!(
            "DES [{label}] plaintext:  {:?}",
            String::from_utf8_lossy(strip_zero_padding(&decrypted))
        );
    }

    Ok(())
}
