use aes128::gf::arithmetic::{gf_inv, gf_mul};
use aes128::rijndael::sbox::{inv_sbox, sbox};
use aes128::Aes128;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::{bits_to_bytes, bits_to_hex, strip_zero_padding};

fn main() -> Result<(), CipherError> {
    println!("{{57}} · {{83}} = {{{:02x}}}", gf_mul(0x57, 0x83));
    println!("{{53}}⁻¹ = {{{:02x}}}", gf_inv(0x53));
    println!("S(53) = {:02x}, S⁻¹(ed) = {:02x}", sbox(0x53), inv_sbox(0xed));

    let key = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA";
    let text = "Hello, World!";
    let ctx = CipherContext::for_cipher(Box::new(Aes128::default()));

    let encrypted = ctx.encode(text, key)?;
    println!("AES-128 ciphertext: {}", bits_to_hex(&encrypted));

    let decrypted = bits_to_bytes(&ctx.decode(&encrypted, key)?);
    println!(
        "AES-128 plaintext:  {:?}",
        String::from_utf8_lossy(strip_zero_padding(&decrypted))
    );

    Ok(())
}
