use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use symmetric_cipher::crypto::cipher_context::{CipherContext, Parallelism};
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::*;

/// Flips every bit and tags nothing else; enough to observe block routing.
struct InvertCipher;

impl BlockCipher for InvertCipher {
    fn name(&self) -> &'static str {
        "invert"
    }

    fn block_size(&self) -> usize {
        16
    }

    fn key_size(&self) -> usize {
        8
    }

    fn expand_key(&self, key: &BitsSlice) -> Result<Vec<Bits>, CipherError> {
        Ok(vec![key.to_bitvec()])
    }

    fn encrypt_block(&self, block: &BitsSlice, _round_keys: &[Bits]) -> Result<Bits, CipherError> {
        Ok(block.iter().by_vals().map(|b| !b).collect())
    }

    fn decrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError> {
        self.encrypt_block(block, round_keys)
    }
}

/// Fails on any block whose first bit is set.
struct PickyCipher;

impl BlockCipher for PickyCipher {
    fn name(&self) -> &'static str {
        "picky"
    }

    fn block_size(&self) -> usize {
        8
    }

    fn key_size(&self) -> usize {
        8
    }

    fn expand_key(&self, _key: &BitsSlice) -> Result<Vec<Bits>, CipherError> {
        Ok(Vec::new())
    }

    fn encrypt_block(&self, block: &BitsSlice, _round_keys: &[Bits]) -> Result<Bits, CipherError> {
        if block[0] {
            return Err(CipherError::OddBlockLength(block.len()));
        }
        Ok(block.to_bitvec())
    }

    fn decrypt_block(&self, block: &BitsSlice, round_keys: &[Bits]) -> Result<Bits, CipherError> {
        self.encrypt_block(block, round_keys)
    }
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

#[test]
fn test_blocks_are_processed_independently() {
    let ctx = CipherContext::new(Box::new(InvertCipher), Padding::Zeros);
    let out = ctx.encrypt_bits(&bytes_to_bits(b"\x00\xFF\x0F\xF0"), "00").unwrap();
    assert_eq!(bits_to_bytes(&out), b"\xFF\x00\xF0\x0F".to_vec());
}

#[test]
fn test_parallel_matches_sequential() {
    let data = bytes_to_bits(&random_bytes(8 * 1024));
    let sequential = CipherContext::for_cipher(Box::new(DES::default()))
        .with_parallelism(Parallelism::Sequential)
        .encrypt_bits(&data, "0E329232EA6D0D73")
        .unwrap();
    let parallel = CipherContext::for_cipher(Box::new(DES::default()))
        .with_parallelism(Parallelism::Parallel)
        .encrypt_bits(&data, "0E329232EA6D0D73")
        .unwrap();
    assert_eq!(sequential, parallel);

    let decrypted = CipherContext::for_cipher(Box::new(DES::default()))
        .with_parallelism(Parallelism::Auto)
        .decode(&parallel, "0E329232EA6D0D73")
        .unwrap();
    assert_eq!(decrypted, data);
}

#[test]
fn test_empty_input_gives_empty_output() {
    let ctx = CipherContext::for_cipher(Box::new(DES::default()));
    assert!(ctx.encode("", "F").unwrap().is_empty());
    assert!(ctx.decode(&Bits::new(), "F").unwrap().is_empty());
}

#[test]
fn test_aligned_input_has_no_padding_block() {
    let ctx = CipherContext::for_cipher(Box::new(DES::default()));
    let out = ctx.encode("exactly8", "F").unwrap();
    assert_eq!(out.len(), 64);
}

#[test]
fn test_short_final_block_is_padded() {
    let ctx = CipherContext::new(Box::new(InvertCipher), Padding::Fill(0x0F));
    let out = ctx.encrypt_bits(&bytes_to_bits(b"\xAA\xAA\xAA"), "00").unwrap();
    assert_eq!(bits_to_bytes(&out), b"\x55\x55\x55\xF0".to_vec());
}

#[test]
fn test_decode_hex() {
    let ctx = CipherContext::for_cipher(Box::new(DES::default()));
    let plain = ctx.decode_hex("6BAF143DBE844F98", "F").unwrap();
    assert_eq!(strip_zero_padding(&bits_to_bytes(&plain)), b"qwerty");

    assert!(matches!(
        ctx.decode_hex("6BAF143DBE84ZZ98", "F"),
        Err(CipherError::InvalidCiphertext(_))
    ));
}

#[test]
fn test_block_error_aborts_whole_call() {
    let ctx = CipherContext::new(Box::new(PickyCipher), Padding::Zeros);
    let bits = bytes_to_bits(b"\x01\x02\x80\x03");
    assert_eq!(
        ctx.encrypt_bits(&bits, "00").unwrap_err(),
        CipherError::OddBlockLength(8)
    );

    let parallel = ctx.with_parallelism(Parallelism::Parallel);
    assert!(parallel.encrypt_bits(&bits, "00").is_err());
}

#[test]
fn test_unfillable_ciphertext_is_rejected() {
    let ctx = CipherContext::new(Box::new(DES::default()), Padding::Fill(b' '));
    // 68 bits: the 60-bit gap is not a whole number of fill units
    let ciphertext = bitvec![u8, Msb0; 0; 68];
    assert_eq!(
        ctx.decode(&ciphertext, "F").unwrap_err(),
        CipherError::UnfillableBlock { gap: 60, unit: 8 }
    );
}

#[test]
fn test_round_keys_are_derived_per_call() {
    let ctx = CipherContext::for_cipher(Box::new(DES::default()));
    let first = ctx.round_keys("F").unwrap();
    let other = ctx.round_keys("E").unwrap();
    assert_eq!(first.len(), 16);
    assert_ne!(first, other);
    assert_eq!(first, ctx.round_keys("0F").unwrap());
}
