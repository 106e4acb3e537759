use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128 as ReferenceAes;
use aes128::rijndael::cipher::{decrypt_state, encrypt_state, Aes128, RoundKeys};
use aes128::rijndael::key_schedule::expand_key;
use aes128::rijndael::state::{state_from_bytes, state_to_bytes};
use hex_literal::hex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use symmetric_cipher::crypto::cipher_context::{CipherContext, Parallelism};
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::*;

fn round_keys_for(key: &[u8; 16]) -> RoundKeys {
    let keys = expand_key(&state_from_bytes(key));
    std::array::from_fn(|i| keys[i])
}

#[test]
fn test_fips_appendix_b() {
    let keys = round_keys_for(&hex!("2b7e151628aed2a6abf7158809cf4f3c"));
    let block = state_from_bytes(&hex!("3243f6a8885a308d313198a2e0370734"));
    let encrypted = encrypt_state(block, &keys);
    assert_eq!(
        state_to_bytes(&encrypted),
        hex!("3925841d02dc09fbdc118597196a0b32")
    );
    assert_eq!(decrypt_state(encrypted, &keys), block);
}

#[test]
fn test_fips_appendix_c1() {
    let aes = Aes128::default();
    let key = hex_key_to_bits("000102030405060708090a0b0c0d0e0f", 128).unwrap();
    let round_keys = aes.expand_key(&key).unwrap();
    let plaintext = bytes_to_bits(&hex!("00112233445566778899aabbccddeeff"));

    let ciphertext = aes.encrypt_block(&plaintext, &round_keys).unwrap();
    assert_eq!(bits_to_hex(&ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");
    assert_eq!(aes.decrypt_block(&ciphertext, &round_keys).unwrap(), plaintext);
}

#[test]
fn test_hello_world() {
    let key = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA";
    let ciphertext = aes128::encode("Hello, World!", key).unwrap();
    assert_eq!(bits_to_hex(&ciphertext), "4406ef1a1fc68671a189d1b66deabbb5");

    let plaintext = aes128::decode(&ciphertext, key).unwrap();
    assert_eq!(
        strip_zero_padding(&bits_to_bytes(&plaintext)),
        b"Hello, World!"
    );
}

#[test]
fn test_multi_block_message() {
    let key = "2B7E151628AED2A6ABF7158809CF4F3C";
    let text = "The quick brown fox jumps over the lazy dog";
    let ciphertext = aes128::encode(text, key).unwrap();
    assert_eq!(ciphertext.len(), 3 * 128);
    assert_eq!(
        bits_to_hex(&ciphertext),
        "16fa658731002ad6e34a2fa00f290d9f\
         974f7bac1045574b74c2049e65d2a889\
         5f4998bba6d62c87b938eb78eab0369d"
    );

    let decoded = aes128::decode(&ciphertext, key).unwrap();
    assert_eq!(strip_zero_padding(&bits_to_bytes(&decoded)), text.as_bytes());
}

#[test]
fn test_short_key_is_widened() {
    let ciphertext = aes128::encode("qwerty", "F").unwrap();
    assert_eq!(bits_to_hex(&ciphertext), "ea609f545e55758e73b23640c23828dd");
    assert_eq!(
        ciphertext,
        aes128::encode("qwerty", "0000000000000000000000000000000F").unwrap()
    );
}

#[test]
fn test_matches_reference_implementation() {
    let mut rng = StdRng::seed_from_u64(197);
    let aes = Aes128::default();
    for _ in 0..64 {
        let mut key = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let round_keys = aes.expand_key(&bytes_to_bits(&key)).unwrap();
        let ours = aes
            .encrypt_block(&bytes_to_bits(&block), &round_keys)
            .unwrap();

        let reference = ReferenceAes::new(GenericArray::from_slice(&key));
        let mut expected = GenericArray::clone_from_slice(&block);
        reference.encrypt_block(&mut expected);

        assert_eq!(bits_to_bytes(&ours), expected.to_vec());
    }
}

#[test]
fn test_random_roundtrips() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let len = rng.random_range(0..200);
        let text: String = (0..len)
            .map(|_| char::from(rng.random_range(b' '..=b'~')))
            .collect();
        let key = format!("{:032X}", rng.random::<u128>());

        let ciphertext = aes128::encode(&text, &key).unwrap();
        assert_eq!(ciphertext.len() % 128, 0);
        let decoded = aes128::decode(&ciphertext, &key).unwrap();
        assert_eq!(strip_zero_padding(&bits_to_bytes(&decoded)), text.as_bytes());
    }
}

#[test]
fn test_parallel_context() {
    let mut data = vec![0u8; 16 * 512];
    StdRng::seed_from_u64(11).fill_bytes(&mut data);
    let bits = bytes_to_bits(&data);
    let key = "000102030405060708090A0B0C0D0E0F";

    let sequential = CipherContext::for_cipher(Box::new(Aes128::default()))
        .with_parallelism(Parallelism::Sequential);
    let parallel = CipherContext::for_cipher(Box::new(Aes128::default()))
        .with_parallelism(Parallelism::Parallel);

    let ciphertext = parallel.encrypt_bits(&bits, key).unwrap();
    assert_eq!(ciphertext, sequential.encrypt_bits(&bits, key).unwrap());
    assert_eq!(sequential.decode(&ciphertext, key).unwrap(), bits);
}

#[test]
fn test_fill_padding() {
    let ctx = CipherContext::new(Box::new(Aes128::default()), Padding::Fill(b' '));
    let key = "00";
    let ciphertext = ctx.encode("short", key).unwrap();
    let decoded = ctx.decode(&ciphertext, key).unwrap();
    assert_eq!(bits_to_bytes(&decoded), b"short           ".to_vec());
}

#[test]
fn test_rejects_wrong_round_key_count() {
    let aes = Aes128::default();
    let round_keys = aes
        .expand_key(&hex_key_to_bits("0", 128).unwrap())
        .unwrap();
    let block = Bits::repeat(false, 128);
    assert_eq!(
        aes.encrypt_block(&block, &round_keys[..10]).unwrap_err(),
        CipherError::RoundKeyCount {
            expected: 11,
            actual: 10
        }
    );
}

#[test]
fn test_rejects_wrong_block_width() {
    let aes = Aes128::default();
    let round_keys = aes
        .expand_key(&hex_key_to_bits("0", 128).unwrap())
        .unwrap();
    let block = Bits::repeat(false, 64);
    assert_eq!(
        aes.decrypt_block(&block, &round_keys).unwrap_err(),
        CipherError::InvalidBlockLength {
            expected: 128,
            actual: 64
        }
    );
}

#[test]
fn test_rejects_bad_hex_key() {
    assert!(matches!(
        aes128::encode("text", "not hex"),
        Err(CipherError::InvalidKeyFormat(_))
    ));
}
