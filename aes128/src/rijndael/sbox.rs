use crate::gf::arithmetic::gf_inv;

/// FIPS-197 affine map: b ⊕ (b ⋘ 1) ⊕ (b ⋘ 2) ⊕ (b ⋘ 3) ⊕ (b ⋘ 4) ⊕ 0x63.
const fn affine(x: u8) -> u8 {
    x ^ x.rotate_left(1) ^ x.rotate_left(2) ^ x.rotate_left(3) ^ x.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [[u8; 16]; 16] {
    let mut table = [[0u8; 16]; 16];
    let mut x = 0;
    while x < 256 {
        table[x >> 4][x & 0x0F] = affine(gf_inv(x as u8));
        x += 1;
    }
    table
}

const fn invert(sbox: &[[u8; 16]; 16]) -> [[u8; 16]; 16] {
    let mut inverse = [[0u8; 16]; 16];
    let mut x = 0;
    while x < 256 {
        let s = sbox[x >> 4][x & 0x0F] as usize;
        inverse[s >> 4][s & 0x0F] = x as u8;
        x += 1;
    }
    inverse
}

const SBOX_TABLE: [[u8; 16]; 16] = build_sbox();

/// Forward S-box, row = high nibble, column = low nibble.
pub static SBOX: [[u8; 16]; 16] = SBOX_TABLE;

pub static INV_SBOX: [[u8; 16]; 16] = invert(&SBOX_TABLE);

fn lookup(table: &[[u8; 16]; 16], byte: u8) -> u8 {
    table[usize::from(byte >> 4)][usize::from(byte & 0x0F)]
}

pub fn sbox(byte: u8) -> u8 {
    lookup(&SBOX, byte)
}

pub fn inv_sbox(byte: u8) -> u8 {
    lookup(&INV_SBOX, byte)
}
