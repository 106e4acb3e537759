//! Arithmetic in GF(2⁸) modulo the AES polynomial x⁸ + x⁴ + x³ + x + 1.
//!
//! Everything here is `const fn` so the lookup tables can be built at
//! compile time.

/// Low byte of the reduction polynomial (0x11B).
pub const AES_MODULUS: u8 = 0x1B;

/// Multiplication by x.
pub const fn xtime(a: u8) -> u8 {
    if a & 0x80 != 0 {
        (a << 1) ^ AES_MODULUS
    } else {
        a << 1
    }
}

pub const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Square-and-multiply exponentiation.
pub const fn gf_pow(mut base: u8, mut exp: u32) -> u8 {
    let mut result = 1;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse, a⁻¹ = a²⁵⁴. Zero maps to zero.
pub const fn gf_inv(a: u8) -> u8 {
    if a == 0 {
        0
    } else {
        gf_pow(a, 254)
    }
}
