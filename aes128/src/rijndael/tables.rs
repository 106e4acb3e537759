use crate::gf::arithmetic::gf_mul;

/// Round constants, one word per key expansion step.
pub const RCON: [[u8; 4]; 10] = [
    [0x01, 0x00, 0x00, 0x00],
    [0x02, 0x00, 0x00, 0x00],
    [0x04, 0x00, 0x00, 0x00],
    [0x08, 0x00, 0x00, 0x00],
    [0x10, 0x00, 0x00, 0x00],
    [0x20, 0x00, 0x00, 0x00],
    [0x40, 0x00, 0x00, 0x00],
    [0x80, 0x00, 0x00, 0x00],
    [0x1B, 0x00, 0x00, 0x00],
    [0x36, 0x00, 0x00, 0x00],
];

pub const MIX_COLUMNS_COEFFICIENTS: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

pub const INV_MIX_COLUMNS_COEFFICIENTS: [[u8; 4]; 4] = [
    [0x0E, 0x0B, 0x0D, 0x09],
    [0x09, 0x0E, 0x0B, 0x0D],
    [0x0D, 0x09, 0x0E, 0x0B],
    [0x0B, 0x0D, 0x09, 0x0E],
];

/// `table[i][j][x]` is `coefficients[i][j] · x` in GF(2⁸).
pub type GaloisTable = [[[u8; 256]; 4]; 4];

const fn galois_table(coefficients: [[u8; 4]; 4]) -> GaloisTable {
    let mut table = [[[0u8; 256]; 4]; 4];
    let mut i = 0;
    while i < 4 {
        let mut j = 0;
        while j < 4 {
            let mut x = 0;
            while x < 256 {
                table[i][j][x] = gf_mul(coefficients[i][j], x as u8);
                x += 1;
            }
            j += 1;
        }
        i += 1;
    }
    table
}

pub static MIX_COLUMNS_MATRIX: GaloisTable = galois_table(MIX_COLUMNS_COEFFICIENTS);

pub static INV_MIX_COLUMNS_MATRIX: GaloisTable = galois_table(INV_MIX_COLUMNS_COEFFICIENTS);
