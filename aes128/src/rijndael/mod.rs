pub mod cipher;
pub mod key_schedule;
pub mod sbox;
pub mod state;
pub mod tables;
