use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::permute;

/// The DES round function F(R, K) = P(S(E(R) xor K)).
pub struct DesTransformation;

fn substitute(mixed: u64) -> u64 {
    S_BOXES.iter().enumerate().fold(0u64, |acc, (box_i, sbox)| {
        let chunk = ((mixed >> (42 - 6 * box_i)) & 0x3F) as usize;
        // outer bits pick the row, inner four the column
        let row = ((chunk >> 4) & 0b10) | (chunk & 0b1);
        let col = (chunk >> 1) & 0xF;
        (acc << 4) | u64::from(sbox[row * 16 + col])
    })
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, half_block: u32, round_key: u64) -> u32 {
        let expanded = permute(u64::from(half_block), 32, &E);
        let substituted = substitute(expanded ^ round_key);
        permute(substituted, 32, &P) as u32
    }
}
