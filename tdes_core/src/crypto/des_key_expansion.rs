use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::key::Key;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{permute, rotate_half_left};

pub const ROUNDS: usize = 16;

/// The sixteen 48-bit round keys of one DES key, in encryption order.
///
/// Derived once and only read afterwards, so one schedule can be shared by
/// every worker of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchedule {
    round_keys: [u64; ROUNDS],
}

impl KeySchedule {
    pub fn new(key: Key) -> Self {
        Self::from_key_block(key.to_key_block())
    }

    /// Schedule for a raw 64-bit key field; parity bits are ignored.
    pub fn from_key_block(key_block: u64) -> Self {
        Self {
            round_keys: DesKeyExpansion.expand(key_block),
        }
    }

    pub fn round_keys(&self) -> &[u64; ROUNDS] {
        &self.round_keys
    }
}

pub struct DesKeyExpansion;

impl DesKeyExpansion {
    pub fn expand(&self, key_block: u64) -> [u64; ROUNDS] {
        // PC-1 drops the parity bits and splits the key into C0 || D0
        let cd = permute(key_block, 64, &PC1);
        let mut c = (cd >> 28) as u32;
        let mut d = (cd & 0x0FFF_FFFF) as u32;

        let mut round_keys = [0u64; ROUNDS];
        for (round_key, &shift) in round_keys.iter_mut().zip(SHIFT_BITS.iter()) {
            c = rotate_half_left(c, shift);
            d = rotate_half_left(d, shift);
            *round_key = permute((u64::from(c) << 28) | u64::from(d), 56, &PC2);
        }
        round_keys
    }
}

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key_block: u64) -> Vec<u64> {
        self.expand(key_block).to_vec()
    }
}
