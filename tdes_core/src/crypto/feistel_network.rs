use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{join_halves, split_block};
use std::sync::Arc;

pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    pub fn encrypt_with_round_keys(&self, block: u64, round_keys: &[u64]) -> u64 {
        debug_assert!(round_keys.len() >= self.num_round);
        self.run(block, round_keys.iter().take(self.num_round))
    }

    /// Same network, round keys consumed last to first.
    pub fn decrypt_with_round_keys(&self, block: u64, round_keys: &[u64]) -> u64 {
        debug_assert!(round_keys.len() >= self.num_round);
        self.run(block, round_keys.iter().take(self.num_round).rev())
    }

    fn run<'a>(&self, block: u64, round_keys: impl Iterator<Item = &'a u64>) -> u64 {
        let (mut left, mut right) = split_block(block);

        for &round_key in round_keys {
            let feistel_out = self.transformation.transform(right, round_key);
            let new_right = left ^ feistel_out;
            left = right;
            right = new_right;
        }

        // the last round is not followed by a swap
        join_halves(right, left)
    }
}
