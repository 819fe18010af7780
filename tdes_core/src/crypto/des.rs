use crate::crypto::cipher_types::Operation;
use crate::crypto::des_key_expansion::{KeySchedule, ROUNDS};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::utils::permute;
use std::sync::Arc;

/// Single-block DES. Holds no key material: the schedule is passed per call,
/// which keeps one instance usable from any number of threads.
pub struct DES {
    feistel_network: FeistelNetwork,
}

impl DES {
    pub fn new(transformation: Arc<dyn EncryptionTransformation + Send + Sync>) -> Self {
        DES {
            feistel_network: FeistelNetwork::new(ROUNDS, transformation),
        }
    }

    pub fn transform(&self, block: u64, schedule: &KeySchedule, operation: Operation) -> u64 {
        let permuted = permute(block, 64, &IP);
        let round_keys = schedule.round_keys();
        let result = match operation {
            Operation::Encrypt => self
                .feistel_network
                .encrypt_with_round_keys(permuted, round_keys),
            Operation::Decrypt => self
                .feistel_network
                .decrypt_with_round_keys(permuted, round_keys),
        };
        permute(result, 64, &FP)
    }

    pub fn encrypt(&self, block: u64, schedule: &KeySchedule) -> u64 {
        self.transform(block, schedule, Operation::Encrypt)
    }

    pub fn decrypt(&self, block: u64, schedule: &KeySchedule) -> u64 {
        self.transform(block, schedule, Operation::Decrypt)
    }
}

impl Default for DES {
    fn default() -> Self {
        DES::new(Arc::new(DesTransformation))
    }
}
