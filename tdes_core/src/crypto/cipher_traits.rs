use crate::crypto::cipher_types::Operation;

/// A keyed 64-bit block cipher with no state carried between blocks.
pub trait BlockCipher {
    fn encrypt_block(&self, block: u64) -> u64;
    fn decrypt_block(&self, block: u64) -> u64;

    fn process_block(&self, block: u64, operation: Operation) -> u64 {
        match operation {
            Operation::Encrypt => self.encrypt_block(block),
            Operation::Decrypt => self.decrypt_block(block),
        }
    }
}
