use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::Operation;
use crate::crypto::key::KeyTriple;
use crate::crypto::triple_des::TripleDES;
use crate::error::ConfigError;
use std::sync::Arc;

/// Everything a worker needs to transform a block: the keyed cipher and the
/// direction. Built once per run, never mutated, and cloned into workers as
/// a shared handle.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher + Send + Sync>,
    operation: Operation,
}

impl CipherContext {
    pub fn new(keys: &KeyTriple, operation: Operation) -> Self {
        Self::with_algorithm(Arc::new(TripleDES::new(keys)), operation)
    }

    /// Validates hex key strings and builds the context in one step. Nothing
    /// else happens when this fails.
    pub fn from_hex_keys<S: AsRef<str>>(
        keys: &[S],
        operation: Operation,
    ) -> Result<Self, ConfigError> {
        let keys = KeyTriple::parse(keys)?;
        Ok(Self::new(&keys, operation))
    }

    pub fn with_algorithm(
        algorithm: Arc<dyn BlockCipher + Send + Sync>,
        operation: Operation,
    ) -> Self {
        Self {
            algorithm,
            operation,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub fn transform_block(&self, block: u64) -> u64 {
        self.algorithm.process_block(block, self.operation)
    }
}
