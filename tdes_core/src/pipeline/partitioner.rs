use crate::crypto::cipher_types::{BoundaryPolicy, Operation};
use crate::error::CipherError;
use crate::pipeline::block::{BLOCK_SIZE, Block};

/// Turns a byte stream into indexed blocks, applying the boundary policy.
///
/// Under [`BoundaryPolicy::PadWithTrailer`], encryption zero-pads the tail
/// and appends one block carrying the original length as a big-endian `u64`.
/// Ciphertext must always be block aligned.
#[derive(Debug, Clone, Copy)]
pub struct BlockPartitioner {
    policy: BoundaryPolicy,
}

impl BlockPartitioner {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }

    pub fn split(&self, data: &[u8], operation: Operation) -> Result<Vec<Block>, CipherError> {
        match (self.policy, operation) {
            (BoundaryPolicy::PadWithTrailer, Operation::Encrypt) => Ok(Self::pad_with_trailer(data)),
            (BoundaryPolicy::PadWithTrailer, Operation::Decrypt) if data.is_empty() => {
                Err(CipherError::MissingTrailer)
            }
            _ => Self::aligned(data),
        }
    }

    fn aligned(data: &[u8]) -> Result<Vec<Block>, CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InputAlignment {
                len: data.len(),
                block_size: BLOCK_SIZE,
            });
        }

        Ok(data
            .chunks_exact(BLOCK_SIZE)
            .enumerate()
            .map(|(index, chunk)| Block::from_partial(index, chunk))
            .collect())
    }

    fn pad_with_trailer(data: &[u8]) -> Vec<Block> {
        let mut blocks: Vec<Block> = data
            .chunks(BLOCK_SIZE)
            .enumerate()
            .map(|(index, chunk)| Block::from_partial(index, chunk))
            .collect();

        blocks.push(Block {
            index: blocks.len(),
            data: data.len() as u64,
        });
        blocks
    }
}
