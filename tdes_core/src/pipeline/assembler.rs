use crate::crypto::cipher_types::{BoundaryPolicy, Operation};
use crate::error::CipherError;
use crate::pipeline::block::{BLOCK_SIZE, BlockResult};

/// Puts dispatcher results back into stream order and undoes padding.
#[derive(Debug, Clone, Copy)]
pub struct StreamAssembler {
    policy: BoundaryPolicy,
}

impl StreamAssembler {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }

    /// `expected_blocks` is the number of blocks that went into the dispatch;
    /// the results must cover `0..expected_blocks` exactly once.
    pub fn assemble(
        &self,
        mut results: Vec<BlockResult>,
        expected_blocks: usize,
        operation: Operation,
    ) -> Result<Vec<u8>, CipherError> {
        results.sort_unstable_by_key(|result| result.index);

        if let Some(index) = first_gap(&results, expected_blocks) {
            return Err(CipherError::IncompleteResults { index });
        }

        let mut output = Vec::with_capacity(results.len() * BLOCK_SIZE);
        for result in &results {
            output.extend_from_slice(&result.to_bytes());
        }

        match (self.policy, operation) {
            (BoundaryPolicy::PadWithTrailer, Operation::Decrypt) => strip_trailer(output),
            _ => Ok(output),
        }
    }
}

fn first_gap(sorted: &[BlockResult], expected_blocks: usize) -> Option<usize> {
    sorted
        .iter()
        .enumerate()
        .find(|(position, result)| result.index != *position)
        .map(|(position, _)| position)
        .or_else(|| (sorted.len() != expected_blocks).then_some(sorted.len().min(expected_blocks)))
}

/// Reads the length trailer off decrypted output and truncates to it.
///
/// The trailer has to describe a length whose padded size is exactly the
/// payload, and the padding itself must be zero. A wrong key or damaged
/// ciphertext fails here instead of producing garbage of a plausible size.
fn strip_trailer(mut output: Vec<u8>) -> Result<Vec<u8>, CipherError> {
    let payload_len = output
        .len()
        .checked_sub(BLOCK_SIZE)
        .ok_or(CipherError::MissingTrailer)?;

    let mut trailer = [0u8; BLOCK_SIZE];
    trailer.copy_from_slice(&output[payload_len..]);
    let recorded = u64::from_be_bytes(trailer);

    let invalid = CipherError::InvalidTrailer {
        recorded,
        available: payload_len,
    };
    let original_len = match usize::try_from(recorded) {
        Ok(len) if len <= payload_len && payload_len - len < BLOCK_SIZE => len,
        _ => return Err(invalid),
    };
    if output[original_len..payload_len].iter().any(|&b| b != 0) {
        return Err(invalid);
    }

    output.truncate(original_len);
    Ok(output)
}
