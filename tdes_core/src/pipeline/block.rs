pub const BLOCK_SIZE: usize = 8;

/// One 8-byte unit of the input stream and its position in block units.
///
/// The payload is the 8 bytes read big-endian, which is how DES numbers its
/// block bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub index: usize,
    pub data: u64,
}

impl Block {
    pub fn from_bytes(index: usize, bytes: [u8; BLOCK_SIZE]) -> Self {
        Self {
            index,
            data: u64::from_be_bytes(bytes),
        }
    }

    /// Copies up to 8 bytes, zero-filling the rest.
    pub fn from_partial(index: usize, chunk: &[u8]) -> Self {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes[..chunk.len()].copy_from_slice(chunk);
        Self::from_bytes(index, bytes)
    }
}

/// Output of transforming one [`Block`], tagged with the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockResult {
    pub index: usize,
    pub data: u64,
}

impl BlockResult {
    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        self.data.to_be_bytes()
    }
}
