use crate::error::ConfigError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl FromStr for Operation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enc" | "encrypt" => Ok(Operation::Encrypt),
            "dec" | "decrypt" => Ok(Operation::Decrypt),
            other => Err(ConfigError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => f.write_str("encrypt"),
            Operation::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// What happens to a stream whose length is not a multiple of the block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Only 8-byte aligned streams are accepted, in both directions.
    Reject,
    /// Zero-pad the tail and append an encrypted block holding the original
    /// length, so decryption restores the exact input.
    #[default]
    PadWithTrailer,
}

impl FromStr for BoundaryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pad" => Ok(BoundaryPolicy::PadWithTrailer),
            "reject" => Ok(BoundaryPolicy::Reject),
            other => Err(ConfigError::UnknownBoundaryPolicy(other.to_string())),
        }
    }
}

pub enum CipherInput {
    Bytes(Vec<u8>),
    File(PathBuf),
}

pub enum CipherOutput {
    Buffer(Vec<u8>),
    File(PathBuf),
}

impl CipherOutput {
    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            CipherOutput::Buffer(buffer) => Some(buffer),
            CipherOutput::File(_) => None,
        }
    }
}
