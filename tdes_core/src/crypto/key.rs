//! Validated key material.
//!
//! A [`Key`] is a 56-bit integer. DES itself consumes a 64-bit key field in
//! which the low bit of every byte is a parity position that PC-1 discards,
//! so a key is spread over that field seven bits per byte.
//!
//! This is not the layout of tools that write the integer straight into the
//! 8-byte key field (big-endian, parity positions included). For any nonzero
//! key the two layouts select different schedules, so ciphertext from such a
//! tool does not decrypt here under the same hex key. The equivalent key for
//! a raw 8-byte key field is `Key::from_key_block(field)`, which keeps the
//! 56 bits PC-1 reads and drops the rest.

use crate::error::ConfigError;
use std::num::IntErrorKind;

pub const KEY_BITS: u32 = 56;
pub const KEY_COUNT: usize = 3;

const KEY_LIMIT: u64 = 1 << KEY_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(u64);

impl Key {
    pub fn new(value: u64) -> Result<Self, ConfigError> {
        if value >= KEY_LIMIT {
            return Err(ConfigError::KeyTooWide(value));
        }
        Ok(Key(value))
    }

    /// Builds a key from a conventional 64-bit DES key field, ignoring its
    /// parity bits.
    pub fn from_key_block(key_block: u64) -> Self {
        let value = (0..8).fold(0u64, |acc, group| {
            let seven = (key_block >> (57 - 8 * group)) & 0x7F;
            acc | (seven << (49 - 7 * group))
        });
        Key(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The 64-bit key field handed to PC-1, with every parity bit cleared.
    pub fn to_key_block(self) -> u64 {
        (0..8).fold(0u64, |acc, group| {
            let seven = (self.0 >> (49 - 7 * group)) & 0x7F;
            acc | (seven << (57 - 8 * group))
        })
    }

    /// Parses one hex-encoded key; `position` is only used for error reports.
    pub fn parse_hex(text: &str, position: usize) -> Result<Self, ConfigError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let value = u64::from_str_radix(digits, 16).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => ConfigError::KeyOutOfRange {
                position,
                text: text.to_string(),
            },
            _ => ConfigError::MalformedKey {
                position,
                text: text.to_string(),
            },
        })?;

        Key::new(value).map_err(|_| ConfigError::KeyOutOfRange {
            position,
            text: text.to_string(),
        })
    }
}

/// The three independent keys of EDE Triple DES, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTriple {
    keys: [Key; KEY_COUNT],
}

impl KeyTriple {
    pub fn new(k1: Key, k2: Key, k3: Key) -> Self {
        Self { keys: [k1, k2, k3] }
    }

    /// Validation entry point for caller-supplied hex strings. Fails on the
    /// count before looking at any value.
    pub fn parse<S: AsRef<str>>(keys: &[S]) -> Result<Self, ConfigError> {
        if keys.len() != KEY_COUNT {
            return Err(ConfigError::KeyCount {
                expected: KEY_COUNT,
                actual: keys.len(),
            });
        }

        let k1 = Key::parse_hex(keys[0].as_ref(), 1)?;
        let k2 = Key::parse_hex(keys[1].as_ref(), 2)?;
        let k3 = Key::parse_hex(keys[2].as_ref(), 3)?;
        Ok(Self::new(k1, k2, k3))
    }

    pub fn from_values(values: &[u64]) -> Result<Self, ConfigError> {
        match values {
            &[k1, k2, k3] => Ok(Self::new(Key::new(k1)?, Key::new(k2)?, Key::new(k3)?)),
            _ => Err(ConfigError::KeyCount {
                expected: KEY_COUNT,
                actual: values.len(),
            }),
        }
    }

    pub fn keys(&self) -> &[Key; KEY_COUNT] {
        &self.keys
    }

    /// All three keys equal: EDE collapses to single DES.
    pub fn is_degenerate(&self) -> bool {
        self.keys[0] == self.keys[1] && self.keys[1] == self.keys[2]
    }
}
