pub trait EncryptionTransformation {
    /// Round function: maps a 32-bit half block and a round key to 32 bits.
    fn transform(&self, half_block: u32, round_key: u64) -> u32;
}
