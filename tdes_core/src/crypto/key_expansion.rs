pub trait KeyExpansion {
    /// Derives the round keys for a 64-bit key field, in encryption order.
    fn generate_round_keys(&self, key_block: u64) -> Vec<u64>;
}
