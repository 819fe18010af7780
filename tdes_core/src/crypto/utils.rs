use bitvec::prelude::*;

/// Runs the low `width` bits of `input` through a DES selection table.
///
/// Table entries are 1-based and count from the most significant of those
/// `width` bits. The result is right-aligned: it occupies the low
/// `table.len()` bits.
pub fn permute(input: u64, width: usize, table: &[u8]) -> u64 {
    debug_assert!(width <= 64 && table.len() <= 64);

    let source = &input.view_bits::<Msb0>()[64 - width..];
    let mut output = 0u64;
    let target = &mut output.view_bits_mut::<Msb0>()[64 - table.len()..];
    for (slot, &position) in table.iter().enumerate() {
        target.set(slot, source[usize::from(position) - 1]);
    }
    output
}

/// Rotates a 28-bit key half (held in the low bits of a `u32`) left by `shift`.
pub fn rotate_half_left(half: u32, shift: usize) -> u32 {
    let mut half = half & 0x0FFF_FFFF;
    half.view_bits_mut::<Msb0>()[4..].rotate_left(shift);
    half
}

pub fn split_block(block: u64) -> (u32, u32) {
    ((block >> 32) as u32, block as u32)
}

pub fn join_halves(left: u32, right: u32) -> u64 {
    (u64::from(left) << 32) | u64::from(right)
}
