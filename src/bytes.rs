//! Conversions between bytes and big-endian bit sequences.
//!
//! A "bit" here is a `bool`: `true` is 1, `false` is 0. Every packer in this
//! module is big-endian, meaning the first bit in a sequence is the most
//! significant.

/// Expand bytes into bits, most significant bit of each byte first.
pub(crate) fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// Pack 8 big-endian bits into a byte.
pub(crate) fn bits_to_byte(bits: &[bool; 8]) -> u8 {
    bits_to_uint(bits) as u8
}

/// Pack a fixed-width big-endian bit sequence into an unsigned integer. Used
/// for both the 10-bit length field and the 3-bit shift field — the two
/// differ only in width, so one routine serves both.
pub(crate) fn bits_to_uint(bits: &[bool]) -> u16 {
    bits.iter().fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
}

/// Unpack a 10-bit unsigned value into big-endian bits, most significant
/// first.
pub(crate) fn u10_to_bits(value: u16) -> [bool; 10] {
    uint_to_bits(value)
}

/// Unpack a 3-bit unsigned value into big-endian bits, most significant
/// first.
pub(crate) fn u3_to_bits(value: u8) -> [bool; 3] {
    uint_to_bits(u16::from(value))
}

fn uint_to_bits<const N: usize>(value: u16) -> [bool; N] {
    let mut bits = [false; N];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> (N - 1 - i)) & 1 != 0;
    }
    bits
}
