//! Shared constants and framing arithmetic used by both the encoder and the
//! decoder.

use crate::SLOT_COUNT;

/// Largest payload this codec accepts.
pub(crate) const MAX_PAYLOAD_LEN: usize = 1023;

/// Width of the big-endian length field.
pub(crate) const HEADER_BITS: usize = 10;

/// Width of the big-endian shift field.
pub(crate) const SHIFT_BITS: usize = 3;

/// How many times each header/shift *bit* is rewritten, independent of the
/// payload repeat count `R`.
pub(crate) const HEADER_INNER_REPEAT: usize = 9;

/// Number of payload permutations searched by the encoder (`O[1] ..= O[8]`),
/// one per 3-bit shift value.
pub(crate) const SHIFT_COUNT: u8 = 8;

/// The largest repeat count a decode can ever accept, reached at the
/// smallest possible payload length (`L = 0`). Used both as the encoder's
/// worst-case budget check and as the decoder's divergence bound for
/// recovering `R` from a noisy length vote.
pub(crate) const MAX_HEADER_REPEAT: usize =
    SLOT_COUNT / (HEADER_BITS * HEADER_INNER_REPEAT + SHIFT_BITS * HEADER_INNER_REPEAT);

/// `R = floor(SLOT_COUNT / (8*L + 90 + 27))`: the number of times the header,
/// shift, and each payload bit are rewritten so that everything fits in
/// `SLOT_COUNT` slots.
pub(crate) fn repeat_count(payload_len: usize) -> usize {
    SLOT_COUNT
        / (8 * payload_len + HEADER_BITS * HEADER_INNER_REPEAT + SHIFT_BITS * HEADER_INNER_REPEAT)
}
