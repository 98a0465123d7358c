//! Encoding: lay the length field, shift field, and payload into the
//! 65,536-slot buffer under the keyed permutation, searching over the 8
//! possible shift indices for the buffer most robust to the scorer's
//! downscale/threshold/upscale round trip.

use std::collections::HashSet;

use crate::{
    bytes::{bytes_to_bits, u10_to_bits, u3_to_bits},
    codec::frame::{
        repeat_count, HEADER_BITS, HEADER_INNER_REPEAT, MAX_PAYLOAD_LEN, SHIFT_COUNT,
    },
    random::permutation,
    score::robustness_score,
    util::FreeSlots,
    SLOT_COUNT,
};

/// Encode `data` into a 65,536-byte buffer (one `0`/`1` byte per slot),
/// keyed by `password`. Returns `None` if `data` is longer than 1023 bytes.
pub fn encode_to_bits(data: &[u8], password: &str) -> Option<Vec<u8>> {
    if data.len() > MAX_PAYLOAD_LEN {
        return None;
    }
    let payload_len = data.len();
    let repeat = repeat_count(payload_len);

    let order0 = permutation(password, 0);

    let mut buffer = vec![0u8; SLOT_COUNT];
    let mut occupied: HashSet<u16> = HashSet::new();
    write_repeated_field(&u10_to_bits(payload_len as u16), repeat, 0, &order0, &mut buffer, &mut occupied);

    let payload_bits = bytes_to_bits(data);
    let shift_field_offset = HEADER_BITS * repeat * HEADER_INNER_REPEAT;

    let mut best: Option<(f64, Vec<u8>)> = None;
    for shift in 0..SHIFT_COUNT {
        let mut candidate = buffer.clone();
        let mut candidate_occupied = occupied.clone();
        write_repeated_field(
            &u3_to_bits(shift),
            repeat,
            shift_field_offset,
            &order0,
            &mut candidate,
            &mut candidate_occupied,
        );

        let order_payload = permutation(password, shift + 1);
        let mut free = FreeSlots::new(&order_payload);
        free.remove_occupied(&candidate_occupied);

        'payload: for &bit in &payload_bits {
            for _ in 0..repeat {
                let Some(slot) = free.take() else { break 'payload };
                candidate[slot as usize] = u8::from(bit);
            }
        }

        let floats: Vec<f32> = candidate.iter().map(|&b| f32::from(b)).collect();
        let score = robustness_score(&floats);
        if best.as_ref().map_or(true, |(best_score, _)| score > *best_score) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, buffer)| buffer)
}

/// Write a fixed-width bit field, repeated `repeat` times, into `buffer` at
/// the slots named by `order` starting at `base_offset`, spending 9 slots per
/// bit regardless of `repeat`. Every written slot is recorded in `occupied`.
fn write_repeated_field(
    field_bits: &[bool],
    repeat: usize,
    base_offset: usize,
    order: &[u16],
    buffer: &mut [u8],
    occupied: &mut HashSet<u16>,
) {
    let stream_len = field_bits.len() * repeat;
    for i in 0..stream_len {
        let bit = field_bits[i % field_bits.len()];
        for k in 0..HEADER_INNER_REPEAT {
            let pos = base_offset + i * HEADER_INNER_REPEAT + k;
            if pos >= SLOT_COUNT {
                return;
            }
            let slot = order[pos];
            buffer[slot as usize] = u8::from(bit);
            occupied.insert(slot);
        }
    }
}
