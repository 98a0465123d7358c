//! Decoding: recover the length and shift fields from a noisy probability
//! vector via majority/soft voting with adaptive repeat recovery, then read
//! the payload.

use std::collections::HashSet;

use crate::{
    bytes::{bits_to_byte, bits_to_uint},
    codec::frame::{repeat_count, HEADER_BITS, HEADER_INNER_REPEAT, MAX_HEADER_REPEAT, SHIFT_BITS},
    random::permutation,
    util::{FreeSlots, IterChunks},
    SLOT_COUNT,
};

/// Why a decode attempt failed. Never surfaced across the public boundary —
/// [`decode_to_bytes`] collapses every variant to `None` — but kept around
/// internally so tests can assert *which* failure mode triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeFailure {
    WrongProbeCount,
    LengthDiverged,
    ShiftUnconfirmed,
    SlotsExhausted,
}

/// Decode a payload from `probs` (a probability per slot, length must be
/// exactly 65,536), keyed by `password`. Returns `None` on any failure.
pub fn decode_to_bytes(probs: &[f32], password: &str) -> Option<Vec<u8>> {
    decode_inner(probs, password).ok()
}

pub(crate) fn decode_inner(probs: &[f32], password: &str) -> Result<Vec<u8>, DecodeFailure> {
    if probs.len() != SLOT_COUNT {
        return Err(DecodeFailure::WrongProbeCount);
    }

    let order0 = permutation(password, 0);
    let mut free = FreeSlots::new(&order0);
    let mut occupied: HashSet<u16> = HashSet::new();

    let (length, repeat) = read_length(probs, &mut free, &mut occupied)?;
    let shift = read_shift(probs, &mut free, &mut occupied, repeat)?;
    let payload = read_payload(probs, password, shift, &occupied, length, repeat)?;
    Ok(payload)
}

/// Reading stage 1: recover `L` with a repeat count that grows until a
/// majority length vote stabilizes.
fn read_length(
    probs: &[f32],
    free: &mut FreeSlots,
    occupied: &mut HashSet<u16>,
) -> Result<(usize, usize), DecodeFailure> {
    let mut repeat: usize = 7;
    let mut tally: Tally<u16> = Tally::new();
    let mut length_star = 0u16;
    let mut i = 0usize;

    while i < repeat {
        let mut bits = [false; HEADER_BITS];
        for bit in bits.iter_mut() {
            *bit = decode_bit(probs, free, HEADER_INNER_REPEAT, Some(occupied))? != 0;
        }
        tally.add(bits_to_uint(&bits));

        if i > 5 {
            let (mode_value, mode_count) =
                tally.mode().expect("at least one length sample by iteration 6");
            length_star = mode_value;
            if mode_count == 1 {
                repeat += 1;
            } else {
                repeat = repeat_count(length_star as usize);
            }
            if repeat > MAX_HEADER_REPEAT || repeat <= i {
                return Err(DecodeFailure::LengthDiverged);
            }
        }
        i += 1;
    }

    Ok((length_star as usize, repeat))
}

/// Reading stage 2: recover the shift index from `repeat` independent
/// candidates, requiring at least 2 in agreement.
fn read_shift(
    probs: &[f32],
    free: &mut FreeSlots,
    occupied: &mut HashSet<u16>,
    repeat: usize,
) -> Result<u8, DecodeFailure> {
    let mut tally: Tally<u8> = Tally::new();
    for _ in 0..repeat {
        let mut bits = [false; SHIFT_BITS];
        for bit in bits.iter_mut() {
            *bit = decode_bit(probs, free, HEADER_INNER_REPEAT, Some(occupied))? != 0;
        }
        tally.add(bits_to_uint(&bits) as u8);
    }
    let (shift, count) = tally.mode().expect("at least one shift sample when repeat >= 1");
    if count < 2 {
        return Err(DecodeFailure::ShiftUnconfirmed);
    }
    Ok(shift)
}

/// Reading stage 3: read `length` bytes from the payload permutation with
/// the header/shift slots removed.
fn read_payload(
    probs: &[f32],
    password: &str,
    shift: u8,
    occupied: &HashSet<u16>,
    length: usize,
    repeat: usize,
) -> Result<Vec<u8>, DecodeFailure> {
    let order_payload = permutation(password, shift + 1);
    let mut free = FreeSlots::new(&order_payload);
    free.remove_occupied(occupied);

    let mut bits = Vec::with_capacity(length * 8);
    for _ in 0..length * 8 {
        bits.push(decode_bit(probs, &mut free, repeat, None)? != 0);
    }

    Ok(bits.into_iter().chunks::<8>().map(|byte_bits| bits_to_byte(&byte_bits)).collect())
}

/// Read one soft-decision bit: consume `r` slots from `free`, take the
/// majority hard bit if one side reaches `ceil(0.7*r)` votes, otherwise fall
/// back to `mean(sigmoid(prob)) > 0.5`. Fails if `free` runs out before `r`
/// slots can be consumed.
fn decode_bit(
    probs: &[f32],
    free: &mut FreeSlots,
    r: usize,
    mut occupied: Option<&mut HashSet<u16>>,
) -> Result<u8, DecodeFailure> {
    let mut ones = 0u32;
    let mut zeros = 0u32;
    let mut sigmoid_sum = 0.0f64;

    for _ in 0..r {
        let slot = free.take().ok_or(DecodeFailure::SlotsExhausted)?;
        if let Some(occ) = &mut occupied {
            occ.insert(slot);
        }
        let prob = probs[slot as usize];
        if prob > 0.0 {
            ones += 1;
        } else {
            zeros += 1;
        }
        sigmoid_sum += sigmoid(f64::from(prob));
    }

    let threshold = (0.7 * r as f64).ceil() as u32;
    if ones >= threshold {
        return Ok(1);
    }
    if zeros >= threshold {
        return Ok(0);
    }
    Ok(u8::from(sigmoid_sum / r as f64 > 0.5))
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// A tally of observed values that reports the mode with a stable tie-break:
/// among values tied for the highest count, the one that was *first
/// observed* wins, independent of hash iteration order.
#[derive(Debug)]
pub(crate) struct Tally<T> {
    counts: Vec<(T, u32)>,
}

impl<T: Copy + PartialEq> Tally<T> {
    pub(crate) fn new() -> Self {
        Tally { counts: Vec::new() }
    }

    pub(crate) fn add(&mut self, value: T) {
        if let Some(entry) = self.counts.iter_mut().find(|(v, _)| *v == value) {
            entry.1 += 1;
        } else {
            self.counts.push((value, 1));
        }
    }

    pub(crate) fn mode(&self) -> Option<(T, u32)> {
        let mut best: Option<(T, u32)> = None;
        for &(value, count) in &self.counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((value, count));
            }
        }
        best
    }
}
