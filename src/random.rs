mod mt19937;

use crate::{hash::hash_password, SLOT_COUNT};

pub(crate) use mt19937::Mt19937;

/// Derive the deterministic permutation `O[shift]` of `[0, SLOT_COUNT)` for a
/// given `(password, shift)` pair.
///
/// The permutation is built by seeding [`Mt19937`] from the password and
/// shift, then running a Fisher–Yates shuffle over the identity sequence
/// `[0, 1, ..., SLOT_COUNT)`, iterating from the highest index down and
/// drawing each swap partner from `[0, i]`.
///
/// This is deterministic across runs and platforms for this crate (same
/// binary encoding and decoding), but is not pinned to match any other
/// language's `std::mt19937` + `std::shuffle` bit-for-bit — see the crate
/// docs for why that pinning isn't attempted here.
pub(crate) fn permutation(password: &str, shift: u8) -> Vec<u16> {
    let seed = seed_for(password, shift);
    let mut rng = Mt19937::new(seed);

    let mut order: Vec<u16> = (0..SLOT_COUNT as u32).map(|i| i as u16).collect();
    let mut i = order.len() - 1;
    while i > 0 {
        let j = (rng.next_u32() as usize) % (i + 1);
        order.swap(i, j);
        i -= 1;
    }
    order
}

/// Combine the password hash and shift into the 32-bit MT19937 seed: hash the
/// password, add the shift, truncate the sum to 32 bits.
fn seed_for(password: &str, shift: u8) -> u32 {
    hash_password(password).wrapping_add(u64::from(shift)) as u32
}
