/// 64-bit FNV offset basis, per the
/// [FNV specification](http://www.isthe.com/chongo/tech/comp/fnv/).
const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// 64-bit FNV prime.
const PRIME: u64 = 0x0000_0100_0000_01b3;

/// Reduce a password string to a 64-bit integer via FNV-1a.
///
/// FNV-1a is not a cryptographic hash: it has no preimage or collision
/// resistance guarantees. It is used here only because it is simple,
/// allocation-free, and gives the same output for the same input on every
/// platform, which is the one property the permutation engine actually needs
/// (see [`crate::random::permutation`]).
pub(crate) fn hash_password(password: &str) -> u64 {
    let mut hash = OFFSET_BASIS;
    for byte in password.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
