use crate::hash::hash_password;

#[test]
fn deterministic() {
    assert_eq!(hash_password("hello"), hash_password("hello"));
}

#[test]
fn sensitive_to_input() {
    assert_ne!(hash_password("hello"), hash_password("hellp"));
    assert_ne!(hash_password(""), hash_password("\0"));
}

#[test]
fn known_vector() {
    // FNV-1a 64-bit test vector for the empty string is the offset basis
    // itself, since the loop body never runs.
    assert_eq!(hash_password(""), 0xcbf2_9ce4_8422_2325);
}
