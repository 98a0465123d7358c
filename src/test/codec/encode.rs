use crate::{encode_to_bits, SLOT_COUNT};

#[test]
fn rejects_oversized_payload() {
    assert!(encode_to_bits(&[0u8; 1024], "pw").is_none());
}

#[test]
fn accepts_boundary_sizes() {
    assert!(encode_to_bits(&[], "pw").is_some());
    assert!(encode_to_bits(&[0u8; 1], "pw").is_some());
    assert!(encode_to_bits(&[0xffu8; 1023], "pw").is_some());
}

#[test]
fn output_is_full_slot_count() {
    let out = encode_to_bits(b"hello", "pw").unwrap();
    assert_eq!(out.len(), SLOT_COUNT);
    assert!(out.iter().all(|&b| b == 0 || b == 1));
}

#[test]
fn deterministic() {
    assert_eq!(encode_to_bits(b"deterministic", "pw"), encode_to_bits(b"deterministic", "pw"));
}

#[test]
fn password_changes_output() {
    assert_ne!(encode_to_bits(b"payload", "pw1"), encode_to_bits(b"payload", "pw2"));
}
