use crate::codec::frame::{repeat_count, MAX_HEADER_REPEAT};

#[test]
fn repeat_count_matches_worked_example() {
    // 65536 / (8*4 + 90 + 27) = 65536 / 149 = 439
    assert_eq!(repeat_count(4), 439);
}

#[test]
fn max_header_repeat_is_560() {
    assert_eq!(MAX_HEADER_REPEAT, 560);
}

#[test]
fn repeat_count_shrinks_as_payload_grows() {
    assert!(repeat_count(0) >= repeat_count(1023));
}
