use crate::{codec::decode::Tally, decode_to_bytes, SLOT_COUNT};

#[test]
fn tally_breaks_ties_by_first_observed() {
    let mut tally = Tally::new();
    tally.add("b");
    tally.add("a");
    tally.add("a");
    tally.add("b");
    // "b" and "a" both end up with count 2, but "b" was observed first.
    assert_eq!(tally.mode(), Some(("b", 2)));
}

#[test]
fn tally_picks_strict_majority_over_first_observed() {
    let mut tally = Tally::new();
    tally.add("a");
    tally.add("b");
    tally.add("b");
    assert_eq!(tally.mode(), Some(("b", 2)));
}

#[test]
fn rejects_wrong_probe_count() {
    assert!(decode_to_bytes(&[0.0; 100], "pw").is_none());
}

#[test]
fn all_zero_probs_do_not_panic() {
    let probs = vec![0.0f32; SLOT_COUNT];
    assert_eq!(decode_to_bytes(&probs, "pw"), None);
}
