use crate::{score::robustness_score, SLOT_COUNT};

#[test]
fn all_zero_scores_perfectly() {
    let bits = vec![0.0f32; SLOT_COUNT];
    assert_eq!(robustness_score(&bits), 1.0);
}

#[test]
fn all_one_scores_perfectly() {
    let bits = vec![1.0f32; SLOT_COUNT];
    assert_eq!(robustness_score(&bits), 1.0);
}

#[test]
fn score_is_fraction_in_unit_interval() {
    let mut bits = vec![0.0f32; SLOT_COUNT];
    for (i, b) in bits.iter_mut().enumerate() {
        if i % 2 == 0 {
            *b = 1.0;
        }
    }
    let score = robustness_score(&bits);
    assert!((0.0..=1.0).contains(&score));
}
