use crate::random::Mt19937;

#[test]
fn deterministic_for_fixed_seed() {
    let mut a = Mt19937::new(42);
    let mut b = Mt19937::new(42);
    for _ in 0..1000 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Mt19937::new(1);
    let mut b = Mt19937::new(2);
    assert_ne!(a.next_u32(), b.next_u32());
}

#[test]
fn known_vector_seed_5489() {
    // The textbook MT19937 reference seed (the constant used when the C++
    // standard library default-constructs std::mt19937) produces a
    // well-known first output.
    let mut rng = Mt19937::new(5489);
    assert_eq!(rng.next_u32(), 3_499_211_612);
    assert_eq!(rng.next_u32(), 581_869_302);
    assert_eq!(rng.next_u32(), 3_890_346_734);
}
