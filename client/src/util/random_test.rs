use super::*;

/// Source that replays fixed indices (clamped to the requested range).
struct Scripted(Vec<usize>);

impl RandomSource for Scripted {
    fn pick_index(&mut self, len: usize) -> usize {
        let next = if self.0.is_empty() { 0 } else { self.0.remove(0) };
        next.min(len - 1)
    }
}

#[test]
fn pick_returns_none_for_empty_slice() {
    let mut rng = StdRng::seed_from_u64(1);
    let empty: [u8; 0] = [];
    assert_eq!(pick(&empty, &mut rng), None);
}

#[test]
fn pick_uses_source_index() {
    let mut rng = Scripted(vec![2]);
    assert_eq!(pick(&["a", "b", "c"], &mut rng), Some(&"c"));
}

#[test]
fn seeded_pick_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(22);
    for _ in 0..200 {
        assert!(rng.pick_index(8) < 8);
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(1025);
    let mut items: Vec<u32> = (0..12).collect();
    shuffle(&mut items, &mut rng);
    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..12).collect::<Vec<_>>());
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut a: Vec<u32> = (0..12).collect();
    let mut b = a.clone();
    shuffle(&mut a, &mut StdRng::seed_from_u64(7));
    shuffle(&mut b, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn shuffle_with_zero_script_swaps_each_tail_to_front() {
    let mut items = vec![1, 2, 3];
    shuffle(&mut items, &mut Scripted(vec![0, 0]));
    assert_eq!(items, vec![2, 3, 1]);
}

#[test]
fn session_rng_produces_values() {
    let mut rng = session_rng();
    assert!(rng.pick_index(4) < 4);
}
