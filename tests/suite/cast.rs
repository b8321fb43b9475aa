//! End-to-end cast scenarios

use hexcast_core::{Catalog, FixedCoins, ThreadCoins, cast, cast_observed};
use hexcast_types::{LineKind, TrigramId};

fn catalog() -> &'static Catalog {
    Catalog::builtin().unwrap()
}

#[test]
fn eighteen_heads_yield_the_creative() {
    let mut coins = FixedCoins::new([true; 18]);
    let hexagram = cast(catalog(), &mut coins).unwrap();

    assert!(hexagram.lines.iter().all(|line| line.value() == 9));
    assert!(hexagram.lines.iter().all(|line| line.is_changing()));
    assert_eq!(hexagram.lower.id, TrigramId::Qian);
    assert_eq!(hexagram.upper.id, TrigramId::Qian);
}

#[test]
fn eighteen_tails_yield_the_receptive() {
    let mut coins = FixedCoins::new([false; 18]);
    let hexagram = cast(catalog(), &mut coins).unwrap();

    assert!(hexagram.lines.iter().all(|line| line.value() == 6));
    assert!(hexagram.lines.iter().all(|line| line.is_changing()));
    assert_eq!(hexagram.lower.id, TrigramId::Kun);
    assert_eq!(hexagram.upper.id, TrigramId::Kun);
}

#[test]
fn crafted_trial_values_resolve_zhen_and_li() {
    let mut coins = FixedCoins::from_trial_values(&[7, 8, 6, 9, 8, 7]).unwrap();
    let hexagram = cast(catalog(), &mut coins).unwrap();

    let expected_kinds = [
        LineKind::Solid,
        LineKind::Broken,
        LineKind::Broken,
        LineKind::Solid,
        LineKind::Broken,
        LineKind::Solid,
    ];
    for (line, expected) in hexagram.lines.iter().zip(expected_kinds) {
        assert_eq!(line.kind(), expected);
    }

    assert_eq!(hexagram.lower.id, TrigramId::Zhen);
    assert_eq!(hexagram.upper.id, TrigramId::Li);
}

#[test]
fn the_same_draw_sequence_is_fully_deterministic() {
    let draws: Vec<bool> = (0..18).map(|i| i % 3 != 0).collect();
    let first = cast(catalog(), &mut FixedCoins::new(draws.clone())).unwrap();
    let second = cast(catalog(), &mut FixedCoins::new(draws)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_random_cast_resolves() {
    // The catalog is total over line configurations, so no sequence of
    // draws can produce an unresolvable cast.
    let mut coins = ThreadCoins::new();
    for _ in 0..200 {
        let hexagram = cast(catalog(), &mut coins).unwrap();
        assert_eq!(hexagram.lower.lines, hexagram.lower_triple());
        assert_eq!(hexagram.upper.lines, hexagram.upper_triple());
        for line in &hexagram.lines {
            assert_eq!(line.is_changing(), line.value() == 6 || line.value() == 9);
            assert_eq!(line.is_solid(), line.kind() == LineKind::Solid);
        }
    }
}

#[test]
fn partition_boundary_is_significant() {
    // Trial values identical except lines 3 and 4 are exchanged across the
    // lower/upper boundary: both resolved trigrams change.
    let original = cast(
        catalog(),
        &mut FixedCoins::from_trial_values(&[7, 7, 8, 9, 6, 6]).unwrap(),
    )
    .unwrap();
    let swapped = cast(
        catalog(),
        &mut FixedCoins::from_trial_values(&[7, 7, 9, 8, 6, 6]).unwrap(),
    )
    .unwrap();

    assert_ne!(original.lower.id, swapped.lower.id);
    assert_ne!(original.upper.id, swapped.upper.id);
}

#[test]
fn observer_sequence_matches_the_batch_result() {
    let mut observed = Vec::new();
    let mut coins = FixedCoins::from_trial_values(&[6, 7, 8, 9, 6, 7]).unwrap();
    let hexagram = cast_observed(catalog(), &mut coins, |index, line| {
        observed.push((index, line));
    })
    .unwrap();

    assert_eq!(observed.len(), 6);
    for (index, line) in observed {
        assert_eq!(hexagram.lines[index], line);
    }
}
