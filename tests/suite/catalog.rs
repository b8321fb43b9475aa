//! Catalog bijection and lookup tests

use hexcast_core::Catalog;
use hexcast_types::LineTriple;
use std::collections::HashSet;

#[test]
fn builtin_catalog_loads() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.entries().len(), 8);
}

#[test]
fn catalog_covers_every_configuration_exactly_once() {
    let catalog = Catalog::builtin().unwrap();
    let keys: HashSet<usize> = catalog
        .entries()
        .iter()
        .map(|trigram| trigram.lines.key())
        .collect();
    assert_eq!(keys.len(), LineTriple::COUNT);
    assert_eq!(keys, (0..LineTriple::COUNT).collect::<HashSet<_>>());
}

#[test]
fn lookup_round_trips_the_queried_triple() {
    let catalog = Catalog::builtin().unwrap();
    for key in 0..LineTriple::COUNT {
        let triple = LineTriple::from_key(key).unwrap();
        let trigram = catalog.lookup(triple).unwrap();
        assert_eq!(trigram.lines, triple, "stored triple equals queried triple");
    }
}

#[test]
fn trigram_ids_are_distinct() {
    let catalog = Catalog::builtin().unwrap();
    let ids: HashSet<&str> = catalog
        .entries()
        .iter()
        .map(|trigram| trigram.id.as_str())
        .collect();
    assert_eq!(ids.len(), 8);
}

#[test]
fn content_payload_is_present_for_every_trigram() {
    let catalog = Catalog::builtin().unwrap();
    for trigram in catalog.entries() {
        assert!(!trigram.name.is_empty());
        assert!(!trigram.chinese_name.is_empty());
        assert!(!trigram.symbol.is_empty());
        assert!(!trigram.musical.scales_melody.is_empty());
        assert!(!trigram.musical.texture.is_empty());
        assert!(!trigram.musical.polyrhythm.is_empty());
        assert!(!trigram.ideas.concept.is_empty());
        assert!(trigram.ideas.synth_example.contains("SynthDef"));
        assert!(trigram.ideas.pattern_example.contains("Pbind"));
    }
}
