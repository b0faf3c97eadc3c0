use std::collections::BTreeSet;

use word_counter_core::{compare_ignore_case, sort_keys, FrequencyMap, SeparatorSet};

fn sample_map() -> FrequencyMap {
    FrequencyMap::from_text(
        "Zebra apple Mango banana apple Apple cherry 42 _under Éclair éclair zebra",
        &SeparatorSet::default(),
    )
}

#[test]
fn sorted_keys_cover_every_key_once() {
    let map = sample_map();
    let sorted = sort_keys(&map);
    assert_eq!(sorted.len(), map.len());

    let from_sorted: BTreeSet<&str> = sorted.iter().copied().collect();
    let from_map: BTreeSet<&str> = map.keys().collect();
    assert_eq!(from_sorted, from_map);
}

#[test]
fn adjacent_keys_are_non_decreasing() {
    let map = sample_map();
    let sorted = sort_keys(&map);
    for pair in sorted.windows(2) {
        assert!(
            compare_ignore_case(pair[0], pair[1]).is_le(),
            "{:?} sorted before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn case_ties_are_ordered_deterministically() {
    let map = sample_map();
    let sorted = sort_keys(&map);
    let apple = sorted.iter().position(|w| *w == "Apple").unwrap();
    let lower = sorted.iter().position(|w| *w == "apple").unwrap();
    assert_eq!(lower, apple + 1);

    for _ in 0..5 {
        assert_eq!(sort_keys(&sample_map()), sorted);
    }
}

#[test]
fn empty_map_sorts_to_nothing() {
    assert!(sort_keys(&FrequencyMap::new()).is_empty());
}
