//! Property-based testing for the veckit containers
//!
//! Uses proptest to validate ordering, growth, and indirection invariants of
//! `GrowVec` and `SortedStrMap` against `std` model collections.

use proptest::prelude::*;
use std::collections::BTreeMap;
use veckit::{GrowVec, SortedStrMap};

/// Short lowercase keys: small alphabet forces plenty of duplicates
fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'f'), 1..=4)
        .prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// GROWVEC PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_growvec_push_preserves_elements(
        elements in prop::collection::vec(any::<i64>(), 0..2000)
    ) {
        let mut vec = GrowVec::new();

        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        prop_assert_eq!(vec.len(), elements.len());
        for (i, &expected) in elements.iter().enumerate() {
            prop_assert_eq!(*vec.get(i).unwrap(), expected);
        }
    }

    #[test]
    fn prop_growvec_push_pop_symmetry(
        elements in prop::collection::vec(any::<u64>(), 0..1000)
    ) {
        let mut vec = GrowVec::new();

        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        let mut popped = Vec::new();
        while let Some(elem) = vec.pop() {
            popped.push(elem);
        }

        popped.reverse();
        prop_assert_eq!(popped, elements);
        prop_assert!(vec.is_empty());
    }

    #[test]
    fn prop_growvec_capacity_doubles_and_never_shrinks(
        batches in prop::collection::vec(
            prop::collection::vec(any::<i32>(), 1..100),
            1..20
        )
    ) {
        let mut vec = GrowVec::new();
        let mut total = 0;

        for batch in batches {
            let old_capacity = vec.capacity();

            for &elem in &batch {
                vec.push(elem).unwrap();
                total += 1;
            }

            prop_assert!(vec.capacity() >= old_capacity);
            prop_assert_eq!(vec.len(), total);
            // doubling keeps capacity a power of two
            prop_assert!(vec.capacity().is_power_of_two());
            prop_assert!(vec.capacity() < 2 * total.max(1));
        }
    }

    #[test]
    fn prop_growvec_insert_matches_vec_model(
        seed in prop::collection::vec(any::<i32>(), 0..50),
        inserts in prop::collection::vec((any::<usize>(), any::<i32>()), 0..50)
    ) {
        let mut vec = GrowVec::new();
        let mut model: Vec<i32> = Vec::new();

        for &elem in &seed {
            vec.push(elem).unwrap();
            model.push(elem);
        }

        for (pos, value) in inserts {
            let pos = pos % (model.len() + 1);
            vec.insert(pos, value).unwrap();
            model.insert(pos, value);
        }

        prop_assert_eq!(vec.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_growvec_sorted_insert_yields_sorted(
        elements in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        let mut vec = GrowVec::new();
        for &elem in &elements {
            vec.sorted_insert(elem).unwrap();
        }

        prop_assert_eq!(vec.len(), elements.len());
        for window in vec.as_slice().windows(2) {
            prop_assert!(window[0] <= window[1]);
        }
    }

    #[test]
    fn prop_growvec_lower_bound_is_partition_point(
        mut elements in prop::collection::vec(any::<i32>(), 0..300),
        probe in any::<i32>()
    ) {
        elements.sort();
        let mut vec = GrowVec::new();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        let pos = vec.lower_bound(&probe);

        // everything left of the bound is strictly less, nothing at or
        // right of it is
        for i in 0..pos {
            prop_assert!(*vec.get(i).unwrap() < probe);
        }
        for i in pos..vec.len() {
            prop_assert!(*vec.get(i).unwrap() >= probe);
        }
        prop_assert_eq!(pos, elements.partition_point(|&x| x < probe));
    }

    #[test]
    fn prop_growvec_get_out_of_range_is_error(
        elements in prop::collection::vec(any::<i16>(), 0..100),
        past_end in 0usize..100
    ) {
        let mut vec = GrowVec::new();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        prop_assert!(vec.get(vec.len() + past_end).is_err());
    }
}

// =============================================================================
// SORTEDSTRMAP PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_map_matches_btreemap_model(
        pairs in prop::collection::vec((key_strategy(), any::<i32>()), 0..200)
    ) {
        let mut map = SortedStrMap::new();
        let mut model = BTreeMap::new();

        for (key, value) in &pairs {
            map.insert(key, *value).unwrap();
            model.insert(key.clone(), *value);

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.get(key), model.get(key.as_str()));
        }

        // identical content in identical sorted order
        for (rank, (key, value)) in model.iter().enumerate() {
            prop_assert_eq!(map.key_at(rank).unwrap(), key.as_str());
            prop_assert_eq!(map.get_by_rank(rank).unwrap(), value);
        }
    }

    #[test]
    fn prop_map_entries_strictly_sorted(
        pairs in prop::collection::vec((key_strategy(), any::<u8>()), 0..200)
    ) {
        let mut map = SortedStrMap::new();

        for (key, value) in &pairs {
            map.insert(key, *value).unwrap();

            // after every insert: strictly ascending, no duplicates
            for rank in 1..map.len() {
                prop_assert!(map.key_at(rank - 1).unwrap() < map.key_at(rank).unwrap());
            }
        }
    }

    #[test]
    fn prop_map_search_rank_semantics(
        pairs in prop::collection::vec((key_strategy(), any::<i8>()), 0..100),
        probe in key_strategy()
    ) {
        let mut map = SortedStrMap::new();
        let mut model = BTreeMap::new();

        for (key, value) in pairs {
            map.insert(&key, value).unwrap();
            model.insert(key, value);
        }

        let smaller = model.range(..probe.clone()).count();
        match map.search(&probe) {
            Ok(rank) => {
                prop_assert!(model.contains_key(&probe));
                prop_assert_eq!(rank, smaller);
            }
            Err(insert_pos) => {
                prop_assert!(!model.contains_key(&probe));
                prop_assert_eq!(insert_pos, smaller);
            }
        }
    }

    #[test]
    fn prop_map_overwrite_is_last_write_wins(
        key in key_strategy(),
        values in prop::collection::vec(any::<i32>(), 1..20),
        other_keys in prop::collection::vec(key_strategy(), 0..20)
    ) {
        let mut map = SortedStrMap::new();

        for (i, other) in other_keys.iter().enumerate() {
            map.insert(other, i as i32 - 1000).unwrap();
        }

        for &value in &values {
            map.insert(&key, value).unwrap();
        }

        prop_assert_eq!(map.get(&key), values.last());
    }

    #[test]
    fn prop_map_iter_is_sorted_pairs(
        pairs in prop::collection::vec((key_strategy(), any::<i32>()), 0..100)
    ) {
        let mut map = SortedStrMap::new();
        let mut model = BTreeMap::new();

        for (key, value) in pairs {
            map.insert(&key, value).unwrap();
            model.insert(key, value);
        }

        let collected: Vec<(String, i32)> = map
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let expected: Vec<(String, i32)> = model
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        prop_assert_eq!(collected, expected);
    }
}
