//! Property-based tests for the List and Dict algebraic laws

use fluent_collections::{Dict, List};
use proptest::collection::{hash_map, vec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn duplicate_equals_original(items in vec(any::<i64>(), 0..32)) {
        let l = List::from_vec(items.clone());
        let copy = l.duplicate().unwrap();
        prop_assert!(copy.equals(&l).unwrap());

        copy.add([0]).unwrap();
        prop_assert_eq!(l.to_vec().unwrap(), items);
    }

    #[test]
    fn reverse_is_an_involution(items in vec(any::<i32>(), 0..32)) {
        let l = List::from_vec(items);
        let reversed = l.duplicate().unwrap();
        reversed.reverse().unwrap().reverse().unwrap();
        prop_assert!(reversed.equals(&l).unwrap());
    }

    #[test]
    fn sub_list_zero_zero_is_whole(items in vec(any::<u8>(), 1..32)) {
        let l = List::from_vec(items);
        prop_assert!(l.sub_list(0, 0).unwrap().equals(&l).unwrap());
    }

    #[test]
    fn repeat_fills_count(value in any::<i16>(), count in 0usize..64) {
        let l = List::repeat(value, count);
        prop_assert_eq!(l.count().unwrap(), count);
        prop_assert!(l.to_vec().unwrap().iter().all(|v| *v == value));
    }

    #[test]
    fn sort_is_ordered_permutation(items in vec(any::<i32>(), 0..32)) {
        let l = List::from_vec(items.clone());
        l.sort().unwrap();
        let mut expected = items;
        expected.sort();
        prop_assert_eq!(l.to_vec().unwrap(), expected);
    }

    #[test]
    fn sum_matches_iterator(items in vec(-1000i32..1000, 0..32)) {
        let l = List::from_vec(items.clone());
        let expected: i32 = items.iter().sum();
        prop_assert_eq!(l.sum().unwrap(), f64::from(expected));
    }

    #[test]
    fn index_of_absent_is_none(items in vec(0u32..100, 0..32)) {
        let l = List::from_vec(items);
        prop_assert_eq!(l.index_of(&100).unwrap(), None);
    }

    #[test]
    fn set_then_get(
        fields in hash_map("[a-z]{1,8}", any::<i32>(), 0..16),
        key in "[a-z]{1,8}",
        value in any::<i32>(),
    ) {
        let d = Dict::from_map(fields);
        let before = d.count().unwrap();
        let existed = d.key_exists(&key).unwrap();
        d.set(key.clone(), value).unwrap();
        prop_assert_eq!(d.get(&key).unwrap(), value);
        prop_assert_eq!(d.count().unwrap(), if existed { before } else { before + 1 });
    }

    #[test]
    fn string_dicts_serialize_to_json(fields in hash_map("\\PC{0,8}", any::<i64>(), 0..16)) {
        let d = Dict::from_map(fields.clone());
        let parsed: std::collections::HashMap<String, i64> =
            serde_json::from_str(&d.to_string()).unwrap();
        prop_assert_eq!(parsed, fields);
    }
}
