//! Integration tests for the type-changing map helpers

mod common;

use fluent_collections::{dict, list, map_dict, map_list, Dict, List};
use pretty_assertions::assert_eq;

#[test]
fn test_map_list() {
    let l = list![1, 2, 3];
    let mapped = map_list(&l, |value| value.to_string()).unwrap();
    assert!(mapped
        .equals(&list!["1".to_string(), "2".to_string(), "3".to_string()])
        .unwrap());
    assert_eq!(l.to_vec().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_map_dict() {
    let d = dict! { "first" => 1, "second" => 2, "third" => 3 };
    let expected: Dict<&str, String> = dict! {
        "first" => "1".to_string(),
        "second" => "2".to_string(),
        "third" => "3".to_string(),
    };
    assert!(map_dict(&d, |_, value| value.to_string())
        .unwrap()
        .equals(&expected)
        .unwrap());
}

#[test]
fn test_map_list_into_containers() {
    let l = list![2, 3];
    let nested = map_list(&l, |n| List::repeat(*n, *n as usize)).unwrap();
    assert_eq!(nested.to_string(), "[[2,2],[3,3,3]]");
}

#[test]
fn test_map_empty() {
    let mapped = map_list(&List::<i32>::new(), |n| *n > 0).unwrap();
    assert!(mapped.is_empty().unwrap());
    let mapped = map_dict(&Dict::<i32, i32>::new(), |k, _| *k).unwrap();
    assert!(mapped.is_empty().unwrap());
}
