#![cfg(test)]

use std::collections::HashSet as StdHashSet;

use proptest::prelude::*;

use super::*;
use crate::collections::hash::{DynKey, InvalidKey, Key, KeyNotFound, LookupError};
use crate::util::hash::{IdentityState, ManualHash};
use crate::util::panic::assert_panics;

fn sorted<T: Key + Ord + Clone>(set: &HashSet<T>) -> Vec<T> {
    let mut items: Vec<T> = set.iter().cloned().collect();
    items.sort();
    items
}

#[test]
fn test_empty_set() {
    let set = HashSet::<i32>::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.iter().next(), None);
    assert_eq!(set.to_string(), "{}");
}

#[test]
fn test_invalid_items() {
    let mut set = HashSet::<DynKey>::new();
    assert_eq!(set.insert(DynKey::None), Err(InvalidKey::Absent));
    assert_eq!(set.insert(DynKey::Bool(true)), Err(InvalidKey::Boolean));
    assert_eq!(set.insert(DynKey::Bool(false)), Err(InvalidKey::Boolean));
    assert_eq!(set.insert(DynKey::list([])), Err(InvalidKey::Unhashable));
    assert_eq!(set.remove(&DynKey::list([])), Err(InvalidKey::Unhashable));
    assert!(set.is_empty(), "Invalid items should never be added.");

    assert_panics!({
        [DynKey::Int(1), DynKey::None].into_iter().collect::<HashSet<DynKey>>()
    });
}

#[test]
fn test_insert() {
    let mut set = HashSet::<i32>::new();
    assert_eq!(set.insert(3), Ok(true));
    assert_eq!(set.insert(5), Ok(true));
    assert_eq!(set.insert(-2), Ok(true));
    assert_eq!(set.insert(5), Ok(false), "Adding an existing item should report it.");
    assert_eq!(set.insert(5), Ok(false));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_mixed_items() {
    let mut set = HashSet::<DynKey>::new();
    for _ in 0..10 {
        set.insert("a".into()).unwrap();
        set.insert(1_i64.into()).unwrap();
        set.insert(1.1_f64.into()).unwrap();
        set.insert(DynKey::tuple([DynKey::from("g"), DynKey::from(2_i64)])).unwrap();
        set.insert(DynKey::Float(1.0)).unwrap();

        assert_eq!(set.len(), 5, "1 and 1.0 should be kept as separate items.");
        set.clear();
        assert!(set.is_empty());
    }
}

#[test]
fn test_remove() {
    let mut set = HashSet::<i32>::new();
    assert_eq!(set.try_remove(&1), Err(LookupError::KeyNotFound(KeyNotFound)));
    assert_eq!(set.remove(&1), Ok(None));

    set.insert(1).unwrap();
    assert_eq!(set.try_remove(&1), Ok(1));
    set.insert(2).unwrap();
    set.insert(3).unwrap();
    assert_eq!(set.remove(&2), Ok(Some(2)));
    assert_eq!(set.remove(&3), Ok(Some(3)));
    assert_eq!(set.len(), 0);
}

#[test]
fn test_contains() {
    let mut set = HashSet::<String>::new();
    assert!(!set.contains("three"));
    set.insert("three".to_owned()).unwrap();
    assert!(set.contains("three"));
    set.insert("five".to_owned()).unwrap();
    set.insert("seven".to_owned()).unwrap();
    set.remove("three").unwrap();
    assert!(set.contains("five"));
    assert!(!set.contains("three"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(IdentityState);
    set.insert(ManualHash::new(666, "data1")).unwrap();
    set.insert(ManualHash::new(777, "data2")).unwrap();
    set.insert(ManualHash::new(888, "data2")).unwrap();
    set.insert(ManualHash::new(999, "data3")).unwrap();
    set.insert(ManualHash::new(999, "data3")).unwrap();
    assert_eq!(set.len(), 4, "Items with different hashes are never equal.");

    set.remove(&ManualHash::new(666, "data1")).unwrap();
    set.remove(&ManualHash::new(777, "data2")).unwrap();
    set.remove(&ManualHash::new(888, "data2")).unwrap();
    set.remove(&ManualHash::new(999, "data3")).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_set_operations() {
    let a: HashSet<i32> = (1..=6).collect();
    let b: HashSet<i32> = (4..=9).collect();

    assert_eq!(sorted(&(&a | &b)), (1..=9).collect::<Vec<_>>());
    assert_eq!(sorted(&(&a & &b)), [4, 5, 6]);
    assert_eq!(sorted(&(&a - &b)), [1, 2, 3]);
    assert_eq!(sorted(&(&b - &a)), [7, 8, 9]);

    assert_eq!(a.union(&b).count(), 9, "The union shouldn't repeat shared items.");
    assert_eq!(a.intersection(&b).count(), b.intersection(&a).count());
}

#[test]
fn test_empty_set_operations() {
    let mut a = HashSet::<i32>::new();
    let mut b = HashSet::<i32>::new();
    assert!((&a | &b).is_empty());
    assert!((&a & &b).is_empty());
    assert!((&a - &b).is_empty());

    a.insert(1).unwrap();
    a.insert(2).unwrap();
    b.insert(3).unwrap();
    assert!((&a & &b).is_empty());

    let mut c = HashSet::<i32>::new();
    c.insert(1).unwrap();
    a.remove(&2).unwrap();
    assert!((&a - &c).is_empty());
}

#[test]
fn test_intersection_iterates_smaller_set() {
    let small: HashSet<i32> = [2, 4].into_iter().collect();
    let large: HashSet<i32> = (0..100).collect();

    let from_small = small.intersection(&large);
    let from_large = large.intersection(&small);
    assert!(std::ptr::eq(from_small.other, &large));
    assert!(std::ptr::eq(from_large.other, &large), "The larger set should only be probed.");
}

#[test]
fn test_subsets() {
    let a: HashSet<i32> = (1..=3).collect();
    let b: HashSet<i32> = (1..=5).collect();

    assert!(a.is_subset(&b));
    assert!(!b.is_subset(&a));
    assert!(b.is_superset(&a));
    assert!(a.is_subset(&a));
    assert!(HashSet::new().is_subset(&a));
    assert_eq!(a, (1..=3).rev().collect::<HashSet<i32>>());
    assert_ne!(a, b);
}

#[test]
fn test_iteration() {
    let mut set = HashSet::<i32>::new();
    assert_eq!(set.iter().next(), None);

    set.insert(4).unwrap();
    set.insert(5).unwrap();
    set.insert(6).unwrap();

    let mut iter = set.iter();
    let mut values = Vec::new();
    for _ in 0..3 {
        values.push(*iter.next().unwrap());
    }
    values.sort();
    assert_eq!(values, [4, 5, 6]);
    assert_eq!(iter.next(), None);

    let mut owned: Vec<i32> = set.into_iter().collect();
    owned.sort();
    assert_eq!(owned, [4, 5, 6]);
}

#[test]
fn test_to_string() {
    let mut set = HashSet::<char>::new();
    set.insert('a').unwrap();
    assert_eq!(set.to_string(), "{a}");

    set.insert('b').unwrap();
    set.insert('c').unwrap();
    assert!(
        ["{a, b, c}", "{a, c, b}", "{b, a, c}", "{b, c, a}", "{c, a, b}", "{c, b, a}"]
            .contains(&set.to_string().as_str())
    );

    set.remove(&'b').unwrap();
    assert!(["{a, c}", "{c, a}"].contains(&set.to_string().as_str()));

    let mut ordered = HashSet::with_hasher(IdentityState);
    ordered.insert(ManualHash::new(-1, "one")).unwrap();
    ordered.insert(ManualHash::new(0, "zero")).unwrap();
    assert_eq!(ordered.to_string(), "{zero, one}");
    assert!(format!("{ordered:?}").starts_with("HashSet { contents: {ManualHash"));
}

proptest! {
    #[test]
    fn prop_operations_match_std(
        a in proptest::collection::vec(0_u8..250, 0..40),
        b in proptest::collection::vec(0_u8..250, 0..40),
    ) {
        let set_a: HashSet<u8> = a.iter().copied().collect();
        let set_b: HashSet<u8> = b.iter().copied().collect();
        let std_a: StdHashSet<u8> = a.into_iter().collect();
        let std_b: StdHashSet<u8> = b.into_iter().collect();

        let union = &set_a | &set_b;
        let intersection = &set_a & &set_b;
        let difference_ab = &set_a - &set_b;
        let difference_ba = &set_b - &set_a;

        prop_assert_eq!(union.len(), std_a.union(&std_b).count());
        prop_assert_eq!(intersection.len(), std_a.intersection(&std_b).count());
        prop_assert_eq!(difference_ab.len(), std_a.difference(&std_b).count());
        prop_assert_eq!(difference_ba.len(), std_b.difference(&std_a).count());
        prop_assert_eq!(
            union.len(),
            intersection.len() + difference_ab.len() + difference_ba.len()
        );

        for item in union.iter() {
            prop_assert!(std_a.contains(item) || std_b.contains(item));
        }
        for item in intersection.iter() {
            prop_assert!(std_a.contains(item) && std_b.contains(item));
        }
        for item in difference_ab.iter() {
            prop_assert!(std_a.contains(item) && !std_b.contains(item));
        }
    }

    #[test]
    fn prop_random_remove(items in proptest::collection::vec(0_u8..250, 1..40)) {
        let mut set = HashSet::<u8>::new();
        let mut model = StdHashSet::new();
        for item in &items {
            set.insert(*item).unwrap();
            model.insert(*item);
        }

        for item in items.iter().rev() {
            prop_assert_eq!(set.remove(item).unwrap().is_some(), model.remove(item));
            for remaining in set.iter() {
                prop_assert!(model.contains(remaining));
            }
            prop_assert_eq!(set.len(), model.len());
        }
        prop_assert!(set.is_empty());
    }
}
