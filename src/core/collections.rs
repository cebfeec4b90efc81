//! Small helpers over slices of records.

use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Removes duplicates, keeping the first occurrence of each value.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Returns a shuffled copy; the input is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(&mut rand::thread_rng());
    out
}

pub fn group_by<T, K, F>(items: &[T], key: F) -> BTreeMap<K, Vec<T>>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Stable sort on a derived key; `descending` reverses the key order.
pub fn sort_by<T, K, F>(items: &[T], key: F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut out = items.to_vec();
    out.sort_by(|a, b| {
        let ord = key(a)
            .partial_cmp(&key(b))
            .unwrap_or(std::cmp::Ordering::Equal);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_keeps_first_order() {
        assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
        assert!(unique::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let items: Vec<u32> = (0..50).collect();
        let mut shuffled = shuffle(&items);
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_group_by() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let groups = group_by(&items, |(k, _)| *k);
        assert_eq!(groups["a"], vec![("a", 1), ("a", 3)]);
        assert_eq!(groups["b"], vec![("b", 2)]);
    }

    #[test]
    fn test_sort_by() {
        let people = vec![("An", 30), ("Binh", 20), ("Chi", 30), ("Dung", 25)];
        let asc = sort_by(&people, |p| p.1, false);
        assert_eq!(asc.iter().map(|p| p.0).collect::<Vec<_>>(), ["Binh", "Dung", "An", "Chi"]);
        let desc = sort_by(&people, |p| p.1, true);
        assert_eq!(desc.iter().map(|p| p.0).collect::<Vec<_>>(), ["An", "Chi", "Dung", "Binh"]);
    }
}
