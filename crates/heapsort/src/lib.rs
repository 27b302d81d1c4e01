mod sorter;

use std::cmp::Ordering;

pub use sorter::HeapSorter;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SortOrder {
    #[default]
    Natural,
    Reversed,
}

impl SortOrder {
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::Reversed
        } else {
            Self::Natural
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Reversed => "reversed",
        }
    }

    /// Resolves the order to a plain comparison function over `T`.
    pub fn comparator<T: Ord>(self) -> fn(&T, &T) -> Ordering {
        match self {
            Self::Natural => T::cmp,
            Self::Reversed => reverse_cmp::<T>,
        }
    }
}

fn reverse_cmp<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Sorts `data` in ascending order.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    HeapSorter::new(data).sort();
}

pub fn heap_sort_with_order<T: Ord>(data: &mut [T], order: SortOrder) {
    HeapSorter::with_order(data, order).sort();
}

/// Sorts `data` so that `compare` never reports an element as greater than
/// its successor. Equal elements may be reordered.
pub fn heap_sort_by<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    HeapSorter::by(data, compare).sort();
}

/// Sorts `data` by the key extracted with `key`. The key is recomputed on
/// every comparison.
pub fn heap_sort_by_key<T, K, F>(data: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heap_sort_by(data, |a, b| key(a).cmp(&key(b)));
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[u64]) {
        for order in [SortOrder::Natural, SortOrder::Reversed] {
            let mut actual = data.to_vec();
            heap_sort_with_order(&mut actual, order);

            let mut expected = data.to_vec();
            expected.sort_by(order.comparator::<u64>());

            assert_eq!(
                actual,
                expected,
                "order={} input_len={}",
                order.name(),
                data.len(),
            );
        }
    }

    #[test]
    fn from_reversed_flag() {
        assert_eq!(SortOrder::from_reversed(false), SortOrder::Natural);
        assert_eq!(SortOrder::from_reversed(true), SortOrder::Reversed);
        assert_eq!(SortOrder::default(), SortOrder::Natural);
    }

    #[test]
    fn known_scenario() {
        let mut data = [5, 3, 8, 1, 9, 2];
        heap_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);

        let mut data = [5, 3, 8, 1, 9, 2];
        heap_sort_with_order(&mut data, SortOrder::Reversed);
        assert_eq!(data, [9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2],
            vec![2, 1],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn sorted_input_is_unchanged() {
        let ascending: Vec<u64> = (0..300).collect();
        let mut data = ascending.clone();
        heap_sort(&mut data);
        assert_eq!(data, ascending);

        let descending: Vec<u64> = (0..300).rev().collect();
        let mut data = descending.clone();
        heap_sort_with_order(&mut data, SortOrder::Reversed);
        assert_eq!(data, descending);
    }

    #[test]
    fn custom_comparator_matches_std() {
        let by_parity = |a: &u32, b: &u32| (a % 2, a).cmp(&(b % 2, b));

        let mut data = [3, 1, 2];
        heap_sort_by(&mut data, by_parity);
        assert_eq!(data, [2, 1, 3]);

        let mut rng = StdRng::seed_from_u64(0x0DD_2026);
        let input: Vec<u32> = (0..500).map(|_| rng.random_range(0..1000)).collect();
        let mut actual = input.clone();
        heap_sort_by(&mut actual, by_parity);
        let mut expected = input;
        expected.sort_by(by_parity);
        assert_eq!(actual, expected);
    }

    #[test]
    fn sort_by_key_uses_extracted_key() {
        let mut words = ["banana", "kiwi", "apple", "fig"];
        heap_sort_by_key(&mut words, |w| w.len());
        assert_eq!(words.map(str::len), [3, 4, 5, 6]);
        assert_eq!(words[0], "fig");
        assert_eq!(words[1], "kiwi");
        assert_eq!(words[3], "banana");
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for len in 0..=1000 {
            let data: Vec<u64> = (0..len).map(|_| rng.random::<u64>()).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let data: Vec<u64> = (0..size).map(|_| (rng.random::<u64>() % 16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn result_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(0xBA5E_2026);
        let input: Vec<(u8, u16)> = (0..777).map(|i| (rng.random_range(0..8), i)).collect();
        let mut actual = input.clone();
        heap_sort_by_key(&mut actual, |&(k, _)| k);

        assert!(actual.windows(2).all(|w| w[0].0 <= w[1].0));
        let mut ids: Vec<u16> = actual.iter().map(|&(_, i)| i).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..777).collect::<Vec<u16>>());
    }
}
