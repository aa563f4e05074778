//! Bounds-checked element lookup.

use std::collections::VecDeque;

/// Indexed access that returns `None` instead of panicking.
pub trait SafeGet {
    type Item;

    /// Element at `index`, or `None` when `index` is outside `0..len`.
    fn safe_get(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> SafeGet for [T] {
    type Item = T;

    fn safe_get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(&self[index])
        } else {
            None
        }
    }
}

impl<T> SafeGet for Vec<T> {
    type Item = T;

    fn safe_get(&self, index: usize) -> Option<&T> {
        self.as_slice().safe_get(index)
    }
}

impl<T, const N: usize> SafeGet for [T; N] {
    type Item = T;

    fn safe_get(&self, index: usize) -> Option<&T> {
        self.as_slice().safe_get(index)
    }
}

impl<T> SafeGet for VecDeque<T> {
    type Item = T;

    fn safe_get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(&self[index])
        } else {
            None
        }
    }
}

/// Signed-index lookup. Negative indices are out of range.
pub fn safe_get<T>(seq: &[T], index: isize) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| seq.safe_get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        let items = vec!["a", "b", "c"];
        for (i, expected) in items.iter().enumerate() {
            assert_eq!(items.safe_get(i), Some(expected));
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let items = [1, 2, 3];
        assert_eq!(items.safe_get(3), None);
        assert_eq!(items.safe_get(usize::MAX), None);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(empty.safe_get(0), None);
        assert_eq!(safe_get(&empty, 0), None);
    }

    #[test]
    fn test_signed_index() {
        let items = [10, 20, 30];
        assert_eq!(safe_get(&items, -1), None);
        assert_eq!(safe_get(&items, isize::MIN), None);
        assert_eq!(safe_get(&items, 2), Some(&30));
        assert_eq!(safe_get(&items, 3), None);
    }

    #[test]
    fn test_matches_len_for_all_indices() {
        let items: Vec<i32> = (0..5).collect();
        for i in -3isize..8 {
            let expected = (0..items.len() as isize).contains(&i).then(|| &items[i as usize]);
            assert_eq!(safe_get(&items, i), expected, "index {i}");
        }
    }

    #[test]
    fn test_vec_deque() {
        let mut deque = VecDeque::new();
        deque.push_back('x');
        deque.push_front('w');
        assert_eq!(deque.safe_get(0), Some(&'w'));
        assert_eq!(deque.safe_get(1), Some(&'x'));
        assert_eq!(deque.safe_get(2), None);
    }
}
