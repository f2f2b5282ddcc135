//! Extension traits for slices and, through deref, vectors.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Helpers for working with slices of any element type
pub trait SliceExt<T> {
    /// Split the slice into groups of `size` elements; the last group holds the remainder.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidChunkSize] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::slice::SliceExt;
    ///
    /// let groups = [1, 2, 3, 4, 5].chunked(2).unwrap();
    /// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// assert!([1, 2].chunked(0).is_err());
    /// ```
    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone;

    /// Count the elements for which `predicate` holds
    fn count_matching<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool;

    /// Keep the first element for every distinct key, in first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::slice::SliceExt;
    ///
    /// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    /// let firsts = words.unique_by(|w| w.chars().next());
    /// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
    /// ```
    fn unique_by<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Split off the last element.
    ///
    /// Slices with fewer than two elements are returned unchanged, together
    /// with `None`; so `[x]` yields `([x], None)` rather than `([], Some(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::slice::SliceExt;
    ///
    /// assert_eq!([1, 2, 3].split_tail(), (vec![1, 2], Some(3)));
    /// assert_eq!([5].split_tail(), (vec![5], None));
    /// ```
    fn split_tail(&self) -> (Vec<T>, Option<T>)
    where
        T: Clone;

    /// Prefix scan: `initial` followed by every intermediate accumulator value.
    ///
    /// The result is always one element longer than the slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::slice::SliceExt;
    ///
    /// assert_eq!([1, 2, 3].scan_from(0, |acc, x| acc + x), vec![0, 1, 3, 6]);
    /// ```
    fn scan_from<A, F>(&self, initial: A, combine: F) -> Vec<A>
    where
        F: FnMut(&A, &T) -> A;

    /// Split into `(matching, not_matching)`, both in their original order
    fn separate<F>(&self, predicate: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// Element at `index`, or `None` if `index` is negative or past the end
    fn get_checked(&self, index: isize) -> Option<&T>;
}

impl<T> SliceExt<T> for [T] {
    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(Error::InvalidChunkSize(size));
        }
        Ok(self.chunks(size).map(<[T]>::to_vec).collect())
    }

    fn count_matching<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|v| predicate(*v)).count()
    }

    fn unique_by<K, F>(&self, mut key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|v| seen.insert(key(*v)))
            .cloned()
            .collect()
    }

    fn split_tail(&self) -> (Vec<T>, Option<T>)
    where
        T: Clone,
    {
        match self {
            [init @ .., last] if !init.is_empty() => (init.to_vec(), Some(last.clone())),
            _ => (self.to_vec(), None),
        }
    }

    fn scan_from<A, F>(&self, initial: A, mut combine: F) -> Vec<A>
    where
        F: FnMut(&A, &T) -> A,
    {
        let mut out = Vec::with_capacity(self.len() + 1);
        let mut acc = initial;
        for v in self {
            let next = combine(&acc, v);
            out.push(acc);
            acc = next;
        }
        out.push(acc);
        out
    }

    fn separate<F>(&self, mut predicate: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().cloned().partition(|v| predicate(v))
    }

    fn get_checked(&self, index: isize) -> Option<&T> {
        usize::try_from(index).ok().and_then(|i| self.get(i))
    }
}

/// Neighbour lookup for slices of comparable elements
pub trait EqSliceExt<T: PartialEq> {
    /// Element directly after the first occurrence of `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::slice::EqSliceExt;
    ///
    /// let days = ["mon", "tue", "wed"];
    /// assert_eq!(days.element_after(&"mon"), Some(&"tue"));
    /// assert_eq!(days.element_after(&"wed"), None);
    /// assert_eq!(days.element_before(&"mon"), None);
    /// ```
    fn element_after(&self, elem: &T) -> Option<&T>;

    /// Element directly before the first occurrence of `elem`
    fn element_before(&self, elem: &T) -> Option<&T>;
}

impl<T: PartialEq> EqSliceExt<T> for [T] {
    fn element_after(&self, elem: &T) -> Option<&T> {
        let idx = self.iter().position(|v| v == elem)?;
        self.get(idx + 1)
    }

    fn element_before(&self, elem: &T) -> Option<&T> {
        let idx = self.iter().position(|v| v == elem)?;
        idx.checked_sub(1).and_then(|i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunked_sizes() {
        let v: Vec<u32> = (0..10).collect();
        for n in 1..=11 {
            let groups = v.chunked(n).unwrap();
            assert_eq!(groups.len(), v.len().div_ceil(n));
            assert!(groups[..groups.len() - 1].iter().all(|g| g.len() == n));
            assert_eq!(groups.concat(), v);
        }
    }

    #[test]
    fn test_chunked_empty() {
        let v: Vec<u8> = Vec::new();
        assert!(v.chunked(3).unwrap().is_empty());
    }

    #[test]
    fn test_chunked_zero_size() {
        let err = [1, 2, 3].chunked(0).unwrap_err();
        assert!(matches!(err, Error::InvalidChunkSize(0)));
    }

    #[test]
    fn test_count_matching() {
        assert_eq!([1, 2, 3, 4, 5].count_matching(|v| v % 2 == 1), 3);
        assert_eq!(Vec::<i32>::new().count_matching(|_| true), 0);
    }

    #[test]
    fn test_unique_by_identity() {
        assert_eq!([1, 2, 1, 3, 2].unique_by(|v| *v), vec![1, 2, 3]);
    }

    #[test]
    fn test_unique_by_keeps_first_of_key() {
        let pairs = [(1, 'a'), (2, 'b'), (1, 'c')];
        assert_eq!(pairs.unique_by(|p| p.0), vec![(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_split_tail() {
        assert_eq!(Vec::<i32>::new().split_tail(), (vec![], None));
        assert_eq!([5].split_tail(), (vec![5], None));
        assert_eq!([1, 2].split_tail(), (vec![1], Some(2)));
        assert_eq!([1, 2, 3].split_tail(), (vec![1, 2], Some(3)));
    }

    #[test]
    fn test_scan_from() {
        assert_eq!([1, 2, 3].scan_from(0, |a, v| a + v), vec![0, 1, 3, 6]);
        assert_eq!(Vec::<i32>::new().scan_from(7, |a, v| a + v), vec![7]);

        let words = ["a", "b", "c"];
        let joined = words.scan_from(String::new(), |a, w| format!("{a}{w}"));
        assert_eq!(joined, vec!["", "a", "ab", "abc"]);
    }

    #[test]
    fn test_separate() {
        let (even, odd) = [1, 2, 3, 4].separate(|v| v % 2 == 0);
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3]);

        let (all, none) = [1, 2].separate(|_| true);
        assert_eq!(all, vec![1, 2]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_get_checked() {
        let v = [10, 20, 30];
        assert_eq!(v.get_checked(0), Some(&10));
        assert_eq!(v.get_checked(2), Some(&30));
        assert_eq!(v.get_checked(3), None);
        assert_eq!(v.get_checked(-1), None);
        assert_eq!(v.get_checked(isize::MIN), None);
    }

    #[test]
    fn test_neighbours_use_first_occurrence() {
        let v = [1, 2, 3, 2, 4];
        assert_eq!(v.element_after(&2), Some(&3));
        assert_eq!(v.element_before(&2), Some(&1));
        assert_eq!(v.element_after(&4), None);
        assert_eq!(v.element_before(&1), None);
        assert_eq!(v.element_after(&9), None);
        assert_eq!(v.element_before(&9), None);
    }
}
