//! Key orderings.
//!
//! A tree is parameterised over a [`Compare`] implementation instead of
//! requiring `K: Ord`, so callers can order keys by a projection or in reverse
//! without wrapping them.

use std::cmp::Ordering;

/// A strict weak ordering over `K`.
///
/// `less` must be irreflexive, asymmetric and transitive, and equivalence
/// (`!less(a, b) && !less(b, a)`) must be transitive. Two keys that are
/// equivalent are treated as the same key by the tree.
pub trait Compare<K: ?Sized> {
    fn less(&self, a: &K, b: &K) -> bool;

    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Ascending order by `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order by `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

impl<K: Ord + ?Sized> Compare<K> for Reverse {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_and_reverse() {
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &2));
        assert!(Reverse.less(&2, &1));
        assert_eq!(Reverse.compare(&1, &2), Ordering::Greater);
    }

    #[test]
    fn test_closure_equivalence() {
        // Case-insensitive: "a" and "A" are the same key.
        let by_lower = |a: &String, b: &String| a.to_lowercase() < b.to_lowercase();
        assert!(by_lower.equivalent(&"a".to_string(), &"A".to_string()));
        assert_eq!(
            by_lower.compare(&"b".to_string(), &"A".to_string()),
            Ordering::Greater
        );
    }
}
