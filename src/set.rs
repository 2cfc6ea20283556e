// =============================================================================
// OrderedSet: the deduplicating adapter
// =============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::compare::{Compare, Natural};
use crate::error::InvariantViolation;
use crate::iter::{Cursor, IntoIter, Iter};
use crate::tree::RbTree;

/// An ordered set of unique keys.
///
/// Every mutation first checks membership, so the underlying [`RbTree`] is
/// never asked to insert a duplicate or remove a missing key, and no
/// operation here can fail.
///
/// ```rust
/// use llrb_set::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// assert!(set.insert(3));
/// assert!(set.insert(1));
/// assert!(!set.insert(3));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub struct OrderedSet<K, C = Natural> {
    tree: RbTree<K, C>,
}

impl<K> OrderedSet<K, Natural> {
    /// An empty set ordered by `K: Ord`.
    pub fn new() -> Self {
        Self {
            tree: RbTree::new(),
        }
    }
}

impl<K, C> OrderedSet<K, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            tree: RbTree::with_comparator(cmp),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn first(&self) -> Option<&K> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<&K> {
        self.tree.last()
    }

    pub fn iter(&self) -> Iter<'_, K, C> {
        self.tree.iter()
    }

    /// Read access to the underlying tree.
    pub fn as_tree(&self) -> &RbTree<K, C> {
        &self.tree
    }

    pub fn into_tree(self) -> RbTree<K, C> {
        self.tree
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Moves every key into a new set, leaving this one empty.
    pub fn take_all(&mut self) -> Self
    where
        C: Clone,
    {
        Self {
            tree: self.tree.take(),
        }
    }

    pub fn compact(&mut self) -> usize {
        self.tree.compact()
    }

    pub fn shrink_to_fit(&mut self) {
        self.tree.shrink_to_fit();
    }

    pub fn memory_usage(&self) -> usize {
        self.tree.memory_usage()
    }
}

impl<K, C: Compare<K>> OrderedSet<K, C> {
    /// Adds `key`. Returns `false`, dropping `key`, if an equivalent key was
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.tree.contains(&key) {
            return false;
        }
        self.tree.insert(key).is_ok()
    }

    /// Removes the key equivalent to `key`. Returns whether one was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes and returns the stored key equivalent to `key`.
    pub fn take(&mut self, key: &K) -> Option<K> {
        if !self.tree.contains(key) {
            return None;
        }
        self.tree.remove(key).ok()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    pub fn get(&self, key: &K) -> Option<&K> {
        self.tree.get(key)
    }

    pub fn find(&self, key: &K) -> Option<Cursor<'_, K, C>> {
        self.tree.find(key)
    }

    pub fn pop_first(&mut self) -> Option<K> {
        self.tree.pop_first()
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.tree.validate()
    }

    /// Lexicographic comparison in iteration order, with keys ranked by this
    /// set's comparator.
    fn cmp_keys(&self, other: &Self) -> Ordering {
        let cmp = self.tree.comparator();
        let (mut a, mut b) = (self.iter(), other.iter());
        loop {
            match (a.next(), b.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(x), Some(y)) => match cmp.compare(x, y) {
                    Ordering::Equal => {}
                    ord => return ord,
                },
            }
        }
    }
}

impl<K, C: Default> Default for OrderedSet<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, C: Clone> Clone for OrderedSet<K, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<K: fmt::Debug, C> fmt::Debug for OrderedSet<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, C> PartialEq for OrderedSet<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, C> Eq for OrderedSet<K, C> {}

/// Sets compare lexicographically in iteration order, ranking keys with the
/// comparator rather than `K`'s own ordering. With a comparator whose
/// equivalence is coarser than `==`, two sets can compare `Equal` without
/// being `==`.
impl<K: PartialEq, C: Compare<K>> PartialOrd for OrderedSet<K, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_keys(other))
    }
}

impl<K: Eq, C: Compare<K>> Ord for OrderedSet<K, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_keys(other)
    }
}

impl<K: Hash, C> Hash for OrderedSet<K, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for key in self {
            key.hash(state);
        }
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for OrderedSet<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::with_comparator(C::default());
        set.extend(iter);
        set
    }
}

impl<K, C: Compare<K>> Extend<K> for OrderedSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for OrderedSet<K, Natural> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a, K, C> IntoIterator for &'a OrderedSet<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, C>;

    fn into_iter(self) -> Iter<'a, K, C> {
        self.iter()
    }
}

impl<K, C: Compare<K>> IntoIterator for OrderedSet<K, C> {
    type Item = K;
    type IntoIter = IntoIter<K, C>;

    fn into_iter(self) -> IntoIter<K, C> {
        self.tree.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Reverse;

    fn keys<C>(s: &OrderedSet<u32, C>) -> Vec<u32> {
        s.iter().copied().collect()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut s: OrderedSet<u32> = OrderedSet::new();
        assert!(s.insert(4));
        assert!(s.insert(2));
        let once = keys(&s);
        assert!(!s.insert(4));
        assert_eq!(s.len(), 2);
        assert_eq!(keys(&s), once);
        s.validate().unwrap();
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut s = OrderedSet::from([1u32, 2, 3]);
        assert!(!s.remove(&9));
        assert_eq!(s.len(), 3);
        assert!(s.remove(&2));
        assert!(!s.remove(&2));
        assert_eq!(keys(&s), vec![1, 3]);
    }

    #[test]
    fn test_take_returns_stored_key() {
        let by_len = |a: &String, b: &String| a.len() < b.len();
        let mut s = OrderedSet::with_comparator(by_len);
        assert!(s.insert("abc".to_string()));
        assert!(!s.insert("xyz".to_string()));
        assert_eq!(s.get(&"---".to_string()), Some(&"abc".to_string()));
        assert_eq!(s.take(&"123".to_string()), Some("abc".to_string()));
        assert!(s.is_empty());
    }

    #[test]
    fn test_custom_order() {
        let s: OrderedSet<u32, Reverse> = [1, 5, 3].into_iter().collect();
        assert_eq!(keys(&s), vec![5, 3, 1]);
        assert_eq!(s.first(), Some(&5));
        assert_eq!(s.last(), Some(&1));
    }

    #[test]
    fn test_eq_and_ord() {
        let a = OrderedSet::<u32>::from([1, 2, 3]);
        let b = OrderedSet::<u32>::from([3, 2, 1, 2]);
        let c = OrderedSet::<u32>::from([1, 2, 4]);
        let d = OrderedSet::<u32>::from([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(d < a);
        assert!(OrderedSet::<u32>::new() < d);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_ord_follows_comparator() {
        let a: OrderedSet<u32, Reverse> = [3, 2].into_iter().collect();
        let b: OrderedSet<u32, Reverse> = [3, 1].into_iter().collect();
        let c: OrderedSet<u32, Reverse> = [4].into_iter().collect();
        // Under Reverse, 2 ranks before 1 and 4 before 3.
        assert!(a < b);
        assert!(b > a);
        assert!(c < a);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal));

        let mut sorted = vec![b.clone(), c.clone(), a.clone()];
        sorted.sort();
        assert_eq!(sorted, vec![c, a, b]);
    }

    #[test]
    fn test_construction_infers_natural_order() {
        let mut s = OrderedSet::new();
        s.insert(2u64);
        s.insert(1);
        assert_eq!(s.first(), Some(&1));

        let t = OrderedSet::from(["b", "a"]);
        assert_eq!(t.first(), Some(&"a"));
    }

    #[test]
    fn test_take_all_leaves_empty_set() {
        let mut s = OrderedSet::<u32>::from([7, 8]);
        let moved = s.take_all();
        assert_eq!(keys(&moved), vec![7, 8]);
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);
        s.validate().unwrap();
        assert!(s.insert(1));
    }

    #[test]
    fn test_clone_from() {
        let src = OrderedSet::<u32>::from([1, 2]);
        let mut dst = OrderedSet::<u32>::from([5, 6, 7]);
        dst.clone_from(&src);
        assert_eq!(dst, src);
        dst.validate().unwrap();
    }

    #[test]
    fn test_owned_into_iter() {
        let s = OrderedSet::<u32>::from([3, 1, 2]);
        assert_eq!(s.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_debug() {
        let s = OrderedSet::<&str>::from(["b", "a"]);
        assert_eq!(format!("{s:?}"), r#"{"a", "b"}"#);
    }
}
