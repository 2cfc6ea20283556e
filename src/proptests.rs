use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 5)]
    Insert(#[proptest(strategy = "0u16..512")] u16),
    #[proptest(weight = 3)]
    Remove(#[proptest(strategy = "0u16..512")] u16),
    #[proptest(weight = 1)]
    PopFirst,
    #[proptest(weight = 1)]
    Contains(#[proptest(strategy = "0u16..512")] u16),
    #[proptest(weight = 1)]
    CloneAndDiverge,
}

fn check_against_model(s: &OrderedSet<u16>, m: &BTreeSet<u16>) -> Result<(), TestCaseError> {
    if let Err(err) = s.validate() {
        return Err(TestCaseError::fail(format!("invariant broken: {err}")));
    }
    prop_assert_eq!(s.len(), m.len());
    prop_assert_eq!(s.is_empty(), m.is_empty());
    prop_assert_eq!(s.first(), m.first());
    prop_assert_eq!(s.last(), m.last());
    prop_assert!(s.iter().eq(m.iter()));
    prop_assert_eq!(s.iter().len(), s.len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_btreeset(ops in prop::collection::vec(any::<Op>(), 0..=400)) {
        let mut s: OrderedSet<u16> = OrderedSet::new();
        let mut m: BTreeSet<u16> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    prop_assert_eq!(s.insert(k), m.insert(k));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(s.remove(&k), m.remove(&k));
                }
                Op::PopFirst => {
                    prop_assert_eq!(s.pop_first(), m.pop_first());
                }
                Op::Contains(k) => {
                    prop_assert_eq!(s.contains(&k), m.contains(&k));
                }
                Op::CloneAndDiverge => {
                    // Mutating a copy must leave the original alone.
                    let before: Vec<u16> = s.iter().copied().collect();
                    let mut copy = s.clone();
                    if let Some(k) = copy.first().copied() {
                        copy.remove(&k);
                    }
                    copy.insert(u16::MAX);
                    check_against_model(&s, &m)?;
                    prop_assert_eq!(s.iter().copied().collect::<Vec<_>>(), before);
                }
            }
            check_against_model(&s, &m)?;
        }
    }

    #[test]
    fn prop_clone_copies_colors(keys in prop::collection::vec(any::<u32>(), 0..=300)) {
        let s: OrderedSet<u32> = keys.into_iter().collect();
        let copy = s.clone();
        let (a, b) = (s.as_tree(), copy.as_tree());
        for k in s.iter() {
            prop_assert_eq!(a.nodes[a.find_node(k)].color, b.nodes[b.find_node(k)].color);
        }
        prop_assert!(copy.validate().is_ok());
    }

    #[test]
    fn prop_primitive_errors_leave_tree_untouched(
        keys in prop::collection::btree_set(0u32..1000, 1..=200),
        target in 0u32..1000,
    ) {
        let mut t: RbTree<u32> = RbTree::new();
        for &k in &keys {
            prop_assert!(t.insert(k).is_ok());
        }
        let root = t.root;
        let slots = t.nodes.slot_count();

        if keys.contains(&target) {
            prop_assert_eq!(t.insert(target), Err(TreeError::AlreadyPresent));
        } else {
            prop_assert_eq!(t.remove(&target), Err(TreeError::NotFound));
        }
        prop_assert_eq!(t.root, root);
        prop_assert_eq!(t.nodes.slot_count(), slots);
        prop_assert_eq!(t.len(), keys.len());
        prop_assert!(t.validate().is_ok());
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys: Vec<u8> = (1..=7).collect();

    for_each_permutation(&keys, |perm| {
        let mut s: OrderedSet<u8> = OrderedSet::new();
        for k in perm {
            assert!(s.insert(k));
            s.validate().unwrap();
        }
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), keys);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys: Vec<u8> = (1..=7).collect();

    // Insert in a fixed order, then remove in all permutations.
    let base: OrderedSet<u8> = keys.iter().copied().collect();

    for_each_permutation(&keys, |perm| {
        let mut s = base.clone();
        for k in perm {
            assert!(s.remove(&k));
            s.validate().unwrap();
        }
        assert!(s.is_empty());
        assert!(s.as_tree().root.is_nil());
    });
}
