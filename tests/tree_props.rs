//! Property tests for the ordered set

use castgraph::OrderedSet;
use proptest::prelude::*;

/// ⌈1.44 · log2(n + 2)⌉
fn avl_height_bound(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).ceil() as usize
}

proptest! {
    #[test]
    fn balanced_after_every_insert(keys in proptest::collection::vec(-50i32..50, 1..200)) {
        let mut set = OrderedSet::new();
        for &key in &keys {
            set.insert(key).expect("unbounded insert succeeds");
            prop_assert!(set.is_balanced(), "unbalanced after inserting {}", key);
        }
    }

    #[test]
    fn height_within_avl_bound(keys in proptest::collection::vec(any::<u32>(), 1..500)) {
        let set: OrderedSet<u32> = keys.iter().copied().collect();
        let height = set.height().expect("non-empty set has a height");
        prop_assert!(
            height <= avl_height_bound(keys.len()),
            "height {} exceeds bound {} for n = {}",
            height,
            avl_height_bound(keys.len()),
            keys.len()
        );
    }

    #[test]
    fn enumeration_preserves_multiplicity(keys in proptest::collection::vec(0u32..20, 0..150)) {
        let set: OrderedSet<u32> = keys.iter().copied().collect();

        let mut expected = keys.clone();
        expected.sort_unstable();
        let inorder: Vec<u32> = set.iter().copied().collect();
        prop_assert_eq!(&inorder, &expected);

        let mut preorder: Vec<u32> = set.preorder().copied().collect();
        preorder.sort_unstable();
        prop_assert_eq!(preorder, expected);
        prop_assert_eq!(set.len(), keys.len());
    }

    #[test]
    fn removals_keep_balance(
        keys in proptest::collection::vec(0u32..40, 1..120),
        doomed in proptest::collection::vec(0u32..40, 0..60),
    ) {
        let mut set: OrderedSet<u32> = keys.iter().copied().collect();
        let mut expected = keys.clone();

        for key in &doomed {
            let present = expected.iter().position(|k| k == key);
            prop_assert_eq!(set.remove(key), present.is_some());
            if let Some(pos) = present {
                expected.swap_remove(pos);
            }
            prop_assert!(set.is_balanced());
        }

        expected.sort_unstable();
        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }
}
