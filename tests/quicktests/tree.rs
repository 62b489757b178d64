use bst::Tree;

use std::collections::BTreeSet;

use quickcheck::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.validate().is_ok() && tree.iter().eq(set.iter())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        // Duplicates were only inserted once so dropping every copy is enough.
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.validate().is_ok()
    }

    fn duplicate_inserts_are_idempotent(xs: Vec<i8>) -> bool {
        let once: Tree<_> = xs.iter().copied().collect();
        let twice: Tree<_> = xs.iter().chain(xs.iter()).copied().collect();

        once == twice && once.len() == twice.len()
    }

    fn insert_then_delete_restores_keys(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        if tree.contains(&key) {
            return true;
        }
        let before: Vec<i8> = tree.iter().copied().collect();

        tree.insert(key);
        tree.delete(&key);

        tree.iter().copied().eq(before)
    }

    fn len_and_bounds_match_model(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let set: BTreeSet<_> = xs.into_iter().collect();

        tree.len() == set.len()
            && tree.min() == set.iter().next()
            && tree.max() == set.iter().next_back()
            && tree.is_empty() == set.is_empty()
    }
}
