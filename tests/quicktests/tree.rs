use bst::Tree;

use std::collections::{HashMap, HashSet};

use crate::{init_logging, Op};

fn inorder<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    tree.inorder_traverse(|v| values.push(v.clone()));
    values
}

/// Applies a set of operations to a tree and a map counting copies of each value.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same multiset of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, counts: &mut HashMap<T, usize>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                *counts.entry(v.clone()).or_default() += 1;
            }
            Op::Remove(v) => {
                let removed = bst.remove(v).is_some();
                match counts.get_mut(v) {
                    Some(count) => {
                        assert!(removed);
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(v);
                        }
                    }
                    None => assert!(!removed),
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut counts = HashMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    tree.size() == counts.values().sum::<usize>() && counts.keys().all(|v| tree.search(v))
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    inorder(&tree) == sorted
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // Remove every copy of the value.
        while tree.remove(delete).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree.size() == still_present.len()
}

#[quickcheck]
fn removing_missing_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let size = tree.size();
    let mut levels = Vec::new();
    tree.levelorder_traverse(|v| levels.push(*v));

    let removed = tree.remove(&missing);

    let mut levels_after = Vec::new();
    tree.levelorder_traverse(|v| levels_after.push(*v));
    removed.is_none() && tree.size() == size && levels == levels_after
}

#[quickcheck]
fn min_and_max_bracket_inorder(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted = inorder(&tree);

    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => tree.min() == Ok(first) && tree.max() == Ok(last),
        _ => tree.min().is_err() && tree.max().is_err(),
    }
}

#[quickcheck]
fn successor_undoes_predecessor(xs: HashSet<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let Ok(min) = tree.min() else {
        return true;
    };

    // Everything but the minimum has a real predecessor, whose successor leads back.
    xs.iter()
        .filter(|x| *x != min)
        .all(|x| tree.predecessor_of(x).and_then(|p| tree.successor_of(p)) == Ok(x))
}

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, extra: i8) -> bool {
    init_logging();
    let original: Tree<_> = xs.iter().copied().collect();
    let before = inorder(&original);

    let mut copy = original.clone();
    copy.insert(extra);
    if let Some(first) = xs.first() {
        copy.remove(first);
    }

    inorder(&original) == before && original.size() == xs.len()
}
