use ordmap::redblack::Tree;

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], tree: &mut Tree<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                tree.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                assert_eq!(tree.delete(k), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len() && map.keys().all(|key| tree.find(key) == map.get(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains_key(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == None && !tree.contains_key(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let inserted: HashSet<_> = xs.iter().copied().collect();
    let deleted: HashSet<_> = deletes.iter().copied().collect();

    deletes.iter().all(|x| tree.find(x).is_none())
        && inserted.difference(&deleted).all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn iterates_like_a_btreemap(entries: Vec<(i8, i8)>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();
    for (k, v) in &entries {
        tree.insert(*k, *v);
        map.insert(*k, *v);
    }

    tree.iter().eq(map.iter()) && tree.keys().eq(map.keys())
}

#[quickcheck]
fn agrees_with_the_plain_tree(ops: Vec<Op<i8, i8>>) -> bool {
    let mut balanced = Tree::new();
    let mut plain = ordmap::plain::Tree::new();

    for op in &ops {
        match op {
            Op::Insert(k, v) => {
                balanced.insert(*k, *v);
                plain.insert(*k, *v);
            }
            Op::Remove(k) => {
                assert_eq!(balanced.delete(k), plain.delete(k));
            }
        }
    }

    balanced.len() == plain.len() && balanced.iter().eq(plain.iter())
}
