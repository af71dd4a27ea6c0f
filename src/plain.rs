//! A plain (unbalanced) BST map. Every operation is a recursive descent with
//! no rebalancing, so the shape of the tree (and therefore its performance)
//! depends entirely on the order in which keys arrive. Keys inserted in
//! sorted order degrade it to a linked list; see [`redblack`](crate::redblack)
//! for the self-balancing variant with the same interface.
//!
//! # Examples
//!
//! ```
//! use ordmap::plain::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Some(&3));
//!
//! // Deleting a node returns its value.
//! let deleted_value = tree.delete(&1);
//!
//! assert_eq!(deleted_value, Some(3));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A link to a subtree. `None` marks the empty subtree below a leaf.
type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

/// An ordered map backed by an unbalanced Binary Search Tree. This can be
/// used for inserting, finding, and deleting keys and values, and for
/// iterating over the stored entries in ascending key order.
#[derive(Clone)]
pub struct Tree<K, V> {
    root: Link<K, V>,
    size: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    /// tree.insert(2, 3);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry from the tree.
    ///
    /// The nodes are torn down with an explicit stack: an ascending-order
    /// fill produces a linked-list shape, and dropping that node by node
    /// recursively would use one call frame per entry.
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Inserts the given value into the tree stored at the given key.
    /// Inserting a new value for an existing key overwrites its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.find(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        if Self::insert_node(&mut self.root, key, value) {
            self.size += 1;
        }
    }

    /// Recursive helper for [`Tree::insert`]. Returns whether a new node was
    /// created (as opposed to an existing value being overwritten).
    fn insert_node(link: &mut Link<K, V>, key: K, value: V) -> bool
    where
        K: Ord,
    {
        match link {
            None => {
                *link = Some(Node::new_boxed(key, value));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_node(&mut node.left, key, value),
                Ordering::Equal => {
                    node.value = value;
                    false
                }
                Ordering::Greater => Self::insert_node(&mut node.right, key, value),
            },
        }
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.root.as_ref().and_then(|n| n.find(key))
    }

    /// Returns `true` if the tree holds an entry for the given key. Unlike
    /// [`Tree::find`], this never touches the stored value, so "the key is
    /// present" and "the value is interesting" stay separate questions.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert!(tree.contains_key(&1));
    /// assert!(!tree.contains_key(&42));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root.as_ref().map_or(false, |n| n.contains_key(key))
    }

    /// Deletes the node containing the given key from the tree and returns
    /// its value. If the tree does not contain a node with the key, nothing
    /// happens.
    ///
    /// A node with two children is replaced by its in-order successor, the
    /// smallest node of its right subtree (Hibbard deletion).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    /// let inserted_value = tree.delete(&1);
    ///
    /// assert_eq!(inserted_value, Some(2));
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let (root, value) = Self::delete_node(self.root.take(), key);
        self.root = root;
        if value.is_some() {
            self.size -= 1;
        }
        value
    }

    /// Recursive helper for [`Tree::delete`]. Returns the new subtree root
    /// and the deleted value, if the key was found.
    fn delete_node(link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>)
    where
        K: Ord,
    {
        let mut node = match link {
            None => return (None, None),
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, value) = Self::delete_node(node.left.take(), key);
                node.left = left;
                (Some(node), value)
            }
            Ordering::Greater => {
                let (right, value) = Self::delete_node(node.right.take(), key);
                node.right = right;
                (Some(node), value)
            }
            Ordering::Equal => {
                let Node { value, left, right, .. } = *node;
                let replacement = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    (Some(left), Some(right)) => {
                        let (right, mut successor) = Self::take_min(right);
                        successor.left = Some(left);
                        successor.right = right;
                        Some(successor)
                    }
                };
                (replacement, Some(value))
            }
        }
    }

    /// Detaches the smallest node of the given subtree. Returns the remaining
    /// subtree and the detached node; the node's own right child (it cannot
    /// have a left one) stays behind in the subtree.
    fn take_min(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        match node.left.take() {
            None => {
                let right = node.right.take();
                (right, node)
            }
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(node), min)
            }
        }
    }

    /// Returns a lazy iterator over the tree's entries in ascending key
    /// order. The iterator borrows the tree; mutating the tree requires
    /// dropping it first, and a fresh call restarts from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, 'b');
    /// tree.insert(1, 'a');
    ///
    /// let entries: Vec<(&i32, &char)> = tree.iter().collect();
    /// assert_eq!(entries, [(&1, &'a'), (&2, &'b')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root)
    }

    /// Returns a lazy iterator over the tree's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let keys: Vec<&i32> = tree.keys().collect();
    /// assert_eq!(keys, [&3, &5, &8]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }

    fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_ref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_ref().and_then(|n| n.find(key)),
        }
    }

    fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_ref().map_or(false, |n| n.contains_key(key)),
            Ordering::Equal => true,
            Ordering::Greater => self.right.as_ref().map_or(false, |n| n.contains_key(key)),
        }
    }
}

/// A lazy in-order iterator over a tree's entries, created by [`Tree::iter`].
///
/// The stack holds every node whose entry has not been yielded yet but whose
/// left subtree has been fully visited or scheduled.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: &'a Link<K, V>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

/// A lazy ascending iterator over a tree's keys, created by [`Tree::keys`].
pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }
}

#[cfg(test)]
impl<K: Ord, V> Tree<K, V> {
    /// Walks the whole tree and asserts the BST ordering and the size
    /// counter.
    fn assert_invariants(&self) {
        let mut count = 0;
        let mut previous: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(previous) = previous {
                assert!(previous < key, "in-order traversal must ascend strictly");
            }
            previous = Some(key);
            count += 1;
        }
        assert_eq!(count, self.size, "len must match the number of reachable nodes");
    }
}
