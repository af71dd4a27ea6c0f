//! This crate exposes ordered key/value maps backed by Binary Search Trees
//! (BSTs), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! find, and delete stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a key, the value associated
//! with that key, and up to two child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`), and an in-order
//! traversal visits the keys in ascending order. The catch is that nothing
//! in the invariants above limits the height: keys inserted in sorted order
//! produce a tree with one node per level.
//!
//! ## Red-black balancing
//!
//! The [`redblack`] module keeps the height logarithmic by coloring the link
//! into each node red or black and maintaining, after every mutation:
//!
//! 1. A red link may only point to a left child.
//! 2. No red node has a red left child.
//! 3. Every path from the root to an empty link passes through the same
//!    number of black nodes.
//! 4. The root is black.
//!
//! Local rotations and color flips restore these on the way back up from
//! each change, bounding the height of a tree with `n` nodes by
//! `2 * log2(n + 1)`.
//!
//! The [`plain`] module is the unbalanced baseline with the same interface.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod plain;
pub mod redblack;

#[cfg(test)]
mod test;
