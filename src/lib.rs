//! This crate exposes an unbalanced Binary Search Tree (BST) with a
//! sentinel-based delete, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, delete, and query stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and sometimes has child `Node`s. The most important invariants of
//! this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    value less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    value strictly greater than its own value.
//!
//! > Note that ties route left, so duplicate values are permitted and
//! > always live in the left subtree of an equal-valued node.
//!
//! These invariants mean an in-order traversal yields the stored values
//! in non-decreasing order, and every operation runs in `O(height)`
//! (where `height` is the longest path from the root to a leaf). This
//! tree performs no rebalancing, so pathological insertion orders (for
//! example strictly increasing values) degrade `height` to `O(n)`.
//!
//! Deletion is the interesting part: instead of special-casing the
//! root, [`Tree::delete`] hangs the real root off a stack-local
//! sentinel parent holding the value type's maximum, so every target is
//! resolved uniformly through its parent's child slot. See the module
//! docs on [`tree`] for details.

#![deny(missing_docs)]

pub mod tree;

#[cfg(test)]
mod test;

pub use tree::Tree;
