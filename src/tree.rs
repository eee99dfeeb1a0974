//! An unbalanced BST storing values only, with deletion mediated through a
//! sentinel parent.
//!
//! Every delete works on the *parent* of the node being removed: the parent's
//! child slot is emptied (leaf), spliced (single child), or handed the
//! in-order predecessor (two children). To make the root deletable through
//! the same path, [`Tree::delete`] briefly hangs the real root off a
//! stack-local sentinel node holding `T::max_value()`. The sentinel is never
//! itself a deletion target, so whatever ends up in its left slot afterwards
//! is the new root.
//!
//! # Examples
//!
//! ```
//! use sentinel_bst::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! tree.insert(2);
//! tree.insert(7);
//! tree.insert(2); // duplicates are allowed and route left
//!
//! assert_eq!(tree.max(), Some(&7));
//! assert_eq!(tree.in_order(), vec![&2, &2, &7]);
//!
//! // Deleting removes exactly one occurrence.
//! tree.delete(&2);
//! assert_eq!(tree.in_order(), vec![&2, &7]);
//! ```

use std::fmt;

use num_traits::Bounded;
use tracing::debug;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree over an ordered value type. Values less than or
/// equal to a node live in its left subtree; strictly greater values live in
/// its right subtree. The tree is not self-balancing, so all operations are
/// `O(height)` with a worst case of `O(n)`.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given value into the tree. Equal values route left, so
    /// inserting a duplicate keeps both copies.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    /// tree.insert(9);
    ///
    /// assert_eq!(tree.in_order(), vec![&5, &5, &9]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => self.root = Some(Box::new(Node::new(value))),
        }
    }

    /// Deletes one occurrence of the given value from the tree. Deleting
    /// from an empty tree or deleting a value that is not present leaves the
    /// tree unchanged.
    ///
    /// The value type must expose its maximum representable value through
    /// [`Bounded`]: deletion parks the real root under a stack-local
    /// sentinel parent holding `T::max_value()`, so the root is removed
    /// through a parent's child slot like any other node.
    ///
    /// When duplicates are present, the occurrence removed is the first one
    /// found by the left-biased search. That choice falls out of the
    /// traversal order and is not a stable guarantee.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(9);
    ///
    /// tree.delete(&5); // the root, handled like any other node
    /// assert_eq!(tree.in_order(), vec![&3, &9]);
    ///
    /// tree.delete(&42); // absent, nothing happens
    /// assert_eq!(tree.in_order(), vec![&3, &9]);
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord + Bounded,
    {
        if self.root.is_none() {
            debug!("nothing to delete: the tree is empty");
            return;
        }

        // The real root hangs off the sentinel's left slot: every stored
        // value is <= T::max_value(), so the "ties go left" routing holds at
        // the sentinel and the sentinel itself can never match the target.
        let mut sentinel = Node {
            value: T::max_value(),
            left: self.root.take(),
            right: None,
        };
        sentinel.delete_under(value);

        // Deleting the last element legitimately empties this slot.
        self.root = sentinel.left.take();
    }

    /// Returns `true` if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    ///
    /// tree.delete(&1);
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the greatest value in the tree, or `None` if the tree is
    /// empty. Found by following right links from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(3);
    /// tree.insert(11);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.max(), Some(&11));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(|root| root.max_value())
    }

    /// Returns the stored values in in-order (non-decreasing) order. This is
    /// a diagnostic traversal, not a stable iteration API.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut values);
        }
        values
    }

    /// Writes a pre-order dump of the tree to standard output: each node's
    /// value followed by its immediate children (`none` for an absent
    /// child). Purely diagnostic; the format is not a stable contract.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        print!("{}", PreOrder(self));
    }
}

/// The child slot through which a parent reaches (and replaces) a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// Left child
    Left,
    /// Right child
    Right,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    fn child_mut(&mut self, direction: Direction) -> Option<&mut Self> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    fn child_slot(&mut self, direction: Direction) -> &mut Link<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        if value <= self.value {
            match self.left.as_deref_mut() {
                Some(left) => left.insert(value),
                None => self.left = Some(Box::new(Self::new(value))),
            }
        } else {
            match self.right.as_deref_mut() {
                Some(right) => right.insert(value),
                None => self.right = Some(Box::new(Self::new(value))),
            }
        }

        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(left.value <= self.value);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(right.value > self.value);
            }
        }
    }

    /// Deletes one occurrence of `value` from the subtree below `self`.
    /// `self` acts as the parent: the search inspects the child in the
    /// routing direction and, on a match, resolves the removal through that
    /// child slot. Running out of children means the value is absent and the
    /// delete is a no-op.
    fn delete_under(&mut self, value: &T)
    where
        T: Ord,
    {
        let direction = if *value <= self.value {
            Direction::Left
        } else {
            Direction::Right
        };

        let is_target = self
            .child(direction)
            .map_or(false, |child| child.value == *value);
        if is_target {
            self.splice_child(direction);
        } else if let Some(child) = self.child_mut(direction) {
            child.delete_under(value);
        }
    }

    /// Removes the child in the given slot, re-linking the slot so the BST
    /// invariant holds for whatever remains:
    ///
    /// - leaf child: the slot empties
    /// - single-child child: the grandchild splices up
    /// - two-children child: the in-order predecessor (the maximum of the
    ///   left subtree, which has no right child) is promoted into the slot
    ///   with the target's subtrees re-attached
    fn splice_child(&mut self, direction: Direction) {
        let mut target = self
            .child_slot(direction)
            .take()
            .expect("target was located under this slot");

        let replacement = match (target.left.take(), target.right.take()) {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(only),
            (Some(left), Some(right)) => {
                let (mut predecessor, remaining) = Self::detach_max(left);
                debug_assert!(predecessor.right.is_none());
                predecessor.left = remaining;
                predecessor.right = Some(right);
                Some(predecessor)
            }
        };

        *self.child_slot(direction) = replacement;
    }

    /// Removes the maximum-valued node from the subtree rooted at `node`,
    /// returning it together with what remains of the subtree. The returned
    /// node has no right child, by definition of "maximum".
    fn detach_max(mut node: Box<Self>) -> (Box<Self>, Link<T>) {
        match node.right.take() {
            None => {
                let remaining = node.left.take();
                (node, remaining)
            }
            Some(right) => {
                let (max, remaining) = Self::detach_max(right);
                node.right = remaining;
                (max, Some(node))
            }
        }
    }

    fn max_value(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.value
    }

    fn in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(left) = self.left.as_deref() {
            left.in_order(out);
        }
        out.push(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.in_order(out);
        }
    }

    fn write_pre_order(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result
    where
        T: fmt::Display,
    {
        if !first {
            writeln!(f)?;
        }
        writeln!(f, "Root -> {}", self.value)?;
        match self.left.as_deref() {
            Some(left) => writeln!(f, "Left -> {}", left.value)?,
            None => writeln!(f, "Left -> none")?,
        }
        match self.right.as_deref() {
            Some(right) => writeln!(f, "Right -> {}", right.value)?,
            None => writeln!(f, "Right -> none")?,
        }
        if let Some(left) = self.left.as_deref() {
            left.write_pre_order(f, false)?;
        }
        if let Some(right) = self.right.as_deref() {
            right.write_pre_order(f, false)?;
        }
        Ok(())
    }
}

/// Pre-order dump of a tree, one block per node.
struct PreOrder<'a, T>(&'a Tree<T>);

impl<T> fmt::Display for PreOrder<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.root.as_deref() {
            None => writeln!(f, "Empty tree."),
            Some(root) => root.write_pre_order(f, true),
        }
    }
}
