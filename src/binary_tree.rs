//! A binary tree of `i32` payloads whose attach operations copy instead of move. Attaching a
//! child never modifies either operand: it returns a brand new parent that owns deep copies of
//! both, so the same subtree can be reused in as many places as the caller likes.
//!
//! Every operation whose cost grows with the depth of the tree (cloning, equality, height,
//! traversal and dropping) walks the tree with an explicit stack, so deep trees don't overflow
//! the call stack.
//!
//! # Examples
//!
//! ```
//! use structures::binary_tree::{BinaryTreeNode, Traversal};
//!
//! let root = BinaryTreeNode::new(1)?;
//! let left = BinaryTreeNode::new(2)?;
//!
//! // `set_left` hands back a new tree...
//! let tree = root.set_left(&left)?;
//! assert_eq!(tree.left().map(BinaryTreeNode::value), Some(2));
//!
//! // ...and leaves the operands alone.
//! assert!(root.left().is_none());
//!
//! let mut visited = Vec::new();
//! tree.traverse(Traversal::PreOrder, |node| visited.push(node.value()));
//! assert_eq!(visited, [1, 2]);
//! # Ok::<(), structures::Error>(())
//! ```

use std::{fmt, ptr};

use tracing::{debug, instrument};

use crate::error::Result;
use crate::util::try_box;

/// Name reported when a node can't be allocated.
const STRUCTURE: &str = "BinaryTreeNode";

/// Spaces added per level of nesting when printing.
const INDENT: usize = 4;

/// The order in which a traversal visits a node relative to its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

/// A node holding an `i32` and owning up to two children.
///
/// Two nodes compare equal with `==` when they hold the same value and have exactly the same
/// shape. See [`BinaryTreeNode::equals`] for the looser comparison that ignores missing
/// children.
pub struct BinaryTreeNode {
    value: i32,
    left: Option<Box<BinaryTreeNode>>,
    right: Option<Box<BinaryTreeNode>>,
}

impl BinaryTreeNode {
    /// Allocates a new node with no children.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if the node can't be allocated.
    pub fn new(value: i32) -> Result<Box<Self>> {
        Self::with_children(value, None, None)
    }

    /// Allocates a new node that takes ownership of the given children.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::binary_tree::BinaryTreeNode;
    ///
    /// let tree = BinaryTreeNode::with_children(
    ///     1,
    ///     Some(BinaryTreeNode::new(2)?),
    ///     None,
    /// )?;
    ///
    /// assert_eq!(tree.height(), 2);
    /// # Ok::<(), structures::Error>(())
    /// ```
    pub fn with_children(
        value: i32,
        left: Option<Box<Self>>,
        right: Option<Box<Self>>,
    ) -> Result<Box<Self>> {
        try_box(Self { value, left, right }, STRUCTURE)
    }

    /// The payload stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The left child, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Deep copies this node and all of its descendants. The copy shares nothing with the
    /// original.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if any node of the copy can't be
    /// allocated. Nodes copied so far are released.
    pub fn try_clone(&self) -> Result<Box<Self>> {
        // A post-order walk sees both (copied) subtrees of a node right before the node itself,
        // so they are sitting on top of `built` with the right subtree uppermost. The root is
        // visited last and built on its own.
        let mut built: Vec<Box<Self>> = Vec::new();
        for node in self.postorder().filter(|node| !ptr::eq(*node, self)) {
            let (left, right) = node.copied_children(&mut built);
            built.push(Self::with_children(node.value, left, right)?);
        }

        let (left, right) = self.copied_children(&mut built);
        Self::with_children(self.value, left, right)
    }

    /// Takes the copies of this node's children off the top of `built`.
    fn copied_children(
        &self,
        built: &mut Vec<Box<Self>>,
    ) -> (Option<Box<Self>>, Option<Box<Self>>) {
        let right = self.right.as_ref().and_then(|_| built.pop());
        let left = self.left.as_ref().and_then(|_| built.pop());
        (left, right)
    }

    /// Returns a new tree: a copy of this node whose left child is a copy of `child`. Neither
    /// `self` nor `child` is modified, and whatever `self` had on its left stays with `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::binary_tree::BinaryTreeNode;
    ///
    /// let parent = BinaryTreeNode::new(9)?;
    /// let child = BinaryTreeNode::new(4)?;
    ///
    /// let tree = parent.set_left(&child)?;
    /// let reused = tree.set_left(&tree)?;
    ///
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(reused.height(), 3);
    /// assert!(parent.is_leaf());
    /// # Ok::<(), structures::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if any node of the new tree can't be
    /// allocated.
    #[instrument(level = "debug", skip_all, fields(parent = self.value, child = child.value))]
    pub fn set_left(&self, child: &Self) -> Result<Box<Self>> {
        let right = self.right().map(Self::try_clone).transpose()?;
        let left = child.try_clone()?;
        debug!("Attached copy as left child");
        Self::with_children(self.value, Some(left), right)
    }

    /// Returns a new tree: a copy of this node whose right child is a copy of `child`. Neither
    /// `self` nor `child` is modified, and whatever `self` had on its right stays with `self`.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if any node of the new tree can't be
    /// allocated.
    #[instrument(level = "debug", skip_all, fields(parent = self.value, child = child.value))]
    pub fn set_right(&self, child: &Self) -> Result<Box<Self>> {
        let left = self.left().map(Self::try_clone).transpose()?;
        let right = child.try_clone()?;
        debug!("Attached copy as right child");
        Self::with_children(self.value, left, Some(right))
    }

    /// Loose value comparison. Payloads must match, but a side is only compared when *both*
    /// nodes have a child there: a child on one side facing a missing child on the other is
    /// ignored rather than treated as a difference.
    ///
    /// Use `==` for an exact structural comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::binary_tree::BinaryTreeNode;
    ///
    /// let lone = BinaryTreeNode::new(1)?;
    /// let with_left = lone.set_left(&*BinaryTreeNode::new(2)?)?;
    ///
    /// assert!(with_left.equals(&lone));
    /// assert_ne!(with_left, lone);
    /// # Ok::<(), structures::Error>(())
    /// ```
    pub fn equals(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            if let (Some(a_left), Some(b_left)) = (a.left(), b.left()) {
                pending.push((a_left, b_left));
            }
            if let (Some(a_right), Some(b_right)) = (a.right(), b.right()) {
                pending.push((a_right, b_right));
            }
        }

        true
    }

    /// How many levels the tree rooted at this node has. A node without children has a height
    /// of 1.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            pending.extend(node.children().map(|child| (child, depth + 1)));
        }

        tallest
    }

    /// Calls `visitor` on every node of the tree exactly once, in the given order.
    pub fn traverse(&self, order: Traversal, visitor: impl FnMut(&Self)) {
        self.iter(order).for_each(visitor);
    }

    /// A lazy iterator over every node of the tree in the given order. Calling this again
    /// starts a fresh walk.
    pub fn iter(&self, order: Traversal) -> Iter<'_> {
        Iter {
            order,
            stack: vec![Step::Expand(self)],
        }
    }

    /// Shorthand for `iter(Traversal::PreOrder)`.
    pub fn preorder(&self) -> Iter<'_> {
        self.iter(Traversal::PreOrder)
    }

    /// Shorthand for `iter(Traversal::InOrder)`.
    pub fn inorder(&self) -> Iter<'_> {
        self.iter(Traversal::InOrder)
    }

    /// Shorthand for `iter(Traversal::PostOrder)`.
    pub fn postorder(&self) -> Iter<'_> {
        self.iter(Traversal::PostOrder)
    }

    /// Writes the tree's [`Display`](fmt::Display) form, followed by a newline, to stdout.
    pub fn print(&self) {
        println!("{self}");
    }

    fn fmt_at_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let inner = INDENT * (depth + 1);
        f.write_str("BinaryTreeNode {\n")?;
        write!(f, "{:inner$}data: {}", "", self.value)?;
        for (label, child) in [("left", self.left()), ("right", self.right())] {
            write!(f, "\n{:inner$}{}: ", "", label)?;
            match child {
                Some(child) => child.fmt_at_depth(f, depth + 1)?,
                None => f.write_str("NULL")?,
            }
        }
        write!(f, "\n{:outer$}}}", "", outer = INDENT * depth)
    }
}

/// Exact structural equality: same values, same shape.
impl PartialEq for BinaryTreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            for sides in [(a.left(), b.left()), (a.right(), b.right())] {
                match sides {
                    (Some(a_child), Some(b_child)) => pending.push((a_child, b_child)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for BinaryTreeNode {}

/// Renders the tree as nested blocks, four spaces per level, with `NULL` for missing children:
///
/// ```text
/// BinaryTreeNode {
///     data: 1
///     left: NULL
///     right: BinaryTreeNode {
///         data: 3
///         left: NULL
///         right: NULL
///     }
/// }
/// ```
impl fmt::Display for BinaryTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at_depth(f, 0)
    }
}

/// Only shows the values of the direct children, so formatting never recurses.
impl fmt::Debug for BinaryTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeNode")
            .field("value", &self.value)
            .field("left", &self.left.as_ref().map(|left| left.value))
            .field("right", &self.right.as_ref().map(|right| right.value))
            .finish()
    }
}

impl Drop for BinaryTreeNode {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped so each drop only ever sees a leaf.
        let mut detached: Vec<Box<Self>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = detached.pop() {
            detached.extend(node.left.take());
            detached.extend(node.right.take());
        }
    }
}

#[derive(Clone)]
enum Step<'a> {
    /// Schedule this node's children (and the node itself) according to the traversal order.
    Expand(&'a BinaryTreeNode),
    /// Hand this node out next.
    Yield(&'a BinaryTreeNode),
}

/// Iterator over the nodes of a tree, created by [`BinaryTreeNode::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    order: Traversal,
    stack: Vec<Step<'a>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a BinaryTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            let node = match step {
                Step::Yield(node) => return Some(node),
                Step::Expand(node) => node,
            };

            // Pushed in the reverse of the order they should come back off the stack.
            let left = node.left().map(Step::Expand);
            let right = node.right().map(Step::Expand);
            match self.order {
                Traversal::PreOrder => {
                    self.stack.extend(right);
                    self.stack.extend(left);
                    return Some(node);
                }
                Traversal::InOrder => {
                    self.stack.extend(right);
                    self.stack.push(Step::Yield(node));
                    self.stack.extend(left);
                }
                Traversal::PostOrder => {
                    self.stack.push(Step::Yield(node));
                    self.stack.extend(right);
                    self.stack.extend(left);
                }
            }
        }

        None
    }
}
