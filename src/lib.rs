//! This crate exposes two classic data structures, a binary tree and a singly linked list,
//! mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is built from `Node`s, each storing a value and owning at most two child
//! `Node`s, a "left" and a "right" one. Nothing here orders the values: it is a plain binary
//! tree, not a search tree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`binary_tree::BinaryTreeNode`] attaches children by *copying*. `set_left` and `set_right`
//! never change the nodes they are called with. They return a fresh parent that owns deep
//! copies of both operands, so a subtree can be reused anywhere without two parents ever
//! sharing it. The tree can be walked pre-order (node, left, right), in-order (left, node,
//! right) or post-order (left, right, node).
//!
//! ## Linked List
//!
//! A singly linked list is a chain of `Node`s where each one owns the `Node` after it.
//! [`linked_list::LinkedList`] wraps such a chain and remembers its length and its last node
//! (the "tail") so appending doesn't have to walk the whole chain.
//!
//! ## Errors
//!
//! Allocating a node can fail. Rather than aborting, constructors report this as
//! [`Error::Allocation`] and emit an `error` event through `tracing`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;
pub mod error;
pub mod linked_list;
mod util;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
