//! A singly linked list of `i32` payloads.
//!
//! Nodes can be built on their own, chained together by hand with [`NodeOptions::parent`], and
//! finally handed to a [`LinkedList`] which remembers its length and tail so appending is
//! `O(1)`.
//!
//! # Examples
//!
//! ```
//! use structures::linked_list::{LinkedList, LinkedListNode, NodeOptions};
//!
//! let mut head = LinkedListNode::new(1)?;
//!
//! // Creating a node with a parent links it in right away.
//! LinkedListNode::with_options(NodeOptions::new(2).parent(&mut head))?;
//! assert_eq!(head.length(), 2);
//!
//! let mut list = LinkedList::from_head(head);
//! assert_eq!(list.append(LinkedListNode::new(3)?)?, 3);
//!
//! let mut backwards = Vec::new();
//! list.for_each_reverse(|node| backwards.push(node.value()));
//! assert_eq!(backwards, [3, 2, 1]);
//! # Ok::<(), structures::Error>(())
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use tracing::{debug, info, instrument, trace};

use crate::error::{Error, Result};
use crate::util::try_box;

/// Name reported when a node can't be allocated.
const STRUCTURE: &str = "LinkedListNode";

/// A node holding an `i32` and owning the rest of the chain after it.
pub struct LinkedListNode {
    value: i32,
    next: Option<Box<LinkedListNode>>,
}

impl LinkedListNode {
    /// Allocates a new node with no successor.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the node can't be allocated.
    pub fn new(value: i32) -> Result<Box<Self>> {
        try_box(Self { value, next: None }, STRUCTURE)
    }

    /// Allocates a new node configured by `options`.
    ///
    /// With [`NodeOptions::debug`] set, an `info` event announces the new node. With a
    /// [`NodeOptions::parent`], the new node is linked in as the parent's successor,
    /// **replacing and dropping** whatever used to follow the parent. The node is then owned by
    /// the parent and handed back as [`CreatedNode::Linked`].
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the node can't be allocated. The parent is left untouched.
    #[instrument(level = "debug", skip(options), fields(value = options.value))]
    pub fn with_options(options: NodeOptions<'_>) -> Result<CreatedNode<'_>> {
        let NodeOptions {
            value,
            debug,
            parent,
        } = options;

        let node = Self::new(value)?;
        if debug {
            info!("Creation successful: LinkedListNode<{}>", value);
        }

        Ok(match parent {
            Some(parent) => CreatedNode::Linked(parent.link(node)),
            None => CreatedNode::Detached(node),
        })
    }

    /// Makes `node` this node's successor and returns it.
    fn link(&mut self, node: Box<Self>) -> &mut Self {
        if let Some(displaced) = self.next.take() {
            debug!(
                parent = self.value,
                displaced = displaced.value,
                "Dropping displaced successor"
            );
        }
        trace!(parent = self.value, child = node.value, "Linked node");
        self.next.insert(node)
    }

    /// The payload stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The node after this one, if there is one.
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// How many nodes there are from this one to the end of its chain, inclusive.
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over this node and every node after it.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }

    /// Writes the node's [`Display`](fmt::Display) form, followed by a newline, to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

/// Renders the payload and the address of the successor: `Node { data: 1, next: 0x5581... }`,
/// or `Node { data: 1, next: NULL }` at the end of a chain.
impl fmt::Display for LinkedListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.next() {
            Some(next) => write!(f, "Node {{ data: {}, next: {:p} }}", self.value, next),
            None => write!(f, "Node {{ data: {}, next: NULL }}", self.value),
        }
    }
}

impl fmt::Debug for LinkedListNode {
    // Shallow on purpose: deriving would recurse once per node of the chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedListNode")
            .field("value", &self.value)
            .field("next", &self.next().map(Self::value))
            .finish()
    }
}

impl Drop for LinkedListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Construction options for [`LinkedListNode::with_options`].
///
/// # Examples
///
/// ```
/// use structures::linked_list::{CreatedNode, LinkedListNode, NodeOptions};
///
/// let created = LinkedListNode::with_options(NodeOptions::new(7).debug(true))?;
/// assert!(matches!(created, CreatedNode::Detached(_)));
/// assert_eq!(created.value(), 7);
/// # Ok::<(), structures::Error>(())
/// ```
#[derive(Debug)]
pub struct NodeOptions<'a> {
    value: i32,
    debug: bool,
    parent: Option<&'a mut LinkedListNode>,
}

impl<'a> NodeOptions<'a> {
    /// Options for a node holding `value`, without debug output or a parent.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            debug: false,
            parent: None,
        }
    }

    /// Whether to announce the node's creation.
    pub fn debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// Link the new node in right after `parent`.
    pub fn parent(self, parent: &'a mut LinkedListNode) -> Self {
        Self {
            parent: Some(parent),
            ..self
        }
    }
}

/// A node freshly built by [`LinkedListNode::with_options`]. Either way it dereferences to the
/// node itself.
#[derive(Debug)]
pub enum CreatedNode<'a> {
    /// No parent was given so the caller owns the node.
    Detached(Box<LinkedListNode>),
    /// The node was linked in after the given parent, which owns it now.
    Linked(&'a mut LinkedListNode),
}

impl CreatedNode<'_> {
    /// The owned node, unless it was linked into a parent.
    pub fn into_detached(self) -> Option<Box<LinkedListNode>> {
        match self {
            Self::Detached(node) => Some(node),
            Self::Linked(_) => None,
        }
    }
}

impl Deref for CreatedNode<'_> {
    type Target = LinkedListNode;

    fn deref(&self) -> &LinkedListNode {
        match self {
            Self::Detached(node) => node,
            Self::Linked(node) => node,
        }
    }
}

impl DerefMut for CreatedNode<'_> {
    fn deref_mut(&mut self) -> &mut LinkedListNode {
        match self {
            Self::Detached(node) => node,
            Self::Linked(node) => node,
        }
    }
}

/// A chain of [`LinkedListNode`]s that keeps track of its length and last node.
pub struct LinkedList {
    length: usize,
    // The head is leaked out of its `Box` while the list owns it, so moving the list never
    // asserts unique access to the chain and `tail` stays valid. `into_head` and `Drop` turn it
    // back into a `Box`.
    head: Option<NonNull<LinkedListNode>>,
    // Points into the chain starting at `head`. Every pointer into the chain is derived from
    // `head`, and nodes are only handed out by shared reference.
    tail: Option<NonNull<LinkedListNode>>,
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        drop(self.take_head());
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(LinkedListNode::value))
            .finish()
    }
}

impl LinkedList {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            length: 0,
            head: None,
            tail: None,
        }
    }

    /// Wraps an existing chain, walking it once to find its length and tail.
    #[instrument(level = "debug", skip(head), fields(head = head.value))]
    pub fn from_head(head: Box<LinkedListNode>) -> Self {
        let length = head.length();
        let head = NonNull::from(Box::leak(head));
        debug!(length, "Wrapped chain");
        Self {
            length,
            head: Some(head),
            tail: Some(last_node(head)),
        }
    }

    /// Unwraps the list, giving back its chain.
    pub fn into_head(mut self) -> Option<Box<LinkedListNode>> {
        self.take_head()
    }

    /// Hands the chain back as a `Box`, leaving the list empty.
    fn take_head(&mut self) -> Option<Box<LinkedListNode>> {
        self.tail = None;
        self.length = 0;
        // SAFETY: `head` came from `Box::leak` in `from_head` or `append` and is only turned back
        // into a `Box` here, after which the list no longer points at it.
        self.head
            .take()
            .map(|head| unsafe { Box::from_raw(head.as_ptr()) })
    }

    /// Links `node` in after the current tail and returns the new length. On an empty list the
    /// node becomes the head.
    ///
    /// # Errors
    ///
    /// [`Error::Precondition`] if `node` already has a successor, since the list could no longer
    /// tell its length or tail without walking the chain. The list is left unchanged.
    pub fn append(&mut self, node: Box<LinkedListNode>) -> Result<usize> {
        if node.next.is_some() {
            debug!(value = node.value, "Refusing to append a node with a successor");
            return Err(Error::Precondition("appended node must not have a successor"));
        }

        let value = node.value;
        self.tail = Some(match self.tail {
            // SAFETY: `tail` was derived from `head` and points at the last node of the chain,
            // which the list owns. `&mut self` guarantees nobody else holds a reference into it.
            Some(mut tail) => NonNull::from(&mut **unsafe { tail.as_mut() }.next.insert(node)),
            None => *self.head.insert(NonNull::from(Box::leak(node))),
        });
        self.length += 1;

        trace!(value, length = self.length, "Appended node");
        Ok(self.length)
    }

    /// The number of nodes in the list.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The first node, if there is one.
    pub fn head(&self) -> Option<&LinkedListNode> {
        // SAFETY: the list owns the chain at `head`, and `&self` keeps it alive and unmodified
        // for the returned lifetime.
        self.head.map(|head| unsafe { head.as_ref() })
    }

    /// The last node, if there is one.
    pub fn tail(&self) -> Option<&LinkedListNode> {
        // SAFETY: `tail` points into the chain owned through `head` (see `append`), and `&self`
        // keeps that chain alive and unmodified for the returned lifetime.
        self.tail.map(|tail| unsafe { tail.as_ref() })
    }

    /// Iterates over the nodes from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head() }
    }

    /// Calls `visitor` on every node, head to tail.
    pub fn for_each(&self, visitor: impl FnMut(&LinkedListNode)) {
        self.iter().for_each(visitor);
    }

    /// Calls `visitor` on every node, tail to head.
    pub fn for_each_reverse(&self, visitor: impl FnMut(&LinkedListNode)) {
        let mut nodes = Vec::with_capacity(self.length);
        nodes.extend(self.iter());
        nodes.into_iter().rev().for_each(visitor);
    }
}

/// Finds the node at the end of the chain starting at `head`.
fn last_node(mut head: NonNull<LinkedListNode>) -> NonNull<LinkedListNode> {
    // SAFETY: `head` was just leaked by `from_head`, so the chain behind it is owned by nobody
    // else while we walk it.
    let mut cursor = unsafe { head.as_mut() };
    loop {
        match cursor.next {
            Some(ref mut next) => cursor = &mut **next,
            None => return NonNull::from(cursor),
        }
    }
}

/// Iterator over a chain of nodes, created by [`LinkedList::iter`] or [`LinkedListNode::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a LinkedListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a LinkedListNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}
