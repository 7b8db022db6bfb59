#[macro_use]
extern crate quickcheck_macros;

mod linked_list;

use quickcheck::{Arbitrary, Gen};

use structures::binary_tree::BinaryTreeNode;

/// A list of values to lay out as a binary tree, filling it level by level.
#[derive(Clone, Debug)]
pub struct Values(pub Vec<i32>);

impl Arbitrary for Values {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut values = Vec::<i32>::arbitrary(g);
        if values.is_empty() {
            values.push(i32::arbitrary(g));
        }
        Self(values)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|values| !values.is_empty())
                .map(Self),
        )
    }
}

impl Values {
    /// Builds a complete tree: the children of `values[i]` are `values[2i + 1]` and
    /// `values[2i + 2]`.
    pub fn build(&self) -> Box<BinaryTreeNode> {
        self.build_from(0)
    }

    fn build_from(&self, index: usize) -> Box<BinaryTreeNode> {
        let child = |index: usize| (index < self.0.len()).then(|| self.build_from(index));
        BinaryTreeNode::with_children(self.0[index], child(2 * index + 1), child(2 * index + 2))
            .unwrap()
    }
}

/// An enum for the various kinds of "things" to do to
/// a linked list in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Append a new node holding the value to the list
    Append(i32),
    /// Link a new node holding the value after the head, before the list exists
    Link(i32),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Append(i32::arbitrary(g)),
            1 => Op::Link(i32::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
