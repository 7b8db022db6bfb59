//! Builds a small tree out of reused subtrees and prints it.
//!
//! Run with `cargo run --example binary_tree`; set `RUST_LOG=debug` to watch every attach.

use structures::binary_tree::BinaryTreeNode;
use tracing_subscriber::EnvFilter;

fn main() -> structures::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = BinaryTreeNode::new(9)?;
    let b = a.set_left(&*BinaryTreeNode::new(4)?)?;

    let c = BinaryTreeNode::new(5)?;
    let d = c.set_right(&b)?;

    let e = BinaryTreeNode::new(6)?;
    let f = e.set_left(&*BinaryTreeNode::new(5)?)?;
    let g = f.set_right(&*BinaryTreeNode::new(11)?)?;

    let h = BinaryTreeNode::new(7)?;
    let i = h.set_left(&*BinaryTreeNode::new(2)?)?;
    let j = i.set_right(&g)?;

    let k = BinaryTreeNode::new(2)?;
    let l = k.set_left(&j)?;
    let root = l.set_right(&d)?;

    // Now we can print our tree!
    root.print();
    Ok(())
}
