//! Links a few nodes together, wraps them in a list and walks it both ways.
//!
//! Run with `cargo run --example linked_list`; set `RUST_LOG=info` to see the debug-flagged
//! node announce itself.

use structures::linked_list::{LinkedList, LinkedListNode, NodeOptions};
use tracing_subscriber::EnvFilter;

fn main() -> structures::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Initializing node");
    let mut head = LinkedListNode::new(1)?;

    println!("Initializing another node");
    LinkedListNode::with_options(NodeOptions::new(2).debug(true).parent(&mut head))?;

    println!("List length: {}", head.length());

    println!("Creating LinkedList");
    let mut list = LinkedList::from_head(head);
    println!("LinkedList length: {}", list.len());

    println!("Appending a list node");
    list.append(LinkedListNode::new(3)?)?;
    println!("LinkedList length: {}", list.len());

    println!("Testing forEach");
    list.for_each(LinkedListNode::print);

    println!("Testing forEachReverse");
    list.for_each_reverse(LinkedListNode::print);
    Ok(())
}
