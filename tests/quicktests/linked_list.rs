use structures::linked_list::{CreatedNode, LinkedList, LinkedListNode, NodeOptions};

use crate::Op;

/// Builds a list two ways at once: `Link`s grow the chain hanging off the head before it is
/// wrapped, `Append`s go through the list afterwards. Returns the list and the values it should
/// hold, in order.
fn build(ops: &[Op]) -> (LinkedList, Vec<i32>) {
    let mut head = LinkedListNode::new(0).unwrap();
    let mut linked = vec![0];
    let mut appended = Vec::new();

    {
        let mut parent: &mut LinkedListNode = &mut head;
        for op in ops {
            if let Op::Link(value) = *op {
                let created =
                    LinkedListNode::with_options(NodeOptions::new(value).parent(parent)).unwrap();
                parent = match created {
                    CreatedNode::Linked(node) => node,
                    CreatedNode::Detached(_) => unreachable!(),
                };
                linked.push(value);
            }
        }
    }

    let mut list = LinkedList::from_head(head);
    for op in ops {
        if let Op::Append(value) = *op {
            list.append(LinkedListNode::new(value).unwrap()).unwrap();
            appended.push(value);
        }
    }

    linked.extend(appended);
    (list, linked)
}

#[quickcheck]
fn for_each_matches_model(ops: Vec<Op>) -> bool {
    let (list, expected) = build(&ops);
    let mut visited = Vec::new();
    list.for_each(|node| visited.push(node.value()));

    visited == expected
}

#[quickcheck]
fn for_each_reverse_matches_model(ops: Vec<Op>) -> bool {
    let (list, mut expected) = build(&ops);
    let mut visited = Vec::new();
    list.for_each_reverse(|node| visited.push(node.value()));
    expected.reverse();

    visited == expected
}

#[quickcheck]
fn cached_length_and_tail(ops: Vec<Op>) -> bool {
    let (list, expected) = build(&ops);

    list.len() == expected.len()
        && list.head().map(LinkedListNode::length) == Some(expected.len())
        && list.tail().map(LinkedListNode::value) == expected.last().copied()
        && list.tail().map_or(false, |tail| tail.next().is_none())
}
