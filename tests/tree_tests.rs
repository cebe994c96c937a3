//! Tree builder behavior: ordering, lenient recovery, idempotence.
mod common;

use common::{container_block, ids, text_block};
use mason::{flatten_tree, organize_into_tree};

#[test]
fn roots_and_children_sort_by_position_order() {
    let tree = organize_into_tree(vec![
        text_block(3, None, 5),
        container_block(1, None, 0, None),
        text_block(4, Some(1), 2),
        text_block(2, Some(1), 1),
    ]);

    assert_eq!(ids(&tree), vec![1, 3]);
    assert_eq!(ids(&tree[0].children), vec![2, 4]);
}

#[test]
fn equal_position_orders_keep_input_order() {
    let tree = organize_into_tree(vec![
        text_block(11, None, 1),
        text_block(12, None, 1),
        text_block(13, None, 1),
    ]);
    assert_eq!(ids(&tree), vec![11, 12, 13]);
}

#[test]
fn dangling_parent_reference_becomes_root() {
    let tree = organize_into_tree(vec![text_block(1, None, 0), text_block(2, Some(999), 1)]);
    assert_eq!(ids(&tree), vec![1, 2]);
    assert!(tree[1].children.is_empty());
}

#[test]
fn pre_nested_input_is_flattened_and_rebuilt() {
    // A parent arrives with its child already nested AND the child appears
    // again at top level; rebuilding must produce the child exactly once.
    let mut parent = container_block(1, None, 0, None);
    parent.children = vec![text_block(2, Some(1), 0)];

    let tree = organize_into_tree(vec![parent, text_block(2, Some(1), 0)]);
    assert_eq!(ids(&tree), vec![1]);
    assert_eq!(ids(&tree[0].children), vec![2]);
    assert_eq!(flatten_tree(&tree).len(), 2);
}

#[test]
fn organize_is_idempotent() {
    let once = organize_into_tree(vec![
        container_block(1, None, 1, None),
        text_block(2, Some(1), 2),
        text_block(3, Some(1), 1),
        container_block(4, None, 0, None),
        text_block(5, Some(4), 0),
    ]);
    let twice = organize_into_tree(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn duplicate_ids_collapse_to_the_later_record() {
    let mut early = text_block(7, None, 0);
    early.position_order = 1;
    let mut late = text_block(7, None, 0);
    late.position_order = 9;

    let tree = organize_into_tree(vec![early, late]);
    assert_eq!(ids(&tree), vec![7]);
    assert_eq!(tree[0].position_order, 9);
}

#[test]
fn deep_chain_preserves_every_level() {
    let mut blocks = vec![container_block(0, None, 0, None)];
    for id in 1..=11 {
        blocks.push(container_block(id, Some(id - 1), 0, None));
    }
    let tree = organize_into_tree(blocks);

    let mut depth = 0;
    let mut node = &tree[0];
    while let Some(child) = node.children.first() {
        node = child;
        depth += 1;
    }
    assert_eq!(depth, 11);
}
