//! Rebuilds parent/child nesting from raw block records.
//!
//! Recovery is lenient by policy: unresolvable parent references become
//! roots and duplicate ids collapse last-write-wins. Structural problems
//! worth surfacing are the validator's job, not the builder's.
use crate::block::ContentBlock;
use mason_types::BlockId;
use std::collections::{HashMap, HashSet};

/// Converts an unordered or partially nested sequence of blocks into a
/// parent-linked tree, every sibling list sorted ascending by position
/// order (stable: equal positions keep their input order).
///
/// Pre-existing `children` are flattened and rebuilt from scratch, which
/// makes the operation idempotent up to ordering. A block whose parent id
/// is missing, unknown, or itself is promoted to a root. When two blocks
/// share an id, the later record's payload wins and a single node is
/// produced.
pub fn organize_into_tree(blocks: Vec<ContentBlock>) -> Vec<ContentBlock> {
    // Flatten any nesting already present in the input.
    let mut flat = Vec::new();
    for block in blocks {
        flatten_into(block, &mut flat);
    }

    // Index by id: first-seen order, last-seen payload.
    let mut order: Vec<BlockId> = Vec::new();
    let mut index: HashMap<BlockId, ContentBlock> = HashMap::new();
    for block in flat {
        if !index.contains_key(&block.id) {
            order.push(block.id);
        }
        index.insert(block.id, block);
    }

    // A parent link survives only if it points at a known, distinct block.
    let parent_of: HashMap<BlockId, Option<BlockId>> = order
        .iter()
        .map(|id| {
            let parent = index
                .get(id)
                .and_then(|block| block.parent_block_id)
                .filter(|parent| *parent != *id && index.contains_key(parent));
            (*id, parent)
        })
        .collect();

    let severed = sever_cycles(&order, &parent_of);

    // Group each block under its surviving parent.
    let mut roots: Vec<ContentBlock> = Vec::new();
    let mut pending: HashMap<BlockId, Vec<ContentBlock>> = HashMap::new();
    for id in order {
        let Some(block) = index.remove(&id) else {
            continue;
        };
        match parent_of.get(&id).copied().flatten() {
            Some(parent) if !severed.contains(&id) => {
                pending.entry(parent).or_default().push(block)
            }
            _ => roots.push(block),
        }
    }

    for root in &mut roots {
        attach_children(root, &mut pending);
    }
    roots.sort_by_key(|block| block.position_order);
    roots
}

/// Walks every parent chain and cuts the link of one member of each cycle,
/// turning the cycle into an ordinary rooted chain instead of dropping its
/// blocks from the output.
fn sever_cycles(
    order: &[BlockId],
    parent_of: &HashMap<BlockId, Option<BlockId>>,
) -> HashSet<BlockId> {
    let mut severed = HashSet::new();
    for &start in order {
        let mut path = HashSet::new();
        let mut current = start;
        loop {
            let Some(parent) = parent_of.get(&current).copied().flatten() else {
                break;
            };
            if severed.contains(&current) {
                break;
            }
            path.insert(current);
            if path.contains(&parent) {
                log::debug!("block {parent} sits in a parent cycle; promoting it to a root");
                severed.insert(parent);
                break;
            }
            current = parent;
        }
    }
    severed
}

fn flatten_into(mut block: ContentBlock, out: &mut Vec<ContentBlock>) {
    let children = std::mem::take(&mut block.children);
    out.push(block);
    for child in children {
        flatten_into(child, out);
    }
}

fn attach_children(node: &mut ContentBlock, pending: &mut HashMap<BlockId, Vec<ContentBlock>>) {
    if let Some(mut children) = pending.remove(&node.id) {
        for child in &mut children {
            attach_children(child, pending);
        }
        children.sort_by_key(|child| child.position_order);
        node.children = children;
    }
}

/// Depth-first flattening of a built tree, parents before children.
pub fn flatten_tree(blocks: &[ContentBlock]) -> Vec<&ContentBlock> {
    let mut out = Vec::new();
    for block in blocks {
        collect_depth_first(block, &mut out);
    }
    out
}

fn collect_depth_first<'a>(block: &'a ContentBlock, out: &mut Vec<&'a ContentBlock>) {
    out.push(block);
    for child in &block.children {
        collect_depth_first(child, out);
    }
}

/// First block with the given id in depth-first order, if any.
pub fn find_by_id(blocks: &[ContentBlock], id: BlockId) -> Option<&ContentBlock> {
    for block in blocks {
        if block.id == id {
            return Some(block);
        }
        if let Some(found) = find_by_id(&block.children, id) {
            return Some(found);
        }
    }
    None
}

/// All transitive children of a block, depth-first.
pub fn descendants(block: &ContentBlock) -> Vec<&ContentBlock> {
    let mut out = Vec::new();
    for child in &block.children {
        collect_depth_first(child, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(id: i64, parent: Option<i64>, position: i32) -> ContentBlock {
        serde_json::from_value(json!({
            "id": id,
            "selectorId": format!("block-{id}"),
            "blockType": "TEXT",
            "positionOrder": position,
            "contentData": { "text": format!("text {id}"), "language": "en" },
            "parentBlockId": parent
        }))
        .unwrap()
    }

    fn ids(blocks: &[ContentBlock]) -> Vec<i64> {
        blocks.iter().map(|b| b.id.value()).collect()
    }

    #[test]
    fn test_links_children_under_parents() {
        let tree = organize_into_tree(vec![block(1, None, 0), block(2, Some(1), 0), block(3, Some(1), 1)]);
        assert_eq!(ids(&tree), vec![1]);
        assert_eq!(ids(&tree[0].children), vec![2, 3]);
    }

    #[test]
    fn test_dangling_parent_promotes_to_root() {
        let tree = organize_into_tree(vec![block(1, None, 0), block(2, Some(999), 1)]);
        assert_eq!(ids(&tree), vec![1, 2]);
    }

    #[test]
    fn test_self_parent_promotes_to_root() {
        let tree = organize_into_tree(vec![block(5, Some(5), 0)]);
        assert_eq!(ids(&tree), vec![5]);
    }

    #[test]
    fn test_parent_cycle_is_recovered_not_dropped() {
        let tree = organize_into_tree(vec![block(1, Some(2), 0), block(2, Some(1), 1)]);
        // One cycle member is promoted to a root and keeps the other as its
        // child; no block disappears.
        let mut all: Vec<i64> = flatten_tree(&tree).iter().map(|b| b.id.value()).collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2]);
    }

    #[test]
    fn test_find_and_descendants() {
        let tree = organize_into_tree(vec![
            block(1, None, 0),
            block(2, Some(1), 0),
            block(3, Some(2), 0),
        ]);
        assert_eq!(find_by_id(&tree, mason_types::BlockId::from(3)).unwrap().id.value(), 3);
        assert!(find_by_id(&tree, mason_types::BlockId::from(42)).is_none());
        assert_eq!(descendants(&tree[0]).len(), 2);
    }
}
