//! Validator behavior: duplicate ids, depth bounds, container constraints.
mod common;

use common::{container_block, image_block, text_block};
use mason::{organize_into_tree, validate_tree};
use serde_json::json;

#[test]
fn clean_tree_is_valid() {
    let tree = organize_into_tree(vec![
        container_block(1, None, 0, None),
        text_block(2, Some(1), 0),
        image_block(3, Some(1), 1),
    ]);
    let report = validate_tree(&tree);
    assert!(report.is_valid());
    assert!(report.errors.is_empty());
}

#[test]
fn duplicate_id_reported_exactly_once() {
    // Hand-build the tree: the builder would collapse the duplicates, and
    // the two contracts are specified independently.
    let mut root = container_block(1, None, 0, None);
    root.children = vec![text_block(5, None, 0), text_block(5, None, 1)];

    let report = validate_tree(&[root]);
    assert!(!report.is_valid());
    let duplicates: Vec<_> = report
        .errors
        .iter()
        .filter(|error| error.as_str() == "Duplicate block ID found: 5")
        .collect();
    assert_eq!(duplicates.len(), 1);
}

#[test]
fn chain_of_ten_levels_is_fine_twelve_is_not() {
    let mut blocks = vec![container_block(0, None, 0, None)];
    for id in 1..=9 {
        blocks.push(container_block(id, Some(id - 1), 0, None));
    }
    let ten_levels = organize_into_tree(blocks.clone());
    assert!(validate_tree(&ten_levels).is_valid());

    for id in 10..=11 {
        blocks.push(container_block(id, Some(id - 1), 0, None));
    }
    let twelve_levels = organize_into_tree(blocks);
    let report = validate_tree(&twelve_levels);
    assert_eq!(
        report.errors,
        vec!["Block nesting too deep (11 levels) for block ID: 11"]
    );
}

#[test]
fn max_children_limit_reports_actual_versus_max() {
    let tree = organize_into_tree(vec![
        container_block(1, None, 0, Some(json!({ "maxChildren": 2 }))),
        text_block(2, Some(1), 0),
        text_block(3, Some(1), 1),
        text_block(4, Some(1), 2),
    ]);
    let report = validate_tree(&tree);
    assert_eq!(
        report.errors,
        vec!["Container 1 exceeds max children limit: 3 > 2"]
    );
}

#[test]
fn disallowed_child_type_reports_one_error_per_child() {
    let tree = organize_into_tree(vec![
        container_block(1, None, 0, Some(json!({ "allowedTypes": ["TEXT"] }))),
        text_block(2, Some(1), 0),
        image_block(3, Some(1), 1),
        image_block(4, Some(1), 2),
    ]);
    let report = validate_tree(&tree);
    assert_eq!(
        report.errors,
        vec![
            "Container 1 contains disallowed child type: IMAGE",
            "Container 1 contains disallowed child type: IMAGE",
        ]
    );
}

#[test]
fn checks_do_not_short_circuit() {
    // One container violating both drop-zone rules with a duplicate id in
    // its subtree reports all three problems.
    let zone = json!({ "maxChildren": 1, "allowedTypes": ["TEXT"] });
    let mut root = container_block(1, None, 0, Some(zone));
    root.children = vec![text_block(2, None, 0), image_block(2, None, 1)];

    let report = validate_tree(&[root]);
    assert_eq!(
        report.errors,
        vec![
            "Container 1 exceeds max children limit: 2 > 1",
            "Container 1 contains disallowed child type: IMAGE",
            "Duplicate block ID found: 2",
        ]
    );
}

#[test]
fn validation_does_not_mutate_the_tree() {
    let mut root = container_block(1, None, 0, Some(json!({ "maxChildren": 0 })));
    root.children = vec![text_block(1, None, 0)];
    let tree = vec![root];

    let before = tree.clone();
    let _ = validate_tree(&tree);
    assert_eq!(tree, before);
}

#[test]
fn container_without_drop_zone_rules_is_unconstrained() {
    let mut blocks = vec![container_block(1, None, 0, None)];
    for id in 2..=30 {
        blocks.push(image_block(id, Some(1), id as i32));
    }
    let tree = organize_into_tree(blocks);
    assert!(validate_tree(&tree).is_valid());
}
