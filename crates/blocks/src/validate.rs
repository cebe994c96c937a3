//! Read-only structural checks over a built block tree.
//!
//! Validation never fails and never mutates: every problem found is a
//! message in the report, and the caller decides whether that blocks
//! publishing, warns, or is ignored.
use crate::block::ContentBlock;
use crate::content::BlockType;
use mason_types::BlockId;
use std::collections::HashSet;

/// Bounds applied while validating.
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    /// Maximum nesting depth; roots sit at depth 0.
    pub max_depth: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self { max_depth: 10 }
    }
}

/// Outcome of a validation walk. Errors appear in depth-first detection
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a tree against the default limits.
pub fn validate_tree(blocks: &[ContentBlock]) -> ValidationReport {
    validate_tree_with(blocks, &ValidationLimits::default())
}

/// Validates a tree: id uniqueness across the whole tree, bounded nesting
/// depth, and container drop-zone constraints (child count and child
/// types). Checks are independent; none short-circuits the walk.
pub fn validate_tree_with(blocks: &[ContentBlock], limits: &ValidationLimits) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashSet<BlockId> = HashSet::new();
    for block in blocks {
        validate_block(block, 0, limits, &mut seen, &mut report.errors);
    }
    report
}

fn validate_block(
    block: &ContentBlock,
    depth: usize,
    limits: &ValidationLimits,
    seen: &mut HashSet<BlockId>,
    errors: &mut Vec<String>,
) {
    if !seen.insert(block.id) {
        errors.push(format!("Duplicate block ID found: {}", block.id));
    }

    if depth > limits.max_depth {
        errors.push(format!(
            "Block nesting too deep ({depth} levels) for block ID: {}",
            block.id
        ));
    }

    if block.kind() == BlockType::Container && !block.children.is_empty() {
        let drop_zone = block
            .settings
            .container_content()
            .and_then(|settings| settings.editor)
            .and_then(|editor| editor.drop_zone);
        if let Some(zone) = drop_zone {
            if let Some(max_children) = zone.max_children
                && block.children.len() > max_children
            {
                errors.push(format!(
                    "Container {} exceeds max children limit: {} > {}",
                    block.id,
                    block.children.len(),
                    max_children
                ));
            }
            if let Some(allowed_types) = &zone.allowed_types {
                for child in &block.children {
                    if !allowed_types.contains(&child.kind()) {
                        errors.push(format!(
                            "Container {} contains disallowed child type: {}",
                            block.id,
                            child.kind()
                        ));
                    }
                }
            }
        }
    }

    for child in &block.children {
        validate_block(child, depth + 1, limits, seen, errors);
    }
}
