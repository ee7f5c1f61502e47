//! Structural validation of block trees.
//!
//! Serde checks each block's own fields. The rules here span blocks:
//!
//! - ids are unique across the whole tree, nested children included
//! - containers (`layout-row`, `layout-grid`) only appear at the top level
//! - the tree is at most `max_depth` levels deep (top level is depth 1)

use std::collections::HashSet;

use serde_json::Value;

use crate::block::{Block, BlockKind};
use crate::error::{Result, ValidationError};
use crate::ids::BlockId;

/// Default maximum nesting depth for block trees.
pub const MAX_NESTING_DEPTH: usize = 3;

/// Check cross-block invariants over a top-level block sequence.
pub fn validate_block_tree(blocks: &[Block], max_depth: usize) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, block) in blocks.iter().enumerate() {
        check_block(block, &format!("blocks[{i}]"), 1, max_depth, &mut seen)?;
    }
    Ok(())
}

fn check_block<'a>(
    block: &'a Block,
    path: &str,
    depth: usize,
    max_depth: usize,
    seen: &mut HashSet<&'a BlockId>,
) -> Result<()> {
    if depth > max_depth {
        return Err(ValidationError::TooDeep {
            path: path.to_string(),
            max: max_depth,
        });
    }
    if depth > 1 && block.is_container() {
        return Err(ValidationError::NestedContainer {
            path: path.to_string(),
            kind: block.kind(),
        });
    }
    if block.id.is_empty() {
        return Err(ValidationError::InvalidBlock {
            path: path.to_string(),
            reason: "id must not be empty".to_string(),
        });
    }
    if !seen.insert(&block.id) {
        return Err(ValidationError::DuplicateId {
            path: path.to_string(),
            id: block.id.clone(),
        });
    }

    if let Some(cells) = block.children() {
        for (c, cell) in cells.iter().enumerate() {
            for (j, child) in cell.iter().enumerate() {
                let child_path = format!("{path}.children[{c}][{j}]");
                check_block(child, &child_path, depth + 1, max_depth, seen)?;
            }
        }
    }
    Ok(())
}

/// Decode one persisted block value, reporting failures against `path`.
///
/// Unknown `type` values get their own error instead of serde's generic
/// "unknown variant" message, and nested children are decoded one at a time
/// so a bad child is reported at its own path.
pub fn parse_block(value: &Value, path: &str) -> Result<Block> {
    let obj = value.as_object().ok_or_else(|| ValidationError::InvalidBlock {
        path: path.to_string(),
        reason: "block must be an object".to_string(),
    })?;

    let type_name = match obj.get("type") {
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(ValidationError::InvalidBlock {
                path: path.to_string(),
                reason: "type must be a string".to_string(),
            });
        }
        None => {
            return Err(ValidationError::InvalidBlock {
                path: path.to_string(),
                reason: "missing type".to_string(),
            });
        }
    };

    // Persisted discriminants are exact; the case-insensitive parser is for
    // human input.
    let kind = BlockKind::ALL
        .iter()
        .copied()
        .find(|k| k.as_str() == type_name)
        .ok_or_else(|| ValidationError::UnknownBlockType {
            path: path.to_string(),
            found: type_name.to_string(),
        })?;

    if kind.is_container() {
        if let Some(Value::Array(cells)) = obj.get("children") {
            for (c, cell) in cells.iter().enumerate() {
                if let Value::Array(children) = cell {
                    for (j, child) in children.iter().enumerate() {
                        parse_block(child, &format!("{path}.children[{c}][{j}]"))?;
                    }
                }
            }
        }
    }

    Block::from_value(value.clone()).map_err(|e| ValidationError::InvalidBlock {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout_row(id: &str, children: Value) -> Value {
        json!({ "id": id, "type": "layout-row", "columns": 2, "children": children })
    }

    fn parse_all(values: &[Value]) -> Vec<Block> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| parse_block(v, &format!("blocks[{i}]")).unwrap())
            .collect()
    }

    #[test]
    fn test_valid_tree_passes() {
        let blocks = parse_all(&[
            json!({ "id": "a", "type": "text", "content": "hi" }),
            layout_row("b", json!([[{ "id": "c", "type": "divider" }], []])),
        ]);
        validate_block_tree(&blocks, MAX_NESTING_DEPTH).unwrap();
    }

    #[test]
    fn test_duplicate_id_in_nested_child() {
        let blocks = parse_all(&[
            json!({ "id": "a", "type": "divider" }),
            layout_row("b", json!([[], [{ "id": "a", "type": "divider" }]])),
        ]);
        let err = validate_block_tree(&blocks, MAX_NESTING_DEPTH).unwrap_err();
        match err {
            ValidationError::DuplicateId { path, id } => {
                assert_eq!(path, "blocks[1].children[1][0]");
                assert_eq!(id, "a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nested_container_rejected() {
        let inner = layout_row("inner", json!([[], []]));
        let blocks = parse_all(&[layout_row("outer", json!([[inner], []]))]);
        let err = validate_block_tree(&blocks, MAX_NESTING_DEPTH).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NestedContainer { ref path, kind: BlockKind::LayoutRow }
                if path == "blocks[0].children[0][0]"
        ));
    }

    #[test]
    fn test_depth_limit() {
        let blocks = parse_all(&[layout_row("outer", json!([[{ "id": "c", "type": "text", "content": "" }]]))]);
        validate_block_tree(&blocks, 2).unwrap();
        let err = validate_block_tree(&blocks, 1).unwrap_err();
        assert!(matches!(err, ValidationError::TooDeep { max: 1, .. }));
    }

    #[test]
    fn test_unknown_type_reports_path() {
        let err = parse_block(&json!({ "id": "x", "type": "video" }), "blocks[4]").unwrap_err();
        match err {
            ValidationError::UnknownBlockType { path, found } => {
                assert_eq!(path, "blocks[4]");
                assert_eq!(found, "video");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_nested_child_reports_child_path() {
        let value = layout_row("row", json!([[{ "id": "c", "type": "heading", "level": 9, "content": "" }]]));
        let err = parse_block(&value, "blocks[0]").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidBlock { ref path, .. } if path == "blocks[0].children[0][0]"
        ));
    }

    #[test]
    fn test_missing_type_and_non_object() {
        assert!(matches!(
            parse_block(&json!({ "id": "x" }), "blocks[0]"),
            Err(ValidationError::InvalidBlock { .. })
        ));
        assert!(matches!(
            parse_block(&json!("text"), "blocks[0]"),
            Err(ValidationError::InvalidBlock { .. })
        ));
    }

    #[test]
    fn test_empty_id_rejected() {
        let blocks = vec![Block::text("", "x")];
        assert!(matches!(
            validate_block_tree(&blocks, MAX_NESTING_DEPTH),
            Err(ValidationError::InvalidBlock { .. })
        ));
    }
}
