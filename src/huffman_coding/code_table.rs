//! Derives the per-symbol code table from a finished code tree.
//!
//! Each leaf's code is its root-to-leaf path, '0' for a left descent and '1'
//! for a right descent. A lone leaf root has no path, so it takes the fixed
//! code "0". Because every code ends at a leaf, no code can be a prefix of
//! another - the table is prefix-free by construction.
//!
use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};

/// Walk the tree and record the root-to-leaf path of every symbol. No tree
/// yields an empty table.
pub fn derive_codes(root: Option<&Node>) -> FxHashMap<u8, String> {
    let mut codes = FxHashMap::default();
    if let Some(node) = root {
        match node.node_data {
            NodeData::Leaf(sym) => {
                codes.insert(sym, "0".to_string());
            }
            NodeData::Kids(..) => record_leaves(node, String::new(), &mut codes),
        }
    }
    codes
}

/// Recursively walk the tree, accumulating the path taken so far and recording
/// it when a terminal leaf is reached.
fn record_leaves(node: &Node, path: String, codes: &mut FxHashMap<u8, String>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            let mut left_path = path.clone();
            left_path.push('0');
            record_leaves(left, left_path, codes);

            let mut right_path = path;
            right_path.push('1');
            record_leaves(right, right_path, codes);
        }
        NodeData::Leaf(sym) => {
            codes.insert(*sym, path);
        }
    };
}
