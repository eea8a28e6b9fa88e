//! Builds the Huffman code tree for huffcode.
//!
//! Leaves are seeded from the frequency count, then the two lightest nodes are
//! repeatedly merged until a single node remains - the root. The queue order on
//! equal weights decides which of two equal-weight subtrees hangs left, which
//! changes the exact bit-strings produced (not their lengths), so the
//! tie-break here is fixed: leaves enter the queue in ascending symbol order,
//! merged nodes enter behind everything already queued, and equal weights
//! leave the queue in insertion order.
//!
use std::cmp::Ordering;

use rustc_hash::FxHashMap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// A node of the code tree. Internal nodes always own exactly two children;
/// `seq` is the queue insertion number used only for the tie-break.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u32,
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u32, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight, ties by decreasing insertion number,
    /// so popping a sorted vec yields the lightest, earliest-queued node.
    fn cmp(&self, other: &Self) -> Ordering {
        if other.weight == self.weight {
            return other.seq.cmp(&self.seq);
        }
        other.weight.cmp(&self.weight)
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the code tree from a frequency count. An empty count yields no tree;
/// a single distinct symbol yields its lone leaf as the root. Cannot fail.
pub fn build_tree(freqs: &FxHashMap<u8, u32>) -> Option<Box<Node>> {
    // Seed one leaf per distinct symbol, in ascending symbol order so the
    // queue numbering is reproducible.
    let mut leaves: Vec<(u8, u32)> = freqs.iter().map(|(&sym, &count)| (sym, count)).collect();
    leaves.sort_unstable_by_key(|&(sym, _)| sym);

    let mut tree: Vec<Node> = leaves
        .iter()
        .enumerate()
        .map(|(seq, &(sym, count))| Node::new(count, seq as u32, NodeData::Leaf(sym)))
        .collect();
    let mut seq = tree.len() as u32;

    // ...then pare it down to one single node with child nodes - keep it sorted.
    while tree.len() > 1 {
        // Keep the nodes sorted by weight so we pop the lightest pair.
        tree.sort_unstable();
        let first = tree.pop().unwrap();
        let second = tree.pop().unwrap();

        // The strictly lighter node hangs right; on a tie the node popped
        // first hangs left.
        let (left, right) = if second.weight > first.weight {
            (second, first)
        } else {
            (first, second)
        };
        tree.push(Node::new(
            left.weight + right.weight,
            seq,
            NodeData::Kids(Box::new(left), Box::new(right)),
        ));
        seq += 1;
    }
    tree.pop().map(Box::new)
}

#[cfg(test)]
mod test {
    use super::{build_tree, NodeData};
    use crate::tools::freq_count::freqs;

    #[test]
    fn empty_tree_test() {
        assert_eq!(build_tree(&freqs(b"")), None);
    }

    #[test]
    fn lone_leaf_test() {
        let root = build_tree(&freqs(b"zzzz")).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.weight, 4);
        assert_eq!(root.node_data, NodeData::Leaf(b'z'));
    }

    #[test]
    fn two_symbol_test() {
        // b is strictly lighter than a, so b hangs right.
        let root = build_tree(&freqs(b"aab")).unwrap();
        assert_eq!(root.weight, 3);
        match &root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.node_data, NodeData::Leaf(b'a'));
                assert_eq!(right.node_data, NodeData::Leaf(b'b'));
            }
            NodeData::Leaf(_) => panic!("expected an internal root"),
        }
    }

    #[test]
    fn tie_break_test() {
        // c+b merge first (weights 1+2). The merged node weighs 3, tying the
        // 'a' leaf; 'a' was queued earlier so it pops first and hangs left.
        let root = build_tree(&freqs(b"aaabbc")).unwrap();
        assert_eq!(root.weight, 6);
        match &root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.node_data, NodeData::Leaf(b'a'));
                match &right.node_data {
                    NodeData::Kids(inner_left, inner_right) => {
                        assert_eq!(inner_left.node_data, NodeData::Leaf(b'b'));
                        assert_eq!(inner_right.node_data, NodeData::Leaf(b'c'));
                    }
                    NodeData::Leaf(_) => panic!("expected an internal right child"),
                }
            }
            NodeData::Leaf(_) => panic!("expected an internal root"),
        }
    }

    #[test]
    fn weight_sums_test() {
        let root = build_tree(&freqs(b"the quick brown fox jumps over the lazy dog")).unwrap();
        assert_eq!(root.weight, 43);
    }
}
