use crate::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Symbol that internal nodes carry in the merge ordering.
pub const INTERNAL_SYMBOL: u8 = 0;

/// Symbol of the leaf added when the input holds a single distinct byte.
///
/// If the input byte is itself `PADDING_SYMBOL` the tree ends up with two
/// leaves for the same symbol. Both decode to the same byte, so the
/// round trip still holds, but the padding leaf is not distinguishable
/// from real data.
pub const PADDING_SYMBOL: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node::Leaf { symbol, weight }
    }

    /// Joins two subtrees; the weight is the sum of theirs.
    pub fn internal(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight().saturating_add(right.weight()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// The `(weight, symbol)` pair nodes are ordered by while merging.
    pub fn priority_key(&self) -> (u64, u8) {
        match *self {
            Node::Leaf { symbol, weight } => (weight, symbol),
            Node::Internal { weight, .. } => (weight, INTERNAL_SYMBOL),
        }
    }
}

/// Merge order: ascending weight, then ascending symbol.
pub fn merge_order(a: &Node, b: &Node) -> Ordering {
    a.priority_key().cmp(&b.priority_key())
}

// Heap entry. `seq` is the insertion index and settles nodes whose
// `(weight, symbol)` keys are equal, so the order is total.
struct Candidate {
    seq: usize,
    node: Node,
}

impl Eq for Candidate {}
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: `BinaryHeap` pops the greatest entry.
        merge_order(&other.node, &self.node).then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the prefix-code tree for `table`.
///
/// Returns `None` only when every count is zero. A table with a single
/// present symbol gets a padding leaf for [`PADDING_SYMBOL`] with weight 1,
/// so the root is always an internal node and every code is at least one
/// bit long.
pub fn build_huffman_tree(table: &FrequencyTable) -> Option<Node> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0;
    let mut push = |heap: &mut BinaryHeap<Candidate>, node: Node| {
        heap.push(Candidate { seq, node });
        seq += 1;
    };

    for (symbol, count) in table.iter() {
        push(&mut heap, Node::leaf(symbol, count));
    }

    match heap.len() {
        0 => return None,
        1 => {
            debug!(symbol = PADDING_SYMBOL, "single symbol input, adding padding leaf");
            push(&mut heap, Node::leaf(PADDING_SYMBOL, 1));
        }
        _ => {}
    }

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            unreachable!("merge needs two candidates");
        };
        trace!(
            left = ?left.node.priority_key(),
            right = ?right.node.priority_key(),
            "merging"
        );
        push(&mut heap, Node::internal(left.node, right.node));
    }

    let root = heap.pop().map(|c| c.node)?;
    debug!(
        weight = root.weight(),
        leaves = root.leaf_count(),
        depth = root.depth(),
        "built huffman tree"
    );
    Some(root)
}
