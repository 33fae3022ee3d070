use crate::tree::Node;
use std::collections::BTreeMap;
use std::fmt;

/// Bit path of every leaf symbol of one tree, `'0'` for left and `'1'` for right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, String>,
}

impl CodeTable {
    pub fn get(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Number of bits `input` encodes to, or `None` if a byte has no code.
    pub fn encoded_len(&self, input: &[u8]) -> Option<usize> {
        input
            .iter()
            .map(|&byte| self.get(byte).map(str::len))
            .sum()
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{:#04x}: {}", symbol, code)?;
        }
        Ok(())
    }
}

/// A leaf of a tree with its weight and bit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafCode {
    pub symbol: u8,
    pub weight: u64,
    pub code: String,
}

fn collect_leaves(node: &Node, prefix: &mut String, leaves: &mut Vec<LeafCode>) {
    match *node {
        Node::Leaf { symbol, weight } => leaves.push(LeafCode {
            symbol,
            weight,
            code: prefix.clone(),
        }),
        Node::Internal {
            ref left,
            ref right,
            ..
        } => {
            prefix.push('0');
            collect_leaves(left, prefix, leaves);
            prefix.pop();
            prefix.push('1');
            collect_leaves(right, prefix, leaves);
            prefix.pop();
        }
    }
}

/// Every leaf of `root`, depth-first with left before right.
///
/// Unlike [`CodeTable`] this keeps both leaves when the padding symbol
/// also occurs in the input.
pub fn leaf_codes(root: &Node) -> Vec<LeafCode> {
    let mut leaves = Vec::new();
    collect_leaves(root, &mut String::new(), &mut leaves);
    leaves
}

/// A symbol reached twice (only the padding symbol can be) keeps the path
/// of the later leaf.
pub fn build_code_table(root: &Node) -> CodeTable {
    let codes = leaf_codes(root)
        .into_iter()
        .map(|leaf| (leaf.symbol, leaf.code))
        .collect();
    CodeTable { codes }
}
