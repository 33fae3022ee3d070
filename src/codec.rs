use crate::code_table::{CodeTable, build_code_table};
use crate::error::{Error, Result};
use crate::frequency::build_frequency_table;
use crate::tree::{Node, build_huffman_tree};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bit sequence of one compressed input together with the tree that decodes it.
///
/// `tree` is `None` only for empty input, in which case `bits` is empty too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedResult {
    bits: String,
    tree: Option<Node>,
}

impl EncodedResult {
    pub fn new(bits: String, tree: Option<Node>) -> Self {
        Self { bits, tree }
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn into_parts(self) -> (String, Option<Node>) {
        (self.bits, self.tree)
    }
}

/// Concatenates the code of every byte of `input`, in order.
pub fn encode(input: &[u8], table: &CodeTable) -> Result<String> {
    let mut bits = String::with_capacity(table.encoded_len(input).unwrap_or(0));
    for &symbol in input {
        let code = table.get(symbol).ok_or(Error::MissingCode { symbol })?;
        bits.push_str(code);
    }
    Ok(bits)
}

enum Cursor<'a> {
    AtRoot,
    Descending(&'a Node),
}

/// Walks `root` bit by bit, emitting a symbol at every leaf.
///
/// The sequence must end on a symbol boundary; a trailing partial code is
/// reported as [`Error::TruncatedStream`].
pub fn decode(bits: &str, root: &Node) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut cursor = Cursor::AtRoot;

    for (position, bit) in bits.chars().enumerate() {
        let node = match cursor {
            Cursor::AtRoot => root,
            Cursor::Descending(node) => node,
        };
        let Node::Internal { left, right, .. } = node else {
            // Only reachable when the root itself is a leaf.
            return Err(Error::LeafRoot);
        };
        let next = match bit {
            '0' => left.as_ref(),
            '1' => right.as_ref(),
            found => return Err(Error::InvalidBit { position, found }),
        };
        cursor = match *next {
            Node::Leaf { symbol, .. } => {
                output.push(symbol);
                Cursor::AtRoot
            }
            Node::Internal { .. } => Cursor::Descending(next),
        };
    }

    match cursor {
        Cursor::AtRoot => Ok(output),
        Cursor::Descending(_) => Err(Error::TruncatedStream {
            consumed: bits.chars().count(),
        }),
    }
}

pub fn compress(data: &[u8]) -> EncodedResult {
    let frequencies = build_frequency_table(data);
    let Some(tree) = build_huffman_tree(&frequencies) else {
        debug!("empty input, nothing to encode");
        return EncodedResult::new(String::new(), None);
    };
    let table = build_code_table(&tree);
    let bits = match encode(data, &table) {
        Ok(bits) => bits,
        Err(e) => unreachable!("code table built from this input: {}", e),
    };
    debug!(
        input_len = data.len(),
        symbols = frequencies.distinct(),
        encoded_bits = bits.len(),
        "compressed"
    );
    EncodedResult::new(bits, Some(tree))
}

pub fn decompress(result: &EncodedResult) -> Result<Vec<u8>> {
    let output = match result.tree() {
        Some(root) => decode(result.bits(), root)?,
        None if result.is_empty() => Vec::new(),
        None => return Err(Error::MissingTree { len: result.bit_len() }),
    };
    debug!(
        encoded_bits = result.bit_len(),
        output_len = output.len(),
        "decompressed"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node {
        // a: 0, b: 10, c: 11
        Node::internal(
            Node::leaf(b'a', 2),
            Node::internal(Node::leaf(b'b', 1), Node::leaf(b'c', 1)),
        )
    }

    #[test]
    fn decodes_back_to_back_codes() {
        assert_eq!(decode("0101100", &sample_tree()).unwrap(), b"abcaa");
    }

    #[test]
    fn empty_bits_decode_to_nothing() {
        assert_eq!(decode("", &sample_tree()).unwrap(), b"");
    }

    #[test]
    fn rejects_non_binary_characters() {
        assert_eq!(
            decode("01x1", &sample_tree()),
            Err(Error::InvalidBit { position: 2, found: 'x' })
        );
    }

    #[test]
    fn rejects_stream_ending_mid_code() {
        assert_eq!(
            decode("0101", &sample_tree()),
            Err(Error::TruncatedStream { consumed: 4 })
        );
    }

    #[test]
    fn leaf_root_is_an_error() {
        assert_eq!(decode("0", &Node::leaf(b'a', 1)), Err(Error::LeafRoot));
    }

    #[test]
    fn encode_reports_missing_code() {
        let table = build_code_table(&sample_tree());
        assert_eq!(encode(b"abc", &table).unwrap(), "01011");
        assert_eq!(encode(b"abd", &table), Err(Error::MissingCode { symbol: b'd' }));
    }

    #[test]
    fn bits_without_tree_are_rejected() {
        let result = EncodedResult::new("01".to_owned(), None);
        assert_eq!(decompress(&result), Err(Error::MissingTree { len: 2 }));
    }

    #[test]
    fn sample_roundtrip() {
        let result = compress(b"abcdeffg");
        assert_eq!(result.bits(), "0000010100111001111101");
        assert_eq!(decompress(&result).unwrap(), b"abcdeffg");
    }
}
