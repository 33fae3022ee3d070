//! Byte-oriented Huffman coding.
//!
//! [`compress`] scans the input once, builds a prefix-code tree with a
//! deterministic `(weight, symbol)` merge order and encodes every byte as
//! a string of `'0'`/`'1'` characters. The tree travels with the bits in
//! the returned [`EncodedResult`], and [`decompress`] walks it to restore
//! the input.
//!
//! ```
//! let result = huffman_coder::compress(b"abcdeffg");
//! assert_eq!(huffman_coder::decompress(&result).unwrap(), b"abcdeffg");
//! ```

pub mod code_table;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod logger;
pub mod tree;

pub use code_table::{CodeTable, LeafCode, build_code_table, leaf_codes};
pub use codec::{EncodedResult, compress, decode, decompress, encode};
pub use error::{Error, Result};
pub use frequency::{ALPHABET_SIZE, FrequencyTable, build_frequency_table};
pub use tree::{Node, build_huffman_tree};
