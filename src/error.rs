use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The bit sequence contained something other than `'0'` or `'1'`.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    /// The bit sequence ended while the decoder was between the root and a leaf.
    #[error("bit sequence truncated after {consumed} bits: stream ends mid-code")]
    TruncatedStream { consumed: usize },

    /// The code table has no entry for a byte of the input.
    #[error("no code for symbol {symbol:#04x}: code table does not match input")]
    MissingCode { symbol: u8 },

    #[error("cannot decode {len} bits without a tree")]
    MissingTree { len: usize },

    #[error("tree root is a leaf; a prefix-code tree needs at least two leaves")]
    LeafRoot,
}
