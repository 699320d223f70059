//! Errors raised while building an [`crate::alphabet::Alphabet`].
//!
//! Trie operations themselves never fail: invalid words are simply
//! reported as absent.

use std::fmt::Debug;
use thiserror::Error;

pub type TrieResult<T> = Result<T, TrieError>;

/// Alphabet construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrieError {
    #[error("code 0 is reserved and cannot be assigned to symbol {symbol}")]
    ZeroCode { symbol: String },

    #[error("code {code} for symbol {symbol} exceeds the maximum code {max}")]
    CodeOutOfRange { symbol: String, code: u32, max: u32 },

    #[error("code {code} is assigned to both {first} and {second}")]
    DuplicateCode {
        code: u32,
        first: String,
        second: String,
    },

    #[error("symbol {symbol} appears more than once")]
    DuplicateSymbol { symbol: String },

    #[error("terminator {symbol} has no code in the alphabet")]
    MissingTerminator { symbol: String },
}

impl TrieError {
    pub(crate) fn symbol_name<S: Debug>(symbol: &S) -> String {
        format!("{:?}", symbol)
    }
}
