//! Provides the Alphabet which maps the symbols of a word onto the
//! positive integer codes used to address arcs in the double array.
//!
//! One symbol is reserved as the terminator. It is implicitly appended
//! to every word and closes every segment in the tail store, so it
//! may not appear inside a word.
//!
//! ```
//! use darting::alphabet::Alphabet;
//!
//! let alphabet = Alphabet::lowercase();
//! assert_eq!(alphabet.code('a'), Some(2));
//! assert_eq!(alphabet.symbol(27), Some('z'));
//! assert_eq!(alphabet.terminator(), '#');
//! assert_eq!(alphabet.len(), 27);
//! ```
//!
//! Symbols don't have to be chars. Any Copy type works, for instance
//! grapheme clusters:
//!
//! ```
//! use darting::alphabet::Alphabet;
//!
//! let alphabet = Alphabet::from_symbols("$", ["a̐", "é", "ö̲"]).expect("unique symbols");
//! assert_eq!(alphabet.code("é"), Some(3));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{TrieError, TrieResult};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The largest code an alphabet may assign. Codes are added to signed
/// base offsets, so they must fit in an i32.
pub const MAX_CODE: u32 = i32::MAX as u32;

/// Symbols which we wish to store in a Trie must implement
/// TrieSymbol.
pub trait TrieSymbol: Copy + Eq + Hash + Ord + Debug {}

// Blanket implementation which satisfies the compiler
impl<S> TrieSymbol for S where S: Copy + Eq + Hash + Ord + Debug {}

/// Maps symbols to unique, strictly positive codes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Alphabet<S: TrieSymbol> {
    codes: HashMap<S, u32>,
    symbols: BTreeMap<u32, S>,
    terminator: S,
    terminator_code: u32,
}

impl<S: TrieSymbol> Alphabet<S> {
    /// Build an alphabet from explicit (symbol, code) pairs. The
    /// terminator must be one of the supplied symbols.
    pub fn new<P: IntoIterator<Item = (S, u32)>>(pairs: P, terminator: S) -> TrieResult<Self> {
        let mut codes = HashMap::new();
        let mut symbols = BTreeMap::new();
        for (symbol, code) in pairs {
            if code == 0 {
                return Err(TrieError::ZeroCode {
                    symbol: TrieError::symbol_name(&symbol),
                });
            }
            if code > MAX_CODE {
                return Err(TrieError::CodeOutOfRange {
                    symbol: TrieError::symbol_name(&symbol),
                    code,
                    max: MAX_CODE,
                });
            }
            if codes.contains_key(&symbol) {
                return Err(TrieError::DuplicateSymbol {
                    symbol: TrieError::symbol_name(&symbol),
                });
            }
            if let Some(first) = symbols.get(&code) {
                return Err(TrieError::DuplicateCode {
                    code,
                    first: TrieError::symbol_name(first),
                    second: TrieError::symbol_name(&symbol),
                });
            }
            codes.insert(symbol, code);
            symbols.insert(code, symbol);
        }
        let terminator_code =
            codes
                .get(&terminator)
                .copied()
                .ok_or_else(|| TrieError::MissingTerminator {
                    symbol: TrieError::symbol_name(&terminator),
                })?;
        Ok(Self {
            codes,
            symbols,
            terminator,
            terminator_code,
        })
    }

    /// Build an alphabet where the terminator takes code 1 and the
    /// remaining symbols take consecutive codes from 2 in the order
    /// supplied.
    pub fn from_symbols<I: IntoIterator<Item = S>>(terminator: S, symbols: I) -> TrieResult<Self> {
        let pairs = std::iter::once(terminator)
            .chain(symbols)
            .zip(1..)
            .collect::<Vec<(S, u32)>>();
        Self::new(pairs, terminator)
    }

    /// The code for a symbol, if the symbol is part of the alphabet.
    #[inline]
    pub fn code(&self, symbol: S) -> Option<u32> {
        self.codes.get(&symbol).copied()
    }

    /// Reverse lookup of a code. Unknown codes yield None.
    #[inline]
    pub fn symbol(&self, code: u32) -> Option<S> {
        self.symbols.get(&code).copied()
    }

    #[inline]
    pub fn terminator(&self) -> S {
        self.terminator
    }

    #[inline]
    pub fn terminator_code(&self) -> u32 {
        self.terminator_code
    }

    /// How many symbols, terminator included, does the alphabet hold?
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a valid alphabet, since it holds a terminator.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.symbols.keys().copied()
    }

    /// Translate a word into symbols and arc codes. Returns None for an
    /// empty word or a word holding a symbol we can't address.
    pub(crate) fn encode<W: IntoIterator<Item = S>>(&self, word: W) -> Option<Key<S>> {
        let symbols = word.into_iter().collect::<Vec<S>>();
        if symbols.is_empty() {
            return None;
        }
        let mut codes = Vec::with_capacity(symbols.len() + 1);
        for &symbol in &symbols {
            match self.code(symbol) {
                Some(code) if code != self.terminator_code => codes.push(code),
                _ => return None,
            }
        }
        codes.push(self.terminator_code);
        Some(Key { symbols, codes })
    }
}

impl Alphabet<char> {
    /// The lowercase latin letters, with '#' as terminator.
    pub fn lowercase() -> Self {
        let pairs = std::iter::once(('#', 1))
            .chain(('a'..='z').zip(2..))
            .collect::<Vec<(char, u32)>>();
        let codes = pairs.iter().copied().collect();
        let symbols = pairs.iter().map(|&(s, c)| (c, s)).collect();
        Self {
            codes,
            symbols,
            terminator: '#',
            terminator_code: 1,
        }
    }
}

impl Default for Alphabet<char> {
    fn default() -> Self {
        Self::lowercase()
    }
}

/// A word prepared for walking the double array.
///
/// `codes` has one more entry than `symbols`: the terminator arc.
#[derive(Debug)]
pub(crate) struct Key<S> {
    pub(crate) symbols: Vec<S>,
    pub(crate) codes: Vec<u32>,
}

impl<S> Key<S> {
    /// The symbols which remain once `arc` has been walked. Walking the
    /// terminator arc leaves nothing.
    pub(crate) fn suffix(&self, arc: usize) -> &[S] {
        &self.symbols[(arc + 1).min(self.symbols.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_the_lowercase_alphabet() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet.terminator_code(), 1);
        assert_eq!(alphabet.symbol(1), Some('#'));
        assert_eq!(alphabet.symbol(2), Some('a'));
        assert_eq!(alphabet.symbol(27), Some('z'));
        assert_eq!(alphabet.symbol(0), None);
        assert_eq!(alphabet.symbol(100), None);
        assert_eq!(alphabet, Alphabet::default());
    }

    #[test]
    fn it_lists_codes_in_order() {
        let alphabet = Alphabet::new([('x', 9), ('#', 4), ('y', 2)], '#').unwrap();
        assert_eq!(alphabet.codes().collect::<Vec<u32>>(), vec![2, 4, 9]);
        assert_eq!(alphabet.terminator_code(), 4);
    }

    #[test]
    fn it_rejects_zero_code() {
        let err = Alphabet::new([('#', 1), ('a', 0)], '#').unwrap_err();
        assert!(matches!(err, TrieError::ZeroCode { .. }));
    }

    #[test]
    fn it_rejects_large_code() {
        let err = Alphabet::new([('#', 1), ('a', MAX_CODE + 1)], '#').unwrap_err();
        assert!(matches!(err, TrieError::CodeOutOfRange { code, .. } if code == MAX_CODE + 1));
    }

    #[test]
    fn it_rejects_duplicate_code() {
        let err = Alphabet::new([('#', 1), ('a', 2), ('b', 2)], '#').unwrap_err();
        assert_eq!(
            err,
            TrieError::DuplicateCode {
                code: 2,
                first: "'a'".to_string(),
                second: "'b'".to_string(),
            }
        );
    }

    #[test]
    fn it_rejects_duplicate_symbol() {
        let err = Alphabet::from_symbols('#', "abca".chars()).unwrap_err();
        assert!(matches!(err, TrieError::DuplicateSymbol { .. }));
        let err = Alphabet::from_symbols('#', "a#".chars()).unwrap_err();
        assert!(matches!(err, TrieError::DuplicateSymbol { .. }));
    }

    #[test]
    fn it_rejects_missing_terminator() {
        let err = Alphabet::new([('a', 1)], '#').unwrap_err();
        assert!(matches!(err, TrieError::MissingTerminator { .. }));
    }

    #[test]
    fn it_encodes_words() {
        let alphabet = Alphabet::lowercase();
        let key = alphabet.encode("abc".chars()).unwrap();
        assert_eq!(key.codes, vec![2, 3, 4, 1]);
        assert_eq!(key.suffix(0), &['b', 'c']);
        assert_eq!(key.suffix(2), &[] as &[char]);
        assert_eq!(key.suffix(3), &[] as &[char]);
    }

    #[test]
    fn it_refuses_to_encode_invalid_words() {
        let alphabet = Alphabet::lowercase();
        assert!(alphabet.encode("".chars()).is_none());
        assert!(alphabet.encode("abC".chars()).is_none());
        assert!(alphabet.encode("ab#c".chars()).is_none());
    }

    fn smallest<S: TrieSymbol>(symbols: &[S]) -> Option<S> {
        symbols.iter().copied().min()
    }

    #[test]
    fn it_orders_symbols() {
        assert_eq!(smallest(&['q', 'b', 'x']), Some('b'));
        assert_eq!(smallest(&[9u8, 3, 5]), Some(3));
        assert_eq!(smallest(&["é", "a̐"]), Some("a̐"));
    }

    #[test]
    fn it_numbers_symbols_in_order() {
        let alphabet = Alphabet::from_symbols(0u8, [7u8, 3, 5]).unwrap();
        assert_eq!(alphabet.code(0), Some(1));
        assert_eq!(alphabet.code(7), Some(2));
        assert_eq!(alphabet.code(5), Some(4));
        assert_eq!(alphabet.code(9), None);
    }
}
