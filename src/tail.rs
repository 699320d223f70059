//! The tail store holds the unbranched suffixes of words as one flat
//! sequence of symbols. Every segment is closed by the terminator and
//! is addressed by a 1-based offset kept (negated) in the base array.

use crate::alphabet::TrieSymbol;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct TailStore<S: TrieSymbol> {
    symbols: Vec<S>,
    position: usize,
    terminator: S,
}

impl<S: TrieSymbol> TailStore<S> {
    pub(crate) fn new(terminator: S) -> Self {
        Self {
            symbols: vec![],
            position: 1,
            terminator,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.symbols.clear();
        self.position = 1;
    }

    /// Replace the content wholesale. Nothing is validated.
    pub(crate) fn replace(&mut self, symbols: Vec<S>, position: usize) {
        self.symbols = symbols;
        self.position = position;
    }

    #[inline(always)]
    pub(crate) fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Next free 1-based offset.
    #[inline(always)]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// The segment starting at `offset`, without its terminator. A
    /// segment that runs off the end of the store is cut short there.
    pub(crate) fn read(&self, offset: usize) -> &[S] {
        let start = offset.saturating_sub(1).min(self.symbols.len());
        let rest = &self.symbols[start..];
        let len = rest
            .iter()
            .position(|&s| s == self.terminator)
            .unwrap_or(rest.len());
        &rest[..len]
    }

    /// Does the segment at `offset` hold exactly `suffix`?
    pub(crate) fn matches(&self, offset: usize, suffix: &[S]) -> bool {
        if offset == 0 {
            return false;
        }
        let start = offset - 1;
        match self.symbols.get(start..start + suffix.len() + 1) {
            Some(segment) => {
                segment[..suffix.len()] == *suffix && segment[suffix.len()] == self.terminator
            }
            None => false,
        }
    }

    /// Write `suffix` and its terminator at the cursor, then move the
    /// cursor past them. Returns the offset of the new segment.
    pub(crate) fn append(&mut self, suffix: &[S]) -> usize {
        let offset = self.position;
        self.write(offset, suffix);
        self.position = offset + suffix.len() + 1;
        offset
    }

    /// Overwrite the segment at `offset` with a suffix that is no longer
    /// than the one it replaces. Whatever followed the old terminator
    /// stays behind as an orphaned fragment.
    pub(crate) fn rewrite(&mut self, offset: usize, suffix: &[S]) {
        debug_assert!(suffix.len() <= self.read(offset).len());
        self.write(offset, suffix);
    }

    fn write(&mut self, offset: usize, suffix: &[S]) {
        let start = offset.max(1) - 1;
        let end = start + suffix.len() + 1;
        if self.symbols.len() < end {
            self.symbols.resize(end, self.terminator);
        }
        self.symbols[start..end - 1].copy_from_slice(suffix);
        self.symbols[end - 1] = self.terminator;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn it_appends_segments() {
        let mut tail = TailStore::new('#');
        assert_eq!(tail.append(&chars("achelor")), 1);
        assert_eq!(tail.append(&chars("ar")), 9);
        assert_eq!(tail.symbols(), chars("achelor#ar#").as_slice());
        assert_eq!(tail.position(), 12);
    }

    #[test]
    fn it_appends_bare_terminator() {
        let mut tail = TailStore::new('#');
        assert_eq!(tail.append(&[]), 1);
        assert_eq!(tail.symbols(), &['#']);
        assert_eq!(tail.read(1), &[] as &[char]);
        assert!(tail.matches(1, &[]));
        assert_eq!(tail.position(), 2);
    }

    #[test]
    fn it_reads_segments() {
        let mut tail = TailStore::new('#');
        tail.append(&chars("achelor"));
        tail.append(&chars("ar"));
        assert_eq!(tail.read(1), chars("achelor").as_slice());
        assert_eq!(tail.read(3), chars("helor").as_slice());
        assert_eq!(tail.read(4), chars("elor").as_slice());
        assert_eq!(tail.read(9), chars("ar").as_slice());
        assert_eq!(tail.read(40), &[] as &[char]);
    }

    #[test]
    fn it_matches_whole_segments_only() {
        let mut tail = TailStore::new('#');
        tail.append(&chars("achelor"));
        assert!(tail.matches(1, &chars("achelor")));
        assert!(!tail.matches(1, &chars("ache")));
        assert!(!tail.matches(1, &chars("achelorx")));
        assert!(!tail.matches(0, &chars("achelor")));
        assert!(!tail.matches(3, &chars("achelor")));
    }

    #[test]
    fn it_rewrites_in_place_leaving_a_fragment() {
        let mut tail = TailStore::new('#');
        tail.append(&chars("achelor"));
        tail.rewrite(1, &chars("helor"));
        assert_eq!(tail.symbols(), chars("helor#r#").as_slice());
        assert_eq!(tail.read(1), chars("helor").as_slice());
        assert_eq!(tail.position(), 9);
    }

    #[test]
    fn it_grows_when_cursor_is_past_the_end() {
        let mut tail = TailStore::new('#');
        tail.replace(chars("ab#"), 6);
        assert_eq!(tail.append(&chars("c")), 6);
        assert_eq!(tail.symbols(), chars("ab###c#").as_slice());
        assert_eq!(tail.read(6), &['c']);
    }

    #[test]
    fn it_clears() {
        let mut tail = TailStore::new('#');
        tail.append(&chars("abc"));
        tail.clear();
        assert!(tail.symbols().is_empty());
        assert_eq!(tail.position(), 1);
    }
}
