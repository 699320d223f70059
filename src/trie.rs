//! Provides a compact double-array Trie for testing whether words
//! composed of symbols belong to a dictionary.
//!
//! Instead of a graph of nodes, states are plain integers (the root is
//! state 1) and arcs live in two parallel arrays:
//!  - `base[s] + code` is the address of the arc leaving state `s` for
//!    the symbol with that code,
//!  - `check[t] == s` proves that address `t` belongs to state `s`.
//!
//! A negative base marks a leaf whose unbranched remainder is kept in a
//! separate tail store, starting at offset `-base[s]`.
//!
//! Symbols are mapped to codes by an [`crate::alphabet::Alphabet`]. The
//! default alphabet holds the lowercase latin letters and uses '#' as
//! the terminator.
//!
//! Example 1
//! ```
//! use darting::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("bachelor".chars());
//! trie.insert("jar".chars());
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our Trie
//! assert!(trie.contains("bachelor".chars()));
//! assert!(trie.contains(['j', 'a', 'r']));
//! assert!(!trie.contains("ba".chars()));
//! assert!(trie.remove("jar".chars()));
//! assert!(!trie.contains("jar".chars()));
//! ```
//!
//! Example 2
//! ```
//! use darting::alphabet::Alphabet;
//! use darting::trie::Trie;
//!
//! // Words made of small integers, with 0 as terminator
//! let alphabet = Alphabet::from_symbols(0u8, 1..=9).expect("unique symbols");
//! let mut trie = Trie::with_alphabet(alphabet);
//! trie.insert([4, 2]);
//! trie.insert([4, 2, 7]);
//! assert!(trie.contains([4, 2]));
//! assert!(!trie.contains([4]));
//! ```
//!
//! Removal detaches a word without reclaiming its storage: the tail
//! keeps the orphaned symbols and freed slots are only reused when a
//! later insertion happens to land on them. Repeated insert/remove
//! cycles therefore grow the arrays.

use crate::alphabet::{Alphabet, Key, TrieSymbol};
use crate::tail::TailStore;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A state is a 1-based index into the base and check arrays.
pub(crate) type State = usize;

pub(crate) const ROOT: State = 1;

/// Stores words as arcs in a pair of integer arrays.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie<S: TrieSymbol = char> {
    pub(crate) alphabet: Alphabet<S>,
    pub(crate) base: Vec<i32>,
    pub(crate) check: Vec<i32>,
    pub(crate) tail: TailStore<S>,
    /// Every address from 2 up to (not including) the hint is taken.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) free_hint: State,
}

// The free hint is derived bookkeeping, so it takes no part in equality.
impl<S: TrieSymbol> PartialEq for Trie<S> {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet
            && self.base == other.base
            && self.check == other.check
            && self.tail == other.tail
    }
}

impl<S: TrieSymbol> Eq for Trie<S> {}

impl Trie<char> {
    /// Create a new Trie over the lowercase alphabet.
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::lowercase())
    }
}

impl Default for Trie<char> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TrieSymbol> Trie<S> {
    /// Create a new Trie over the supplied alphabet.
    pub fn with_alphabet(alphabet: Alphabet<S>) -> Self {
        let tail = TailStore::new(alphabet.terminator());
        Self {
            alphabet,
            base: vec![1],
            check: vec![0],
            tail,
            free_hint: ROOT + 1,
        }
    }

    /// Clear the Trie. The alphabet is kept.
    pub fn clear(&mut self) {
        self.base = vec![1];
        self.check = vec![0];
        self.tail.clear();
        self.free_hint = ROOT + 1;
    }

    /// Does the Trie contain the supplied word?
    pub fn contains<W: IntoIterator<Item = S>>(&self, word: W) -> bool {
        self.alphabet
            .encode(word)
            .and_then(|key| self.find(&key))
            .is_some()
    }

    /// Insert the word into the Trie. Returns false if the word was
    /// already present, empty, or holds a symbol outside the alphabet.
    ///
    /// A symbol outside the alphabet has no code and so no address: the
    /// word is rejected as a whole rather than given a branch of its own,
    /// and the Trie is left untouched.
    ///
    /// ```
    /// use darting::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("jar".chars()));
    /// assert!(!trie.insert("jar".chars()));
    /// assert!(!trie.insert("Jar".chars()));
    /// assert!(!trie.contains("Jar".chars()));
    /// ```
    pub fn insert<W: IntoIterator<Item = S>>(&mut self, word: W) -> bool {
        let key = match self.alphabet.encode(word) {
            Some(key) => key,
            None => return false,
        };
        let mut state = ROOT;
        for (arc, &code) in key.codes.iter().enumerate() {
            match self.next_state(state, code) {
                Some(next) if self.check_of(next) == state => {
                    if self.tail_offset(next).is_some() {
                        return self.insert_at_tail(next, &key, arc);
                    }
                    state = next;
                }
                Some(next) if self.is_free(next) => {
                    self.attach(state, next, key.suffix(arc));
                    return true;
                }
                _ => {
                    let state = self.resolve(state, code);
                    return match self.next_state(state, code) {
                        Some(next) if self.is_free(next) => {
                            self.attach(state, next, key.suffix(arc));
                            true
                        }
                        _ => false,
                    };
                }
            }
        }
        // Every arc, terminator included, already exists.
        false
    }

    /// Remove the word from the Trie. Returns true if the word was
    /// present.
    pub fn remove<W: IntoIterator<Item = S>>(&mut self, word: W) -> bool {
        match self.alphabet.encode(word).and_then(|key| self.find(&key)) {
            Some(state) => {
                self.set_base(state, 0);
                self.set_check(state, 0);
                true
            }
            None => false,
        }
    }

    /// The alphabet used to encode words.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// How many symbols, terminator included, does the alphabet hold?
    pub fn alphabet_len(&self) -> usize {
        self.alphabet.len()
    }

    /// Reverse lookup of a code in the alphabet.
    pub fn symbol(&self, code: u32) -> Option<S> {
        self.alphabet.symbol(code)
    }

    /// The base array. Index `i` holds the base of state `i + 1`.
    #[inline(always)]
    pub fn base(&self) -> &[i32] {
        &self.base
    }

    /// The check array. Index `i` holds the owner of address `i + 1`.
    #[inline(always)]
    pub fn check(&self) -> &[i32] {
        &self.check
    }

    /// The tail store, terminators included.
    #[inline(always)]
    pub fn tail(&self) -> &[S] {
        self.tail.symbols()
    }

    /// Next free 1-based offset in the tail store.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.tail.position()
    }

    /// Walk `key` along existing arcs. Returns the state which proves
    /// the word is present: a leaf whose tail matches, or the target of
    /// an explicit terminator arc.
    fn find(&self, key: &Key<S>) -> Option<State> {
        let mut state = ROOT;
        for (arc, &code) in key.codes.iter().enumerate() {
            let next = self.next_state(state, code)?;
            if self.check_of(next) != state {
                return None;
            }
            if let Some(offset) = self.tail_offset(next) {
                return self.tail.matches(offset, key.suffix(arc)).then_some(next);
            }
            state = next;
        }
        Some(state)
    }

    /// Claim the free address `next` for `state` and store the rest of
    /// the word in the tail.
    pub(crate) fn attach(&mut self, state: State, next: State, suffix: &[S]) {
        debug_assert!(self.is_free(next));
        self.set_check(next, state);
        let offset = self.tail.append(suffix);
        self.set_base(next, -(offset as i32));
    }

    #[inline]
    pub(crate) fn base_of(&self, state: State) -> i32 {
        state
            .checked_sub(1)
            .and_then(|idx| self.base.get(idx))
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub(crate) fn check_of(&self, state: State) -> State {
        state
            .checked_sub(1)
            .and_then(|idx| self.check.get(idx))
            .map_or(0, |&owner| usize::try_from(owner).unwrap_or(0))
    }

    pub(crate) fn set_base(&mut self, state: State, value: i32) {
        self.grow(state);
        self.base[state - 1] = value;
    }

    pub(crate) fn set_check(&mut self, state: State, owner: State) {
        self.grow(state);
        self.check[state - 1] = owner as i32;
        if owner == 0 {
            self.free_hint = self.free_hint.min(state).max(ROOT + 1);
        } else if state == self.free_hint {
            while !self.is_free(self.free_hint) {
                self.free_hint += 1;
            }
        }
    }

    fn grow(&mut self, state: State) {
        debug_assert!(state >= ROOT);
        if self.base.len() < state {
            self.base.resize(state, 0);
        }
        if self.check.len() < state {
            self.check.resize(state, 0);
        }
    }

    /// Candidate address of the arc leaving `state` for `code`.
    #[inline]
    pub(crate) fn next_state(&self, state: State, code: u32) -> Option<State> {
        let next = i64::from(self.base_of(state)) + i64::from(code);
        usize::try_from(next).ok().filter(|&next| next >= ROOT)
    }

    /// The root is never free, whatever its check says.
    #[inline]
    pub(crate) fn is_free(&self, state: State) -> bool {
        state > ROOT && self.check_of(state) == 0
    }

    #[inline]
    pub(crate) fn tail_offset(&self, state: State) -> Option<usize> {
        let base = self.base_of(state);
        (base < 0).then(|| base.unsigned_abs() as usize)
    }
}

impl<S: TrieSymbol, W: IntoIterator<Item = S>> Extend<W> for Trie<S> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<W: IntoIterator<Item = char>> FromIterator<W> for Trie<char> {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}
