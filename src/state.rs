//! Export and import of the raw trie state.
//!
//! A [`TrieState`] is a plain copy of the base and check arrays, the
//! tail store and its cursor. It carries no alphabet: a state only
//! makes sense when loaded into a Trie built over the alphabet that
//! produced it.
//!
//! ```
//! use darting::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("bachelor".chars());
//! let state = trie.state();
//!
//! let mut copy = Trie::new();
//! copy.set_state(state);
//! assert!(copy.contains("bachelor".chars()));
//! ```

use crate::alphabet::TrieSymbol;
use crate::trie::{Trie, ROOT};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Snapshot of everything a Trie stores besides its alphabet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct TrieState<S> {
    pub base: Vec<i32>,
    pub check: Vec<i32>,
    pub tail: Vec<S>,
    pub position: usize,
}

impl<S: TrieSymbol> Trie<S> {
    /// Copy out the current state.
    pub fn state(&self) -> TrieState<S> {
        TrieState {
            base: self.base.clone(),
            check: self.check.clone(),
            tail: self.tail.symbols().to_vec(),
            position: self.tail.position(),
        }
    }

    /// Replace the current state wholesale. The state is not checked:
    /// an inconsistent state makes lookups report arbitrary results, but
    /// never panics.
    pub fn set_state(&mut self, state: TrieState<S>) {
        let TrieState {
            base,
            check,
            tail,
            position,
        } = state;
        self.base = base;
        self.check = check;
        self.tail.replace(tail, position);
        self.free_hint = ROOT + 1;
    }

    /// Replace the current state with copies of the supplied slices.
    pub fn set_raw_state(&mut self, base: &[i32], check: &[i32], tail: &[S], position: usize) {
        self.base = base.to_vec();
        self.check = check.to_vec();
        self.tail.replace(tail.to_vec(), position);
        self.free_hint = ROOT + 1;
    }
}
