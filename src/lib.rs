//! Provides a compact double-array Trie for dictionary lookups. Words
//! are sequences of symbols drawn from an [`crate::alphabet::Alphabet`].
//!
//! The trie keeps no node objects. States are integers and arcs are
//! encoded in two parallel integer arrays (`base` and `check`), while
//! unbranched word endings are compressed into a flat tail store. This
//! makes for far smaller dictionaries than a pointer based trie, at the
//! cost of relocating arcs when two states compete for an address.
//!
//! The interface relies on iterators to insert, remove and check for the
//! existence of words, so anything which yields symbols can be used:
//! `"word".chars()`, an array of chars, or grapheme clusters.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * alphabet : [`crate::alphabet`]
//! * state : [`crate::state`]
//!
//! Typical usages for this data structure:
//!  - Spell checking
//!  - Stop word and keyword lists
//!  - Storing large dictionaries with significant amounts of
//!    prefix sharing
//!
//! Removing a word does not reclaim its storage, so a trie which sees
//! many insert/remove cycles keeps growing. Rebuild it (or `clear` it)
//! to compact it.

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod alphabet;

pub mod error;

mod resolve;

pub mod state;

mod tail;

pub mod trie;
