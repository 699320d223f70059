//! Making room in the double array.
//!
//! When the address an arc needs is owned by another state, one of the
//! two states has all of its arcs moved to a fresh region found by a
//! cross-check scan. When a new word runs into a leaf, the shared part
//! of the two remainders is unfolded into explicit states and the leaf
//! splits into two.

use crate::alphabet::{Key, TrieSymbol};
use crate::trie::{State, Trie, ROOT};

impl<S: TrieSymbol> Trie<S> {
    /// The smallest base q >= 1 for which `q + code` is free for every
    /// code. Addresses below the free hint are all taken, so no base
    /// that puts the smallest code there can fit.
    pub(crate) fn x_check(&self, codes: &[u32]) -> State {
        let hint = self.free_hint.max(ROOT + 1);
        let mut base = codes
            .iter()
            .min()
            .map_or(ROOT, |&code| hint.saturating_sub(code as usize).max(ROOT));
        while !codes.iter().all(|&code| self.is_free(base + code as usize)) {
            base += 1;
        }
        base
    }

    /// Codes of the arcs leaving `state`, in ascending order.
    pub(crate) fn arcs(&self, state: State) -> Vec<u32> {
        if self.base_of(state) < 0 {
            return vec![];
        }
        self.alphabet
            .codes()
            .filter(|&code| {
                self.next_state(state, code)
                    .is_some_and(|next| next > ROOT && self.check_of(next) == state)
            })
            .collect()
    }

    /// Free the address `state` needs for `code` by moving the smaller of
    /// the two competing arc sets. Returns where `state` lives afterwards.
    pub(crate) fn resolve(&mut self, state: State, code: u32) -> State {
        let owner = self
            .next_state(state, code)
            .filter(|&next| next > ROOT)
            .map_or(0, |next| self.check_of(next));
        let own = self.arcs(state);
        let theirs = if owner == 0 {
            vec![]
        } else {
            self.arcs(owner)
        };

        if owner == 0 || own.len() + 1 < theirs.len() {
            let mut wanted = own.clone();
            wanted.push(code);
            let base = self.x_check(&wanted);
            self.relocate(state, base, &own);
            state
        } else {
            let base = self.x_check(&theirs);
            self.relocate(owner, base, &theirs)
                .into_iter()
                .find(|&(old, _)| old == state)
                .map_or(state, |(_, new)| new)
        }
    }

    /// Give `state` a new base, moving the targets of `codes` along with
    /// it. Returns the (old, new) address of every moved target.
    pub(crate) fn relocate(
        &mut self,
        state: State,
        new_base: State,
        codes: &[u32],
    ) -> Vec<(State, State)> {
        let mut moved = Vec::with_capacity(codes.len());
        for &code in codes {
            let Some(old) = self.next_state(state, code) else {
                continue;
            };
            let new = new_base + code as usize;
            self.set_check(new, state);
            self.set_base(new, self.base_of(old));
            moved.push((old, new));
        }
        self.set_base(state, new_base as i32);

        // Children of a moved target still name its old address.
        let mut pending = moved.clone();
        while let Some((old, new)) = pending.pop() {
            for child in self.arcs_owned_by(new, old) {
                self.set_check(child, new);
            }
            self.set_base(old, 0);
            self.set_check(old, 0);
        }
        moved
    }

    /// Addresses reachable from the base of `from` whose check names
    /// `owner`.
    fn arcs_owned_by(&self, from: State, owner: State) -> Vec<State> {
        if self.base_of(from) <= 0 {
            return vec![];
        }
        self.alphabet
            .codes()
            .filter_map(|code| self.next_state(from, code))
            .filter(|&next| next > ROOT && self.check_of(next) == owner)
            .collect()
    }

    /// The walk reached `leaf` through `arc`. Split the leaf so that its
    /// stored remainder and the remainder of `key` part ways at their
    /// first difference. Returns false if the remainders are equal.
    pub(crate) fn insert_at_tail(&mut self, leaf: State, key: &Key<S>, arc: usize) -> bool {
        let offset = match self.tail_offset(leaf) {
            Some(offset) => offset,
            None => return false,
        };
        let old = self.tail.read(offset).to_vec();
        let new = key.suffix(arc);
        if old.as_slice() == new {
            return false;
        }
        let shared = old.iter().zip(new).take_while(|(a, b)| a == b).count();

        // A remainder that has run out parts on the terminator.
        let terminator = self.alphabet.terminator_code();
        let mut codes = Vec::with_capacity(shared + 1);
        for &symbol in &old[..shared] {
            match self.alphabet.code(symbol) {
                Some(code) => codes.push(code),
                None => return false,
            }
        }
        let old_code = match old.get(shared) {
            Some(&symbol) => match self.alphabet.code(symbol) {
                Some(code) => code,
                None => return false,
            },
            None => terminator,
        };
        let new_code = match new.get(shared) {
            Some(&symbol) => match self.alphabet.code(symbol) {
                Some(code) => code,
                None => return false,
            },
            None => terminator,
        };

        let mut state = leaf;
        for code in codes {
            let base = self.x_check(&[code]);
            self.set_base(state, base as i32);
            let next = base + code as usize;
            self.set_check(next, state);
            state = next;
        }

        let base = self.x_check(&[old_code, new_code]);
        self.set_base(state, base as i32);

        let old_leaf = base + old_code as usize;
        self.set_check(old_leaf, state);
        self.tail.rewrite(offset, &old[(shared + 1).min(old.len())..]);
        self.set_base(old_leaf, -(offset as i32));

        let new_leaf = base + new_code as usize;
        self.attach(state, new_leaf, &new[(shared + 1).min(new.len())..]);
        true
    }
}
