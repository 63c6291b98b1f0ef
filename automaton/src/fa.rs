//! Non-deterministic finite automata with epsilon transitions, built up by
//! Thompson's construction (union, concatenation, Kleene star) over an
//! alphabet of [`Symbol`]s.
//!
//! States are numbered `0..num_states()`; state `0` is always the single
//! start state (multiple start states, where needed, are emulated by
//! epsilon transitions out of state `0`, exactly as in a textbook Thompson
//! construction).

use std::collections::BTreeSet;

use cfg_symbol::Symbol;

/// A state identifier, a plain index into the automaton's state arrays.
pub type State = usize;

/// A non-deterministic finite automaton with epsilon transitions.
#[derive(Clone, Debug)]
pub struct FiniteAutomaton {
    /// `edges[s]` holds every `(label, target)` pair leaving state `s`.
    edges: Vec<Vec<(Symbol, State)>>,
    /// `epsilons[s]` holds every epsilon-target leaving state `s`.
    epsilons: Vec<Vec<State>>,
    finals: Vec<bool>,
}

impl FiniteAutomaton {
    /// The automaton accepting no strings at all (not even the empty one).
    pub fn empty() -> Self {
        FiniteAutomaton {
            edges: vec![Vec::new()],
            epsilons: vec![Vec::new()],
            finals: vec![false],
        }
    }

    /// The automaton accepting only the empty string.
    pub fn epsilon() -> Self {
        FiniteAutomaton {
            edges: vec![Vec::new()],
            epsilons: vec![Vec::new()],
            finals: vec![true],
        }
    }

    /// The automaton accepting exactly the one-symbol string `sym`.
    pub fn symbol(sym: Symbol) -> Self {
        FiniteAutomaton {
            edges: vec![vec![(sym, 1)], Vec::new()],
            epsilons: vec![Vec::new(), Vec::new()],
            finals: vec![false, true],
        }
    }

    /// Builds an automaton directly from an explicit transition table,
    /// e.g. to embed an already-built [`crate::dfa::Dfa`] back into this
    /// shared representation. States are renumbered starting at `1`; a
    /// fresh state `0` becomes the sole start, with an epsilon transition
    /// to `start` (multiple logical start states could be wired the same
    /// way, one epsilon each).
    pub fn from_edges(
        num_states: usize,
        edges: impl IntoIterator<Item = (State, Symbol, State)>,
        start: State,
        finals: impl IntoIterator<Item = State>,
    ) -> FiniteAutomaton {
        let mut fa = FiniteAutomaton {
            edges: vec![Vec::new(); num_states + 1],
            epsilons: vec![Vec::new(); num_states + 1],
            finals: vec![false; num_states + 1],
        };
        for (from, label, to) in edges {
            fa.edges[from + 1].push((label, to + 1));
        }
        for final_state in finals {
            fa.finals[final_state + 1] = true;
        }
        fa.epsilons[0].push(start + 1);
        fa
    }

    /// Number of states in the automaton.
    pub fn num_states(&self) -> usize {
        self.edges.len()
    }

    /// The start state, always `0`.
    pub fn start(&self) -> State {
        0
    }

    /// Whether `state` is accepting.
    pub fn is_final(&self, state: State) -> bool {
        self.finals[state]
    }

    /// States that are accepting.
    pub fn final_states(&self) -> impl Iterator<Item = State> + '_ {
        (0..self.finals.len()).filter(move |&s| self.finals[s])
    }

    /// Symbol-labeled transitions leaving `state`.
    pub fn edges_from(&self, state: State) -> &[(Symbol, State)] {
        &self.edges[state]
    }

    /// Epsilon transitions leaving `state`.
    pub fn epsilons_from(&self, state: State) -> &[State] {
        &self.epsilons[state]
    }

    fn push_state(&mut self) -> State {
        self.edges.push(Vec::new());
        self.epsilons.push(Vec::new());
        self.finals.push(false);
        self.num_states() - 1
    }

    fn add_edge(&mut self, from: State, label: Symbol, to: State) {
        self.edges[from].push((label, to));
    }

    fn add_epsilon(&mut self, from: State, to: State) {
        self.epsilons[from].push(to);
    }

    /// Appends `other`'s states to `self`, returning the offset each of its
    /// state IDs was shifted by.
    fn absorb(&mut self, other: &FiniteAutomaton) -> usize {
        let offset = self.num_states();
        for edges in &other.edges {
            self.edges
                .push(edges.iter().map(|&(sym, to)| (sym, to + offset)).collect());
        }
        for eps in &other.epsilons {
            self.epsilons
                .push(eps.iter().map(|&to| to + offset).collect());
        }
        self.finals.extend(other.finals.iter().copied());
        offset
    }

    /// The set of states reachable from `states` by epsilon transitions alone.
    pub fn epsilon_closure(&self, states: impl IntoIterator<Item = State>) -> BTreeSet<State> {
        let mut reached: BTreeSet<State> = states.into_iter().collect();
        let mut stack: Vec<State> = reached.iter().copied().collect();
        while let Some(state) = stack.pop() {
            for &target in &self.epsilons[state] {
                if reached.insert(target) {
                    stack.push(target);
                }
            }
        }
        reached
    }

    /// Union of two automata: `L(self) ∪ L(other)`. A fresh start state
    /// takes epsilon transitions to both operands' old start states.
    pub fn union(&self, other: &FiniteAutomaton) -> FiniteAutomaton {
        let mut result = FiniteAutomaton::empty();
        let left_offset = result.absorb(self);
        let right_offset = result.absorb(other);
        let new_start = result.push_state();
        result.add_epsilon(new_start, left_offset + self.start());
        result.add_epsilon(new_start, right_offset + other.start());
        result.make_sole_start(new_start)
    }

    /// Concatenation: `L(self) · L(other)`. Every final state of `self`
    /// gains an epsilon transition to `other`'s start state, and the
    /// combined automaton's finals are exactly `other`'s finals.
    pub fn concat(&self, other: &FiniteAutomaton) -> FiniteAutomaton {
        let mut result = FiniteAutomaton::empty();
        let left_offset = result.absorb(self);
        let right_offset = result.absorb(other);
        // `absorb` copies `self`'s finals along with its states; none of
        // them are final in the concatenation, only `other`'s are.
        for final_state in self.final_states() {
            result.finals[left_offset + final_state] = false;
        }
        for final_state in self.final_states() {
            result.add_epsilon(left_offset + final_state, right_offset + other.start());
        }
        let new_start = result.push_state();
        result.add_epsilon(new_start, left_offset + self.start());
        result.make_sole_start(new_start)
    }

    /// Kleene star: `L(self)*`. A fresh start/accept state loops back into
    /// `self` and accepts directly, so the empty string is always included.
    pub fn kleene_star(&self) -> FiniteAutomaton {
        let mut result = FiniteAutomaton::empty();
        let offset = result.absorb(self);
        let new_start = result.push_state();
        result.finals[new_start] = true;
        result.add_epsilon(new_start, offset + self.start());
        for final_state in self.final_states() {
            result.add_epsilon(offset + final_state, new_start);
        }
        result.make_sole_start(new_start)
    }

    /// Drops the placeholder state `0` created by [`FiniteAutomaton::empty`]
    /// during absorption and relabels `designated_start` as state `0`, so
    /// the invariant "state 0 is the start state" keeps holding after a
    /// combinator builds a fresh automaton out of `empty()`.
    fn make_sole_start(mut self, designated_start: State) -> FiniteAutomaton {
        // `empty()`'s placeholder state 0 has no edges and is never final,
        // so it is harmless to keep around; we instead swap it with the
        // designated start so callers always see start state 0.
        if designated_start != 0 {
            self.edges.swap(0, designated_start);
            self.epsilons.swap(0, designated_start);
            self.finals.swap(0, designated_start);
            remap_state(&mut self, 0, designated_start);
        }
        self
    }
}

/// Rewrites every reference to state `a` as `b` and vice versa, used to keep
/// transition targets consistent after swapping two states' rows.
fn remap_state(fa: &mut FiniteAutomaton, a: State, b: State) {
    let swap = |s: State| if s == a { b } else if s == b { a } else { s };
    for edges in &mut fa.edges {
        for (_, to) in edges.iter_mut() {
            *to = swap(*to);
        }
    }
    for eps in &mut fa.epsilons {
        for to in eps.iter_mut() {
            *to = swap(*to);
        }
    }
}
