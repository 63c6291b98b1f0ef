//! Subset construction (determinization) and Moore-style minimization of
//! finite automata.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use cfg_symbol::Symbol;

use crate::fa::{FiniteAutomaton, State};

/// A deterministic finite automaton: at most one transition per symbol per
/// state, no epsilon transitions.
#[derive(Clone, Debug)]
pub struct Dfa {
    transitions: Vec<BTreeMap<Symbol, State>>,
    start: State,
    finals: Vec<bool>,
}

impl Dfa {
    pub fn num_states(&self) -> usize {
        self.transitions.len()
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn is_final(&self, state: State) -> bool {
        self.finals[state]
    }

    pub fn step(&self, state: State, sym: Symbol) -> Option<State> {
        self.transitions[state].get(&sym).copied()
    }

    /// Labels with an outgoing transition from `state`.
    pub fn labels_from(&self, state: State) -> impl Iterator<Item = &Symbol> {
        self.transitions[state].keys()
    }

    /// Runs `input` from the start state, returning whether it is accepted.
    pub fn accepts(&self, input: impl IntoIterator<Item = Symbol>) -> bool {
        let mut state = self.start;
        for sym in input {
            match self.step(state, sym) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_final(state)
    }

    /// Determinizes `nfa` via the subset construction: each DFA state is the
    /// epsilon closure of a reachable set of NFA states.
    pub fn from_nfa(nfa: &FiniteAutomaton) -> Self {
        let start_set = nfa.epsilon_closure([nfa.start()]);

        let mut subset_ids: HashMap<BTreeSet<State>, usize> = HashMap::new();
        let mut transitions: Vec<BTreeMap<Symbol, State>> = Vec::new();
        let mut finals: Vec<bool> = Vec::new();

        subset_ids.insert(start_set.clone(), 0);
        transitions.push(BTreeMap::new());
        finals.push(start_set.iter().any(|&s| nfa.is_final(s)));

        let mut queue = VecDeque::new();
        queue.push_back(start_set);

        while let Some(subset) = queue.pop_front() {
            let from_id = subset_ids[&subset];

            let mut by_symbol: BTreeMap<Symbol, BTreeSet<State>> = BTreeMap::new();
            for &state in &subset {
                for &(label, target) in nfa.edges_from(state) {
                    by_symbol.entry(label).or_default().insert(target);
                }
            }

            for (label, targets) in by_symbol {
                let closure: BTreeSet<State> = nfa.epsilon_closure(targets);
                let to_id = *subset_ids.entry(closure.clone()).or_insert_with(|| {
                    transitions.push(BTreeMap::new());
                    finals.push(closure.iter().any(|&s| nfa.is_final(s)));
                    queue.push_back(closure.clone());
                    transitions.len() - 1
                });
                transitions[from_id].insert(label, to_id);
            }
        }

        Dfa {
            transitions,
            start: 0,
            finals,
        }
    }

    /// Minimizes the DFA by Moore's algorithm: states start partitioned by
    /// finality, and the partition is refined until no refinement step
    /// splits a block, yielding the coarsest stable partition.
    pub fn minimize(&self) -> Dfa {
        let n = self.num_states();
        let alphabet: BTreeSet<Symbol> = self
            .transitions
            .iter()
            .flat_map(|row| row.keys().copied())
            .collect();

        let mut class_of: Vec<usize> = (0..n)
            .map(|s| if self.finals[s] { 1 } else { 0 })
            .collect();
        let mut num_classes = if class_of.contains(&1) { 2 } else { 1 };

        loop {
            let mut signature_to_class: HashMap<Vec<Option<usize>>, usize> = HashMap::new();
            let mut new_class_of = vec![0; n];

            for state in 0..n {
                let signature: Vec<Option<usize>> = alphabet
                    .iter()
                    .map(|&sym| self.step(state, sym).map(|to| class_of[to]))
                    .collect();
                // Keep states in different old classes apart even if their
                // transition signatures coincide.
                let key: Vec<Option<usize>> = std::iter::once(Some(class_of[state]))
                    .chain(signature)
                    .collect();
                let next_id = signature_to_class.len();
                let class = *signature_to_class.entry(key).or_insert(next_id);
                new_class_of[state] = class;
            }

            let new_num_classes = signature_to_class.len();
            log::trace!("dfa minimize: refined to {new_num_classes} classes (from {num_classes})");
            if new_num_classes == num_classes {
                class_of = new_class_of;
                break;
            }
            class_of = new_class_of;
            num_classes = new_num_classes;
        }

        let mut transitions = vec![BTreeMap::new(); num_classes];
        let mut finals = vec![false; num_classes];
        let mut seen = vec![false; num_classes];

        for state in 0..n {
            let class = class_of[state];
            if seen[class] {
                continue;
            }
            seen[class] = true;
            finals[class] = self.finals[state];
            for (&sym, &to) in &self.transitions[state] {
                transitions[class].insert(sym, class_of[to]);
            }
        }

        Dfa {
            transitions,
            start: class_of[self.start],
            finals,
        }
    }
}
