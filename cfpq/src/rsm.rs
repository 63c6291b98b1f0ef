//! Recursive State Machines: one finite automaton per grammar variable,
//! each accepting the language of that variable's ECFG regex.

use std::collections::HashMap;

use cfg_symbol::Symbol;

use automaton::{Dfa, FiniteAutomaton};

use crate::ecfg::Ecfg;

/// One automaton per variable, jointly defining a grammar's language via
/// mutual recursion (a transition labeled with a variable `B` in `Mₐ`
/// means "recurse into `M_B`").
#[derive(Clone)]
pub struct Rsm {
    automata: HashMap<Symbol, FiniteAutomaton>,
    start: Symbol,
}

impl Rsm {
    pub fn start(&self) -> Symbol {
        self.start
    }

    pub fn automaton_for(&self, variable: Symbol) -> Option<&FiniteAutomaton> {
        self.automata.get(&variable)
    }

    pub fn variables(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.automata.keys().copied()
    }

    /// Builds `Mₐ = regex_to_nfa(Rₐ)` for every variable `A` of `ecfg`.
    pub fn from_ecfg(ecfg: &Ecfg) -> Rsm {
        let automata = ecfg
            .productions()
            .iter()
            .map(|(&variable, regex)| (variable, regex.to_nfa()))
            .collect();
        Rsm {
            automata,
            start: ecfg.start(),
        }
    }

    /// The single-automaton shortcut: a one-variable RSM naming `fa` as the
    /// body of the variable `S`, with `S` itself as the RSM's start symbol.
    pub fn from_fa(fa: FiniteAutomaton, start: Symbol) -> Rsm {
        let mut automata = HashMap::new();
        automata.insert(start, fa);
        Rsm { automata, start }
    }

    /// Replaces each `Mₐ` with its minimized DFA; language-preserving.
    pub fn minimize(&self) -> Rsm {
        let automata = self
            .automata
            .iter()
            .map(|(&variable, fa)| {
                let minimized = Dfa::from_nfa(fa).minimize();
                (variable, dfa_to_nfa(&minimized))
            })
            .collect();
        Rsm {
            automata,
            start: self.start,
        }
    }
}

/// Embeds a DFA back into the shared [`FiniteAutomaton`] representation
/// (a DFA is, after all, just an NFA with no epsilon transitions and at
/// most one outgoing edge per label), so minimized RSMs expose the same
/// type as freshly constructed ones.
fn dfa_to_nfa(dfa: &Dfa) -> FiniteAutomaton {
    let edges: Vec<(usize, Symbol, usize)> = (0..dfa.num_states())
        .flat_map(|s| {
            dfa.labels_from(s)
                .copied()
                .collect::<Vec<_>>()
                .into_iter()
                .map(move |label| (s, label))
        })
        .filter_map(|(s, label)| dfa.step(s, label).map(|to| (s, label, to)))
        .collect();
    let finals: Vec<usize> = (0..dfa.num_states()).filter(|&s| dfa.is_final(s)).collect();
    FiniteAutomaton::from_edges(dfa.num_states(), edges, dfa.start(), finals)
}
