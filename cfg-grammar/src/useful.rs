//! Analysis of rule usefulness: a symbol is useful iff it is both reachable
//! from the start symbol and productive (derives some terminal string).
//! Removing useless rules never changes the grammar's language.

use bit_matrix::BitMatrix;
use bit_vec::BitVec;
use cfg_symbol::Symbol;

use crate::cfg::{Cfg, RuleRef};
use crate::rhs_closure::RhsClosure;

/// Direct-derivation matrix: `M[A][B]` iff some rule has LHS `A` and `B`
/// occurs in its RHS, plus `M[A][A]` for every LHS `A`.
fn direct_derivation_matrix(grammar: &Cfg) -> BitMatrix {
    let num_syms = grammar.num_syms();
    let mut derivation = BitMatrix::new(num_syms, num_syms);
    for rule in grammar.rules() {
        derivation.set(rule.lhs.usize(), rule.lhs.usize(), true);
        for &sym in rule.rhs {
            derivation.set(rule.lhs.usize(), sym.usize(), true);
        }
    }
    derivation
}

/// Reachability matrix: the reflexive-transitive closure of direct derivation.
/// `M[A][B]` iff `B` occurs in some string derivable from `A`.
pub fn reachability_matrix(grammar: &Cfg) -> BitMatrix {
    let mut result = direct_derivation_matrix(grammar);
    result.transitive_closure();
    result.reflexive_closure();
    result
}

fn productive_syms(grammar: &Cfg) -> BitVec {
    let mut productive = grammar.terminal_symbols().into_bit_vec();
    let nulling = grammar.nulling_symbols();
    for sym in nulling.iter() {
        productive.set(sym.usize(), true);
    }
    RhsClosure::new(grammar).rhs_closure(&mut productive);
    productive
}

/// Contains the information about usefulness of the grammar's rules. A
/// useful rule is one whose LHS is reachable from the start symbol and
/// whose entire RHS is productive.
pub struct Usefulness<'a> {
    grammar: &'a Cfg,
    reachability: BitMatrix,
    reachable_syms: BitVec,
    productivity: BitVec,
}

impl<'a> Usefulness<'a> {
    /// Analyzes usefulness of the grammar's rules relative to its start symbol.
    pub fn new(grammar: &'a Cfg) -> Self {
        let productivity = productive_syms(grammar);
        let reachability = reachability_matrix(grammar);
        let mut reachable_syms = BitVec::from_elem(grammar.num_syms(), false);
        if let Some(start) = grammar.start() {
            for sym in 0..grammar.num_syms() {
                if reachability[(start.usize(), sym)] {
                    reachable_syms.set(sym, true);
                }
            }
        } else {
            reachable_syms = BitVec::from_elem(grammar.num_syms(), true);
        }

        Usefulness {
            grammar,
            reachability,
            reachable_syms,
            productivity,
        }
    }

    /// Checks whether a symbol is productive.
    pub fn is_productive(&self, sym: Symbol) -> bool {
        self.productivity[sym.usize()]
    }

    /// Checks whether a symbol is reachable from the start symbol.
    pub fn is_reachable(&self, sym: Symbol) -> bool {
        self.reachable_syms[sym.usize()]
    }

    /// Checks whether every rule in the grammar is useful.
    pub fn all_useful(&self) -> bool {
        self.rule_is_useful_iter().all(|useful| useful)
    }

    fn rule_is_useful_iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.grammar.rules().map(move |rule| self.rule_is_useful(rule))
    }

    fn rule_is_useful(&self, rule: RuleRef) -> bool {
        let productive = rule.rhs.iter().all(|&sym| self.productivity[sym.usize()]);
        let reachable = self.reachable_syms[rule.lhs.usize()];
        productive && reachable
    }
}

impl Cfg {
    /// Analyzes usefulness of this grammar's rules.
    pub fn usefulness(&self) -> Usefulness<'_> {
        Usefulness::new(self)
    }

    /// Removes every useless rule (unreachable from the start symbol, or
    /// whose body is not fully productive). The grammar's language is
    /// unchanged.
    pub fn remove_useless_rules(&mut self) {
        let usefulness = Usefulness::new(self);
        if !usefulness.all_useful() {
            let productivity = usefulness.productivity.clone();
            let reachable_syms = usefulness.reachable_syms.clone();
            self.retain(|rule| {
                let productive = rule.rhs.iter().all(|&sym| productivity[sym.usize()]);
                let reachable = reachable_syms[rule.lhs.usize()];
                productive && reachable
            });
        }
    }
}
