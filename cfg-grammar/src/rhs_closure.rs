//! RHS closure: propagates a symbol property "up" through rules whose
//! right-hand side is entirely made of symbols that already have the
//! property. In some sense, it is a reverse of breadth-first search.
//!
//! This is the fixed-point engine behind productive-symbol computation in
//! [`crate::useful`]: a variable is productive once every symbol in some
//! production's body is productive.

use std::cmp;

use bit_vec::BitVec;
use cfg_symbol::Symbol;

use crate::cfg::{Cfg, RuleRef};

struct Derivation<'a> {
    sym: Symbol,
    rule_ref: RuleRef<'a>,
}

impl<'a> Ord for Derivation<'a> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.sym.cmp(&other.sym)
    }
}

impl<'a> PartialOrd for Derivation<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Eq for Derivation<'a> {}

impl<'a> PartialEq for Derivation<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.sym == other.sym
    }
}

fn find(sorted: &[Derivation<'_>], sym: Symbol) -> &[Derivation<'_>] {
    let start = sorted.partition_point(|d| d.sym < sym);
    let end = sorted.partition_point(|d| d.sym <= sym);
    &sorted[start..end]
}

/// Computes the RHS transitive closure of a symbol property over a grammar's
/// rules, reusing the same inverse-derivation index across repeated calls.
pub struct RhsClosure<'a> {
    inverse_derivation: Vec<Derivation<'a>>,
    work_stack: Vec<Symbol>,
}

impl<'a> RhsClosure<'a> {
    /// Records the information needed to calculate the RHS transitive closure.
    pub fn new(grammar: &'a Cfg) -> Self {
        let mut inverse_derivation = Vec::new();
        for rule in grammar.rules() {
            inverse_derivation.extend(rule.rhs.iter().map(|&sym| Derivation { sym, rule_ref: rule }));
        }
        inverse_derivation.sort();

        RhsClosure {
            inverse_derivation,
            work_stack: vec![],
        }
    }

    /// Grows `property` to its closure: whenever every symbol in some rule's
    /// RHS has the property, the rule's LHS gains it too, repeated to a fixed
    /// point.
    pub fn rhs_closure(&mut self, property: &mut BitVec) {
        for (sym_id, sym_has_property) in property.iter().enumerate() {
            if sym_has_property {
                self.work_stack.push(Symbol::from(sym_id));
            }
        }

        let inverse_derivation = &self.inverse_derivation[..];
        while let Some(work_sym) = self.work_stack.pop() {
            for derivation in find(inverse_derivation, work_sym) {
                if !property[derivation.rule_ref.lhs.usize()]
                    && derivation
                        .rule_ref
                        .rhs
                        .iter()
                        .all(|sym| property[sym.usize()])
                {
                    property.set(derivation.rule_ref.lhs.usize(), true);
                    self.work_stack.push(derivation.rule_ref.lhs);
                }
            }
        }
    }
}
