//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use cfg_symbol::Symbol;

use crate::cfg::Cfg;

/// The rule builder. Lets callers write `cfg.rule(a).rhs([b, c]).rule(d).rhs([e])`.
pub struct RuleBuilder<'a> {
    lhs: Symbol,
    grammar: &'a mut Cfg,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder for the given left-hand side.
    pub fn new(grammar: &'a mut Cfg, lhs: Symbol) -> Self {
        RuleBuilder { lhs, grammar }
    }

    /// Switches to building rules with a new left-hand side.
    pub fn rule(self, lhs: Symbol) -> Self {
        RuleBuilder {
            lhs,
            grammar: self.grammar,
        }
    }

    /// Adds a rule alternative `lhs -> syms` to the grammar.
    pub fn rhs(self, syms: impl AsRef<[Symbol]>) -> Self {
        self.grammar.add_rule(self.lhs, syms.as_ref().to_vec());
        self
    }
}
