//! Definitions of the context-free grammar type and its rules.

use cfg_symbol::{Symbol, SymbolSource};

/// A single production: `lhs -> rhs`. An empty `rhs` is an epsilon production.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rule {
    /// The rule's left-hand side symbol. Always a variable.
    pub lhs: Symbol,
    /// The rule's right-hand side, a string of symbols. Empty means epsilon.
    pub rhs: Vec<Symbol>,
}

impl Rule {
    /// Whether this is an epsilon production (`lhs -> ε`).
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Whether this is a WCNF binary production (`lhs -> A B`).
    pub fn is_binary(&self) -> bool {
        self.rhs.len() == 2
    }

    /// Whether this is a unit production (`lhs -> A` for a single variable `A`).
    pub fn is_unit(&self, grammar: &Cfg) -> bool {
        self.rhs.len() == 1 && grammar.is_variable(self.rhs[0])
    }
}

/// A reference into a grammar's rule array, as `(lhs, rhs)`.
#[derive(Clone, Copy, Debug)]
pub struct RuleRef<'a> {
    /// The rule's left-hand side.
    pub lhs: Symbol,
    /// The rule's right-hand side.
    pub rhs: &'a [Symbol],
}

impl<'a> RuleRef<'a> {
    /// Whether this is an epsilon production (`lhs -> ε`).
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Whether this is a WCNF binary production (`lhs -> A B`).
    pub fn is_binary(&self) -> bool {
        self.rhs.len() == 2
    }

    /// Whether this is a unit production (`lhs -> A` for a single variable `A`).
    pub fn is_unit(&self, grammar: &Cfg) -> bool {
        self.rhs.len() == 1 && grammar.is_variable(self.rhs[0])
    }
}

/// Context-free grammar type.
///
/// A context-free grammar can be thought of as a regular expression equipped
/// with recursion: a finite set of variables, a finite set of terminals, a
/// start variable, and a finite set of productions rewriting a variable into
/// a string of variables and terminals.
#[derive(Clone, Debug)]
pub struct Cfg {
    sym_source: SymbolSource,
    rules: Vec<Rule>,
    start: Option<Symbol>,
}

impl Default for Cfg {
    fn default() -> Self {
        Self::new()
    }
}

impl Cfg {
    /// Creates an empty grammar.
    pub fn new() -> Self {
        Cfg {
            sym_source: SymbolSource::new(),
            rules: vec![],
            start: None,
        }
    }

    /// Creates an empty grammar sharing the given symbol source, so that
    /// symbols can be carried over from another grammar under transformation.
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        Cfg {
            sym_source,
            rules: vec![],
            start: None,
        }
    }

    /// Returns an immutable reference to the grammar's symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns a mutable reference to the grammar's symbol source.
    pub fn sym_source_mut(&mut self) -> &mut SymbolSource {
        &mut self.sym_source
    }

    /// Generates `N` fresh symbols from this grammar's symbol source.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        self.sym_source.sym()
    }

    /// Interns a named symbol, inferring its kind (terminal/variable) from
    /// its name's leading character.
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.sym_source.intern(name)
    }

    /// Returns the number of symbols known to this grammar.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Starts building rules with the given left-hand side. See [`RuleBuilder`].
    pub fn rule(&mut self, lhs: Symbol) -> crate::rule_builder::RuleBuilder<'_> {
        crate::rule_builder::RuleBuilder::new(self, lhs)
    }

    /// Adds a single production directly.
    pub fn add_rule(&mut self, lhs: Symbol, rhs: Vec<Symbol>) {
        self.rules.push(Rule { lhs, rhs });
    }

    /// Returns the grammar's start (root) variable, if one was set.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Sets the grammar's start variable.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Iterates over the grammar's rules.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        self.rules.iter().map(|r| RuleRef {
            lhs: r.lhs,
            rhs: &r.rhs[..],
        })
    }

    /// Returns the number of rules in the grammar.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Keeps only the rules for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(RuleRef) -> bool,
    {
        self.rules.retain(|r| {
            predicate(RuleRef {
                lhs: r.lhs,
                rhs: &r.rhs[..],
            })
        });
    }

    /// True if `sym` appears as some rule's left-hand side anywhere in the
    /// grammar, i.e. it is (at least nominally) a variable.
    pub fn is_variable(&self, sym: Symbol) -> bool {
        matches!(
            self.sym_source.kind_of(sym),
            cfg_symbol::SymbolKind::Variable
        ) || self.rules.iter().any(|r| r.lhs == sym)
    }
}
