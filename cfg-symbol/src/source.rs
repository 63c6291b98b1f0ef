//! Our symbol source. You can grab symbols from here.
//!
//! A symbol source is meant to track the number of symbols that were
//! generated, as well as their names (optionally) and their kind (terminal,
//! variable, or the distinguished epsilon symbol).

use std::{
    borrow::{Borrow, Cow},
    collections::HashMap,
    rc::Rc,
};

use crate::Symbol;

/// Wrapper for a string holding a symbol's name. Meant to be cheap to clone.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SymbolName {
    name: Rc<str>,
}

impl std::ops::Deref for SymbolName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.name[..]
    }
}

impl From<Cow<'_, str>> for SymbolName {
    fn from(value: Cow<'_, str>) -> Self {
        SymbolName {
            name: Rc::from(&*value),
        }
    }
}

impl<'a> From<&'a str> for SymbolName {
    fn from(value: &'a str) -> Self {
        SymbolName {
            name: Rc::from(value),
        }
    }
}

impl Borrow<str> for SymbolName {
    fn borrow(&self) -> &str {
        &self.name[..]
    }
}

/// The grammatical sort a symbol belongs to.
///
/// Terminals and variables partition the symbol space; [`SymbolKind::Epsilon`]
/// names the distinguished empty-word symbol, which appears in rule bodies but
/// is never itself a rule head.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SymbolKind {
    /// A terminal symbol (by convention, a lowercase-leading name).
    Terminal,
    /// A variable, a.k.a. nonterminal (by convention, an uppercase-leading name).
    Variable,
    /// The empty-word symbol, epsilon.
    Epsilon,
}

/// Infers a symbol's kind from the leading character of its name, the
/// convention used throughout the grammar text format (see [`SymbolKind`]).
pub fn kind_of_name(name: &str) -> SymbolKind {
    match name.chars().next() {
        None => SymbolKind::Epsilon,
        Some(c) if c.is_uppercase() => SymbolKind::Variable,
        Some(_) => SymbolKind::Terminal,
    }
}

/// A source of numeric symbols, handing out fresh [`Symbol`]s and recording
/// their names and kinds so callers can reconstruct a human-readable grammar.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    num_syms: usize,
    names: Vec<Option<SymbolName>>,
    kinds: Vec<SymbolKind>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        SymbolSource {
            num_syms: 0,
            names: vec![],
            kinds: vec![],
        }
    }

    /// Generates a new unique symbol, optionally named.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let sym = Symbol::from(self.num_syms);
        self.num_syms += 1;
        let kind = name
            .as_deref()
            .map(kind_of_name)
            .unwrap_or(SymbolKind::Variable);
        self.names.push(name.map(SymbolName::from));
        self.kinds.push(kind);
        sym
    }

    /// Generates `N` fresh, unnamed symbols at once. Unnamed (gensym) symbols
    /// default to [`SymbolKind::Variable`]; this is how WCNF normalization
    /// mints the fresh variables it introduces.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Symbol::from(0usize); N];
        for dest in result.iter_mut() {
            *dest = self.next_sym(None);
        }
        result
    }

    /// Interns (or reuses) a symbol by name, inferring its kind from the name.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(i) = self.names.iter().position(|n| n.as_deref() == Some(name)) {
            return Symbol::from(i);
        }
        self.next_sym(Some(Cow::Owned(name.to_owned())))
    }

    /// Returns either the formatted name if the given `Symbol` is a gensym,
    /// or the `Symbol`'s exact name.
    ///
    /// Gensyms have no name of their own, so we synthesize one from the
    /// letter `G` followed by the symbol's numeric value. Gensyms default to
    /// [`SymbolKind::Variable`] (see [`SymbolSource::next_sym`]), so the
    /// synthesized name is kept uppercase-leading: callers that infer a
    /// symbol's kind from its name (e.g. re-parsing grammar text written out
    /// with this name) must still see it as a variable, not a terminal.
    pub fn name_of(&self, sym: Symbol) -> Cow<'_, str> {
        match self.names.get(sym.usize()) {
            Some(Some(name)) => Cow::Borrowed(&name[..]),
            Some(None) | None => Cow::Owned(format!("G{}", sym.usize())),
        }
    }

    /// Returns the exact name, or `None` if the `Symbol` has no name (i.e. is
    /// a gensym).
    pub fn original_name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|v| v.as_deref())
    }

    /// Returns the symbol's kind: terminal, variable, or epsilon.
    pub fn kind_of(&self, sym: Symbol) -> SymbolKind {
        self.kinds.get(sym.usize()).copied().unwrap_or(SymbolKind::Variable)
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.num_syms
    }

    /// Returns an iterator that generates fresh symbols, starting at the
    /// lowest unused numeric value.
    pub fn generate(&mut self) -> impl Iterator<Item = Symbol> + '_ {
        std::iter::from_fn(move || Some(self.next_sym(None)))
    }

    /// Creates a `HashMap` where you can access a `Symbol` through its name.
    pub fn name_map(&self) -> HashMap<SymbolName, Symbol> {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(i, opt)| opt.clone().map(|name| (name, Symbol::from(i))))
            .collect()
    }
}
