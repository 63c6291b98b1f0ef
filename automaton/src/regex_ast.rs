//! A regular-expression AST shared by the two concrete regex syntaxes the
//! crate accepts (the ECFG grammar-text mini-language and standard regex
//! query strings), so both compile down through one Thompson construction.

use cfg_symbol::Symbol;

use crate::fa::FiniteAutomaton;

/// A regular expression over an alphabet of [`Symbol`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Regex {
    /// Matches nothing, not even the empty string.
    Empty,
    /// Matches only the empty string.
    Epsilon,
    /// Matches exactly one occurrence of a symbol.
    Symbol(Symbol),
    /// Matches `a` followed by `b`.
    Concat(Box<Regex>, Box<Regex>),
    /// Matches `a` or `b`.
    Union(Box<Regex>, Box<Regex>),
    /// Matches zero or more repetitions of `a`.
    Star(Box<Regex>),
}

impl Regex {
    pub fn concat(self, other: Regex) -> Regex {
        Regex::Concat(Box::new(self), Box::new(other))
    }

    pub fn union(self, other: Regex) -> Regex {
        Regex::Union(Box::new(self), Box::new(other))
    }

    pub fn star(self) -> Regex {
        Regex::Star(Box::new(self))
    }

    pub fn plus(self) -> Regex {
        self.clone().concat(self.star())
    }

    pub fn optional(self) -> Regex {
        Regex::Union(Box::new(self), Box::new(Regex::Epsilon))
    }

    /// Compiles this expression into an equivalent epsilon-NFA by Thompson's
    /// construction.
    pub fn to_nfa(&self) -> FiniteAutomaton {
        match self {
            Regex::Empty => FiniteAutomaton::empty(),
            Regex::Epsilon => FiniteAutomaton::epsilon(),
            Regex::Symbol(sym) => FiniteAutomaton::symbol(*sym),
            Regex::Concat(a, b) => a.to_nfa().concat(&b.to_nfa()),
            Regex::Union(a, b) => a.to_nfa().union(&b.to_nfa()),
            Regex::Star(a) => a.to_nfa().kleene_star(),
        }
    }
}

/// Builds the concatenation of a sequence of regexes, left to right.
/// An empty sequence is the empty word, `Epsilon`.
pub fn concat_all(parts: impl IntoIterator<Item = Regex>) -> Regex {
    parts
        .into_iter()
        .fold(None, |acc, part| {
            Some(match acc {
                None => part,
                Some(acc) => acc.concat(part),
            })
        })
        .unwrap_or(Regex::Epsilon)
}

/// Builds the union of a sequence of regexes, left to right. An empty
/// sequence is `Empty`, the regex matching nothing.
pub fn union_all(parts: impl IntoIterator<Item = Regex>) -> Regex {
    parts
        .into_iter()
        .fold(None, |acc, part| {
            Some(match acc {
                None => part,
                Some(acc) => acc.union(part),
            })
        })
        .unwrap_or(Regex::Empty)
}
