//! Tracks which symbols are terminal, nulling, or otherwise have some
//! grammar-wide property, as a bit vector indexed by symbol.

use std::{iter, ops};

use bit_vec::BitVec;
use cfg_symbol::Symbol;

use crate::cfg::Cfg;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl Default for SymbolBitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` with every symbol in `grammar` set to `elem`.
    pub fn from_elem(grammar: &Cfg, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(grammar.num_syms(), elem),
        }
    }

    fn reset(&mut self, num_syms: usize) {
        self.bit_vec = BitVec::from_elem(num_syms, false);
    }

    /// Sets the bit set to contain every symbol that occurs somewhere
    /// (as an LHS or in some RHS) in the grammar.
    pub fn used(&mut self, grammar: &Cfg) {
        self.reset(grammar.num_syms());
        for rule in grammar.rules() {
            self.set(rule.lhs, true);
            for &sym in rule.rhs {
                self.set(sym, true);
            }
        }
    }

    /// Sets the bit set to the terminal symbols: those that never appear as
    /// a rule's left-hand side.
    pub fn terminal(&mut self, grammar: &Cfg) {
        self.bit_vec = BitVec::from_elem(grammar.num_syms(), true);
        for rule in grammar.rules() {
            self.set(rule.lhs, false);
        }
    }

    /// Sets the bit set to the nulling symbols: those with an epsilon production.
    pub fn nulling(&mut self, grammar: &Cfg) {
        if self.bit_vec.is_empty() {
            self.reset(grammar.num_syms());
        }
        for rule in grammar.rules() {
            if rule.rhs.is_empty() {
                self.set(rule.lhs, true);
            }
        }
    }

    pub fn set(&mut self, index: Symbol, elem: bool) {
        self.bit_vec.set(index.usize(), elem);
    }

    pub fn bit_vec(&self) -> &BitVec {
        &self.bit_vec
    }

    /// Converts into a bit vector.
    pub fn into_bit_vec(self) -> BitVec {
        self.bit_vec
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    pub fn union(&mut self, other: &SymbolBitSet) {
        self.bit_vec.or(&other.bit_vec);
    }

    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bit_vec.is_empty()
    }

    pub fn all(&self) -> bool {
        self.bit_vec.iter().all(|b| b)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.bit_vec[index.usize()] {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl Cfg {
    /// Computes the set of terminal symbols.
    pub fn terminal_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.terminal(self);
        set
    }

    /// Computes the set of nulling (directly epsilon-producing) symbols.
    pub fn nulling_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::from_elem(self, false);
        set.nulling(self);
        set
    }
}
