//! Context-free grammars, usefulness analysis, and Weak Chomsky Normal Form
//! conversion.
//!
//! A [`Cfg`] is built incrementally with the [`Cfg::rule`] builder, sharing a
//! [`cfg_symbol::SymbolSource`] so that symbols stay comparable across
//! transformation passes such as [`wcnf::to_wcnf`].

mod cfg;
mod rhs_closure;
mod rule_builder;
mod symbol_bit_set;
mod useful;
mod wcnf;

pub use crate::cfg::{Cfg, Rule, RuleRef};
pub use crate::rhs_closure::RhsClosure;
pub use crate::rule_builder::RuleBuilder;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use crate::useful::{reachability_matrix, Usefulness};
pub use crate::wcnf::to_wcnf;

pub use cfg_symbol::{kind_of_name, Symbol, SymbolKind, SymbolName, SymbolSource};
