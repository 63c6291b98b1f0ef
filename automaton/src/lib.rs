//! Finite automata over symbol alphabets.
//!
//! [`fa::FiniteAutomaton`] is an epsilon-NFA built by Thompson's
//! construction from a [`regex_ast::Regex`]; [`dfa::Dfa`] determinizes and
//! minimizes it; [`bool_matrix::BoolMatrixFa`] is the boolean-matrix
//! representation used to intersect two automata via the Kronecker product
//! and to answer reachability queries by transitive closure.

pub mod bool_matrix;
pub mod dfa;
pub mod fa;
pub mod regex_ast;
pub mod regex_syntax_adapter;

pub use bool_matrix::{count_ones, kronecker, multiply, transpose, union_assign, BoolMatrixFa};
pub use dfa::Dfa;
pub use fa::{FiniteAutomaton, State};
pub use regex_ast::{concat_all, union_all, Regex};
pub use regex_syntax_adapter::{parse_regex, RegexSyntaxError};
