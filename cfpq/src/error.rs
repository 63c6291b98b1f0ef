//! Error kinds surfaced by grammar/graph-text parsing and by internal
//! invariant checks. Algorithm-internal assertion failures are fatal: no
//! partial result is ever returned, so every entry point either returns a
//! complete result or an error.

use thiserror::Error;

/// Errors produced while parsing grammar or graph text, or while checking
/// an internal invariant before running an algorithm.
#[derive(Error, Debug)]
pub enum CfpqError {
    /// A grammar-text line could not be parsed as `head -> body [| body]*`.
    #[error("malformed grammar text at line {line}: {message}")]
    MalformedGrammarText { line: usize, message: String },

    /// A graph-text (e.g. DOT) source could not be parsed.
    #[error("malformed graph text: {0}")]
    MalformedGraphText(String),

    /// A production given to a WCNF-only algorithm was neither epsilon, a
    /// single terminal, nor exactly two variables. Indicates a caller bug:
    /// run [`cfg_grammar::to_wcnf`] first.
    #[error("grammar production for {lhs:?} is not in weak Chomsky normal form: body has {body_len} symbols")]
    InvariantViolation { lhs: String, body_len: usize },
}
