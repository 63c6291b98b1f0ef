//! A type that can represent symbols in a context-free grammar or finite
//! automaton. Symbols are distinguished by their IDs; a [`source::SymbolSource`]
//! hands them out and remembers their names and grammatical kind (terminal,
//! variable, or epsilon).

mod repr;
pub mod source;

pub use self::repr::{Symbol, SymbolRepr};
pub use self::source::{kind_of_name, SymbolKind, SymbolName, SymbolSource};
