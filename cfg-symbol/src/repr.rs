use core::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type SymbolRepr = u32;
/// The first usable symbol ID.
pub const FIRST_ID: SymbolRepr = 0;
/// The numeric value reserved to mark the absence of a symbol.
pub const NULL_ID: SymbolRepr = !0;

/// An interned grammar symbol. Symbols are small integers handed out by a
/// [`crate::source::SymbolSource`]; the same numeric value means different things
/// in different sources, so symbols should not be mixed between grammars.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol(NonZeroU32);

impl Default for Symbol {
    fn default() -> Self {
        FIRST_ID.into()
    }
}

impl From<SymbolRepr> for Symbol {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        debug_assert_ne!(
            id, NULL_ID,
            "invalid conversion from a null id to a non-null Symbol"
        );
        Symbol(NonZeroU32::new(id.wrapping_add(1)).unwrap())
    }
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.0.get().wrapping_sub(1)
    }
}

impl Symbol {
    /// Casts the symbol's ID to `usize`, for indexing dense per-symbol arrays.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        let id: SymbolRepr = sym.into();
        id as usize
    }
}
