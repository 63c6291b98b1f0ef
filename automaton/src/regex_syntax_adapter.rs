//! Adapts standard regex syntax (as parsed by `regex-syntax`) into our
//! shared [`Regex`] AST, so RPQ query strings like `"ab|cd*"` compile
//! through the same Thompson construction as grammar-text regexes.
//!
//! Every literal character becomes a terminal [`Symbol`], interned through
//! the caller's [`SymbolSource`] so that query symbols line up with the
//! graph's edge-label symbols.

use cfg_symbol::SymbolSource;
use regex_syntax::hir::{Class, Hir, HirKind, Repetition};
use regex_syntax::Parser;

use crate::regex_ast::{concat_all, union_all, Regex};

/// An error produced while parsing or translating a query regex.
#[derive(Debug)]
pub enum RegexSyntaxError {
    /// The pattern was not valid regex syntax.
    Parse(regex_syntax::Error),
    /// The pattern used a regex feature this crate's alphabet-based
    /// matching cannot express (anchors, word boundaries, backreferences).
    Unsupported(&'static str),
}

impl std::fmt::Display for RegexSyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegexSyntaxError::Parse(e) => write!(f, "invalid regex: {e}"),
            RegexSyntaxError::Unsupported(what) => {
                write!(f, "unsupported regex feature: {what}")
            }
        }
    }
}

impl std::error::Error for RegexSyntaxError {}

/// Parses `pattern` as standard regex syntax and translates it into our
/// [`Regex`] AST, interning every literal character as a terminal symbol
/// through `sym_source`.
pub fn parse_regex(pattern: &str, sym_source: &mut SymbolSource) -> Result<Regex, RegexSyntaxError> {
    let hir = Parser::new().parse(pattern).map_err(RegexSyntaxError::Parse)?;
    hir_to_regex(&hir, sym_source)
}

fn hir_to_regex(hir: &Hir, sym_source: &mut SymbolSource) -> Result<Regex, RegexSyntaxError> {
    match hir.kind() {
        HirKind::Empty => Ok(Regex::Epsilon),
        HirKind::Literal(lit) => {
            let text = std::str::from_utf8(&lit.0)
                .map_err(|_| RegexSyntaxError::Unsupported("non-UTF8 literal"))?;
            Ok(concat_all(
                text.chars()
                    .map(|c| Regex::Symbol(sym_source.intern(&c.to_string()))),
            ))
        }
        HirKind::Class(class) => class_to_regex(class, sym_source),
        HirKind::Repetition(rep) => repetition_to_regex(rep, sym_source),
        HirKind::Capture(group) => hir_to_regex(&group.sub, sym_source),
        HirKind::Concat(parts) => {
            let mut pieces = Vec::with_capacity(parts.len());
            for part in parts {
                pieces.push(hir_to_regex(part, sym_source)?);
            }
            Ok(concat_all(pieces))
        }
        HirKind::Alternation(parts) => {
            let mut pieces = Vec::with_capacity(parts.len());
            for part in parts {
                pieces.push(hir_to_regex(part, sym_source)?);
            }
            Ok(union_all(pieces))
        }
        HirKind::Look(_) => Err(RegexSyntaxError::Unsupported("anchors/word boundaries")),
    }
}

fn class_to_regex(class: &Class, sym_source: &mut SymbolSource) -> Result<Regex, RegexSyntaxError> {
    match class {
        Class::Unicode(unicode) => {
            let mut alternatives = Vec::new();
            for range in unicode.ranges() {
                for c in range.start()..=range.end() {
                    alternatives.push(Regex::Symbol(sym_source.intern(&c.to_string())));
                }
            }
            Ok(union_all(alternatives))
        }
        Class::Bytes(bytes) => {
            let mut alternatives = Vec::new();
            for range in bytes.ranges() {
                for b in range.start()..=range.end() {
                    alternatives.push(Regex::Symbol(
                        sym_source.intern(&(b as char).to_string()),
                    ));
                }
            }
            Ok(union_all(alternatives))
        }
    }
}

fn repetition_to_regex(
    rep: &Repetition,
    sym_source: &mut SymbolSource,
) -> Result<Regex, RegexSyntaxError> {
    let inner = hir_to_regex(&rep.sub, sym_source)?;
    let min = rep.min;
    let max = rep.max;
    match (min, max) {
        (0, None) => Ok(inner.star()),
        (1, None) => Ok(inner.plus()),
        (0, Some(1)) => Ok(inner.optional()),
        (min, max) => {
            // Bounded repetition: expand into an explicit concatenation,
            // with the open tail (if any) folded into a trailing star.
            let mut pieces = Vec::new();
            for _ in 0..min {
                pieces.push(inner.clone());
            }
            match max {
                Some(max) => {
                    for _ in min..max {
                        pieces.push(inner.clone().optional());
                    }
                }
                None => pieces.push(inner.star()),
            }
            Ok(concat_all(pieces))
        }
    }
}
