//! Extended CFGs: one regular expression per variable, replacing that
//! variable's whole union of productions. Grounded on the grammar-text
//! mini-language described in the interfaces section: one production per
//! line, `head -> body [| body]*`, tokens separated by whitespace, a `*`
//! suffix for Kleene star over the token it follows, lowercase-leading
//! tokens are terminals and uppercase-leading tokens are variables
//! (including references to other variables' own productions).

use std::collections::HashMap;

use cfg_grammar::Cfg;
use cfg_symbol::{Symbol, SymbolSource};

use automaton::{concat_all, union_all, Regex};

use crate::error::CfpqError;

/// Maps each grammar variable to the single regex standing in for the
/// union of all its productions.
#[derive(Clone, Debug)]
pub struct Ecfg {
    productions: HashMap<Symbol, Regex>,
    start: Symbol,
}

impl Ecfg {
    pub fn start(&self) -> Symbol {
        self.start
    }

    pub fn productions(&self) -> &HashMap<Symbol, Regex> {
        &self.productions
    }

    pub fn production(&self, variable: Symbol) -> Option<&Regex> {
        self.productions.get(&variable)
    }

    pub fn variables(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.productions.keys().copied()
    }

    /// Parses grammar text of the form `head -> body [| body]*`, one
    /// production per line, grouping repeated heads (whether repeated
    /// across lines or joined with `|` on one line) into a single union
    /// regex per variable.
    pub fn from_text(text: &str, sym_source: &mut SymbolSource) -> Result<Ecfg, CfpqError> {
        let mut productions: HashMap<Symbol, Regex> = HashMap::new();

        for (line_no, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let (head_text, body_text) = line.split_once("->").ok_or_else(|| CfpqError::MalformedGrammarText {
                line: line_no + 1,
                message: format!("expected `head -> body`, got {raw_line:?}"),
            })?;
            let head_text = head_text.trim();
            if head_text.is_empty() {
                return Err(CfpqError::MalformedGrammarText {
                    line: line_no + 1,
                    message: "empty head".to_string(),
                });
            }
            let head = sym_source.intern(head_text);

            let mut alternatives = Vec::new();
            for body in body_text.split('|') {
                alternatives.push(parse_body(body.trim(), sym_source));
            }
            let regex = union_all(alternatives);

            productions
                .entry(head)
                .and_modify(|existing| *existing = existing.clone().union(regex.clone()))
                .or_insert(regex);
        }

        let start = sym_source.intern("S");
        Ok(Ecfg { productions, start })
    }

    /// Reads a whole grammar-text file and parses it (see [`Ecfg::from_text`]).
    pub fn from_file(path: &std::path::Path, sym_source: &mut SymbolSource) -> Result<Ecfg, CfpqError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CfpqError::MalformedGrammarText {
                line: 0,
                message: format!("could not read {}: {e}", path.display()),
            })?;
        Ecfg::from_text(&text, sym_source)
    }

    /// Builds an ECFG from an ordinary CFG by textualizing its productions
    /// and re-parsing them; this is lossless for language purposes since
    /// the textual form preserves every production body exactly.
    pub fn from_cfg(cfg: &Cfg, sym_source: &mut SymbolSource) -> Result<Ecfg, CfpqError> {
        let text = cfg_to_text(cfg);
        Ecfg::from_text(&text, sym_source)
    }
}

/// Parses one `|`-separated alternative body: whitespace-separated tokens,
/// each optionally suffixed with `*` for a Kleene star over that token
/// alone, implicitly concatenated.
fn parse_body(body: &str, sym_source: &mut SymbolSource) -> Regex {
    let tokens: Vec<Regex> = body
        .split_whitespace()
        .map(|token| {
            let (name, starred) = match token.strip_suffix('*') {
                Some(stripped) => (stripped, true),
                None => (token, false),
            };
            let sym = sym_source.intern(name);
            let piece = Regex::Symbol(sym);
            if starred {
                piece.star()
            } else {
                piece
            }
        })
        .collect();
    concat_all(tokens)
}

/// Renders `cfg`'s productions as grammar text, one line per production
/// (an empty body renders as an empty right-hand side, parsed back as
/// epsilon).
fn cfg_to_text(cfg: &Cfg) -> String {
    let mut lines = Vec::new();
    for rule in cfg.rules() {
        let head = cfg.sym_source().name_of(rule.lhs);
        let body = rule
            .rhs
            .iter()
            .map(|&sym| cfg.sym_source().name_of(sym).into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{head} -> {body}"));
    }
    lines.join("\n")
}
