//! Context-free and regular path querying over edge-labeled directed
//! multigraphs.
//!
//! Ties together grammar normalization ([`cfg_grammar`]), finite-automaton
//! algebra ([`automaton`]), and the two CFPQ fixed-point algorithms
//! ([`hellings`], [`matrix`]) behind the consumer-facing entry points at
//! the bottom of this module.

pub mod config;
pub mod ecfg;
pub mod error;
pub mod filter;
pub mod graph;
pub mod hellings;
pub mod matrix;
pub mod rpq;
pub mod rsm;

pub use config::{Algorithm, CfpqConfig};
pub use ecfg::Ecfg;
pub use error::CfpqError;
pub use filter::{filter_pairs, filter_triples, FilterSpec};
pub use graph::{LabeledGraph, NodeId};
pub use hellings::{hellings, CfpqResult, Triple};
pub use matrix::matrix;
pub use rsm::Rsm;

pub use cfg_grammar::to_wcnf as wcnf;

use std::collections::HashSet;
use std::hash::Hash;

use cfg_grammar::Cfg;
use cfg_symbol::SymbolSource;

use automaton::Regex;

/// Runs the CFPQ algorithm selected by `config` over `graph` against
/// `cfg` (normalized to WCNF first), then applies an optional post-filter.
/// This is the dispatcher named in the external interface: `hellings` and
/// `matrix` are also exposed directly for callers who don't need dispatch.
pub fn query_cfg<N>(
    graph: &LabeledGraph<N>,
    cfg: &Cfg,
    config: &CfpqConfig,
    filter: Option<&FilterSpec>,
) -> Vec<Triple>
where
    N: Eq + Hash + Clone,
{
    let wcnf_cfg = wcnf(cfg);
    let result = match config.algorithm {
        Algorithm::Hellings => hellings(graph, &wcnf_cfg),
        Algorithm::Matrix => matrix(graph, &wcnf_cfg),
    };
    match filter {
        Some(spec) => filter_triples(result.triples(), spec),
        None => result.triples().collect(),
    }
}

/// Parses `pattern` as standard regex syntax (see [`automaton::parse_regex`])
/// and answers the RPQ transitive-closure query against `graph`, optionally
/// restricted to the given start/final node sets.
///
/// `sym_source` must be the very `SymbolSource` the caller used to label
/// `graph`'s edges: a terminal in `pattern` only lines up with an edge label
/// of the same name if both were interned through the same source, since a
/// `Symbol`'s identity is a bare integer with no name of its own once
/// interned. Parsing through a fresh, unrelated `SymbolSource` would assign
/// the query's terminals IDs that happen to coincide with the graph's only
/// by chance.
pub fn rpq<N>(
    graph: &LabeledGraph<N>,
    pattern: &str,
    sym_source: &mut SymbolSource,
    start: Option<&HashSet<NodeId>>,
    finish: Option<&HashSet<NodeId>>,
) -> Result<HashSet<(NodeId, NodeId)>, automaton::RegexSyntaxError>
where
    N: Eq + Hash + Clone,
{
    let regex = automaton::parse_regex(pattern, sym_source)?;
    Ok(rpq_with_regex(graph, &regex, start, finish))
}

/// Same as [`rpq`], for a caller who already has a compiled [`Regex`].
pub fn rpq_with_regex<N>(
    graph: &LabeledGraph<N>,
    regex: &Regex,
    start: Option<&HashSet<NodeId>>,
    finish: Option<&HashSet<NodeId>>,
) -> HashSet<(NodeId, NodeId)>
where
    N: Eq + Hash + Clone,
{
    let db_fa = rpq::graph_to_bool_matrix_fa(graph, start, finish);
    let query_fa = rpq::query_to_bool_matrix_fa(regex);
    rpq::query_regex_to_fa(&db_fa, &query_fa)
}

/// Parses `pattern` and returns every node in `finals` reachable from some
/// node in `sources` by a path whose label matches it.
///
/// See [`rpq`] on why `sym_source` must be the same source `graph`'s edges
/// were interned through.
pub fn reachable_from_any<N>(
    graph: &LabeledGraph<N>,
    pattern: &str,
    sym_source: &mut SymbolSource,
    sources: &HashSet<NodeId>,
    finals: &HashSet<NodeId>,
) -> Result<HashSet<NodeId>, automaton::RegexSyntaxError>
where
    N: Eq + Hash + Clone,
{
    let regex = automaton::parse_regex(pattern, sym_source)?;
    let db_fa = rpq::graph_to_bool_matrix_fa(graph, None, None);
    let query_fa = rpq::query_to_bool_matrix_fa(&regex);
    let reached = rpq::reachable_from(&db_fa, &query_fa, sources);
    Ok(reached.intersection(finals).copied().collect())
}

/// Parses `pattern` and returns, for each node in `sources`, the subset of
/// `finals` reachable from it alone by a path whose label matches it.
///
/// See [`rpq`] on why `sym_source` must be the same source `graph`'s edges
/// were interned through.
pub fn reachable_from_each<N>(
    graph: &LabeledGraph<N>,
    pattern: &str,
    sym_source: &mut SymbolSource,
    sources: &HashSet<NodeId>,
    finals: &HashSet<NodeId>,
) -> Result<std::collections::HashMap<NodeId, HashSet<NodeId>>, automaton::RegexSyntaxError>
where
    N: Eq + Hash + Clone,
{
    let regex = automaton::parse_regex(pattern, sym_source)?;
    let db_fa = rpq::graph_to_bool_matrix_fa(graph, None, None);
    let query_fa = rpq::query_to_bool_matrix_fa(&regex);
    let per_source = rpq::reachable_from_each(&db_fa, &query_fa, sources);
    Ok(per_source
        .into_iter()
        .map(|(source, reached)| (source, reached.intersection(finals).copied().collect()))
        .collect())
}
