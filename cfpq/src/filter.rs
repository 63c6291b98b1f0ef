//! Uniform post-filter over a CFPQ or RPQ result set, by optional start
//! set, final set, and (for CFPQ triples) variable.

use std::collections::HashSet;

use cfg_symbol::Symbol;

use crate::graph::NodeId;
use crate::hellings::Triple;

/// Constraints a filter pass applies; any field left `None` is unconstrained.
#[derive(Clone, Debug, Default)]
pub struct FilterSpec<'a> {
    pub start: Option<&'a HashSet<NodeId>>,
    pub finish: Option<&'a HashSet<NodeId>>,
    pub variable: Option<Symbol>,
}

impl<'a> FilterSpec<'a> {
    pub fn new() -> Self {
        FilterSpec::default()
    }

    pub fn with_start(mut self, start: &'a HashSet<NodeId>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_finish(mut self, finish: &'a HashSet<NodeId>) -> Self {
        self.finish = Some(finish);
        self
    }

    pub fn with_variable(mut self, variable: Symbol) -> Self {
        self.variable = Some(variable);
        self
    }

    fn keeps_node_pair(&self, u: NodeId, v: NodeId) -> bool {
        self.start.is_none_or(|s| s.contains(&u)) && self.finish.is_none_or(|f| f.contains(&v))
    }
}

/// Filters a CFPQ triple set: keeps `(u, A, v)` with `u` in the start set
/// (or unset), `v` in the final set (or unset), and `A` equal to the
/// requested variable (or unset).
pub fn filter_triples(triples: impl IntoIterator<Item = Triple>, spec: &FilterSpec) -> Vec<Triple> {
    triples
        .into_iter()
        .filter(|&(u, a, v)| {
            spec.keeps_node_pair(u, v) && spec.variable.is_none_or(|expected| expected == a)
        })
        .collect()
}

/// Filters an RPQ node-pair result set by start/final sets.
pub fn filter_pairs(
    pairs: impl IntoIterator<Item = (NodeId, NodeId)>,
    spec: &FilterSpec,
) -> Vec<(NodeId, NodeId)> {
    pairs
        .into_iter()
        .filter(|&(u, v)| spec.keeps_node_pair(u, v))
        .collect()
}
