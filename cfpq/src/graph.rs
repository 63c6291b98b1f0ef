//! Edge-labeled directed multigraphs, with node identities interned to a
//! dense `[0, n)` range at construction time.
//!
//! Arbitrary hashable node identities (the data model the querying
//! algorithms conceptually operate on) are mapped to small integers once,
//! up front, so every downstream algorithm indexes plain arrays instead of
//! hashing a caller-supplied key on every step; the inverse mapping is kept
//! around to reify results back into the caller's node values.

use std::collections::HashMap;
use std::hash::Hash;

use cfg_symbol::Symbol;

/// A graph node's dense index, assigned in first-seen order.
pub type NodeId = usize;

/// An edge-labeled directed multigraph. Node identities of type `N` are
/// interned to [`NodeId`]s; edges carry a [`Symbol`] label.
#[derive(Clone, Debug)]
pub struct LabeledGraph<N> {
    nodes: Vec<N>,
    node_ids: HashMap<N, NodeId>,
    /// `(from, label, to)` triples, kept sorted for deterministic iteration.
    edges: Vec<(NodeId, Symbol, NodeId)>,
}

impl<N> Default for LabeledGraph<N>
where
    N: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> LabeledGraph<N>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        LabeledGraph {
            nodes: Vec::new(),
            node_ids: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Interns `node`, returning its dense ID (assigning a fresh one the
    /// first time a given node value is seen).
    pub fn intern_node(&mut self, node: N) -> NodeId {
        if let Some(&id) = self.node_ids.get(&node) {
            return id;
        }
        let id = self.nodes.len();
        self.node_ids.insert(node.clone(), id);
        self.nodes.push(node);
        id
    }

    /// Adds a directed edge `from --label--> to`, interning both endpoints.
    /// Parallel edges with an identical `(from, label, to)` triple are
    /// idempotent: adding the same edge twice has no further effect.
    pub fn add_edge(&mut self, from: N, label: Symbol, to: N) {
        let from_id = self.intern_node(from);
        let to_id = self.intern_node(to);
        let edge = (from_id, label, to_id);
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    /// Number of distinct nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The dense ID of `node`, if it has been interned.
    pub fn node_id(&self, node: &N) -> Option<NodeId> {
        self.node_ids.get(node).copied()
    }

    /// The original node value a dense ID was assigned to.
    pub fn node_value(&self, id: NodeId) -> &N {
        &self.nodes[id]
    }

    /// Iterates over every node's dense ID.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.nodes.len()
    }

    /// Iterates over every edge as `(from, label, to)` dense-ID triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Symbol, NodeId)> + '_ {
        self.edges.iter().copied()
    }

    /// The set of distinct labels occurring on some edge.
    pub fn alphabet(&self) -> impl Iterator<Item = Symbol> + '_ {
        let mut seen = Vec::new();
        self.edges.iter().filter_map(move |&(_, label, _)| {
            if seen.contains(&label) {
                None
            } else {
                seen.push(label);
                Some(label)
            }
        })
    }
}
