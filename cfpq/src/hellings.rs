//! The Hellings worklist fixed-point algorithm: derives every triple
//! `(u, A, v)` such that `A ⇒* w` for some word `w` labeling a path `u → v`
//! in the graph.
//!
//! Result membership is tracked with one dense `n × n` bit matrix per
//! variable rather than a hash set of triples, so membership testing and
//! insertion are both O(1) and left/right extension can scan a single
//! matrix column or row instead of filtering a flat triple set — the
//! representation the design notes call for in place of a plain
//! hash-set-of-triples.

use std::collections::{HashMap, VecDeque};

use bit_matrix::BitMatrix;
use cfg_grammar::Cfg;
use cfg_symbol::Symbol;

use crate::graph::{LabeledGraph, NodeId};

/// `(u, A, v)`: variable `A` derives some word labeling a path `u → v`.
pub type Triple = (NodeId, Symbol, NodeId);

/// The accumulated result of a Hellings (or Matrix) run: one reachability
/// matrix per variable, indexed by the graph's dense node IDs.
pub struct CfpqResult {
    n: usize,
    matrices: HashMap<Symbol, BitMatrix>,
}

impl CfpqResult {
    fn new(n: usize) -> Self {
        CfpqResult {
            n,
            matrices: HashMap::new(),
        }
    }

    pub(crate) fn from_matrices(n: usize, matrices: HashMap<Symbol, BitMatrix>) -> Self {
        CfpqResult {
            n,
            matrices,
        }
    }

    fn matrix_mut(&mut self, var: Symbol) -> &mut BitMatrix {
        self.matrices
            .entry(var)
            .or_insert_with(|| BitMatrix::new(self.n, self.n))
    }

    /// Whether `(u, var, v)` is in the result.
    pub fn contains(&self, u: NodeId, var: Symbol, v: NodeId) -> bool {
        self.matrices.get(&var).is_some_and(|m| m[(u, v)])
    }

    fn insert(&mut self, u: NodeId, var: Symbol, v: NodeId) -> bool {
        let matrix = self.matrix_mut(var);
        if matrix[(u, v)] {
            false
        } else {
            matrix.set(u, v, true);
            true
        }
    }

    /// The underlying matrix for `var`, if any triple for it was derived.
    pub fn matrix_for(&self, var: Symbol) -> Option<&BitMatrix> {
        self.matrices.get(&var)
    }

    /// Iterates over every derived triple.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.matrices.iter().flat_map(move |(&var, matrix)| {
            (0..self.n).flat_map(move |u| {
                (0..self.n).filter_map(move |v| matrix[(u, v)].then_some((u, var, v)))
            })
        })
    }
}

/// Runs the Hellings algorithm over `graph` against `cfg`, which must
/// already be in weak Chomsky normal form (see [`cfg_grammar::to_wcnf`]).
pub fn hellings<N>(graph: &LabeledGraph<N>, cfg: &Cfg) -> CfpqResult
where
    N: Eq + std::hash::Hash + Clone,
{
    let n = graph.num_nodes();
    let mut result = CfpqResult::new(n);
    let mut queue: VecDeque<Triple> = VecDeque::new();

    let unit_rules: Vec<(Symbol, Symbol)> = cfg
        .rules()
        .filter(|r| r.rhs.len() == 1)
        .map(|r| (r.lhs, r.rhs[0]))
        .collect();
    let binary_rules: Vec<(Symbol, Symbol, Symbol)> = cfg
        .rules()
        .filter(|r| r.rhs.len() == 2)
        .map(|r| (r.lhs, r.rhs[0], r.rhs[1]))
        .collect();
    let epsilon_rules: Vec<Symbol> = cfg
        .rules()
        .filter(|r| r.rhs.is_empty())
        .map(|r| r.lhs)
        .collect();

    for &lhs in &epsilon_rules {
        for v in graph.node_ids() {
            if result.insert(v, lhs, v) {
                queue.push_back((v, lhs, v));
            }
        }
    }

    for (u, label, v) in graph.edges() {
        for &(lhs, terminal) in &unit_rules {
            if terminal == label && result.insert(u, lhs, v) {
                queue.push_back((u, lhs, v));
            }
        }
    }

    while let Some((u, b, v)) = queue.pop_front() {
        log::trace!("hellings: popped ({u}, {b:?}, {v}), {} left in queue", queue.len());
        // Left-extend: (u', C, u) in R and A -> C B gives (u', A, v).
        for &(lhs, left, right) in &binary_rules {
            if right != b {
                continue;
            }
            if let Some(left_matrix) = result.matrices.get(&left) {
                let column_sources: Vec<NodeId> =
                    (0..n).filter(|&u_prime| left_matrix[(u_prime, u)]).collect();
                for u_prime in column_sources {
                    if result.insert(u_prime, lhs, v) {
                        queue.push_back((u_prime, lhs, v));
                    }
                }
            }
        }

        // Right-extend: (v, C, v') in R and A -> B C gives (u, A, v').
        for &(lhs, left, right) in &binary_rules {
            if left != b {
                continue;
            }
            if let Some(right_matrix) = result.matrices.get(&right) {
                let row_targets: Vec<NodeId> =
                    (0..n).filter(|&v_prime| right_matrix[(v, v_prime)]).collect();
                for v_prime in row_targets {
                    if result.insert(u, lhs, v_prime) {
                        queue.push_back((u, lhs, v_prime));
                    }
                }
            }
        }
    }

    result
}
