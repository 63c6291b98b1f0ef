//! Regular path querying: given a graph and a regular expression, find node
//! pairs (or reachable nodes) connected by a path whose label spells a word
//! in the regex's language.
//!
//! Two independent methods are provided, matching the two the grammar
//! offers: a transitive-closure method built on automaton intersection
//! ([`query_regex_to_fa`]), and a multi-source BFS over a block-diagonal
//! front matrix ([`reachable_from`]) that avoids ever materializing the
//! full product automaton.

use std::collections::{HashMap, HashSet};

use bit_matrix::BitMatrix;
use cfg_symbol::Symbol;

use automaton::bool_matrix::{multiply, transpose, union_assign};
use automaton::{BoolMatrixFa, Dfa, Regex};

use crate::graph::{LabeledGraph, NodeId};

/// Builds the boolean-matrix automaton view of a graph: one state per
/// node, transitions from its edges, and the given start/final sets
/// (defaulting to "every node" when unset, per the FA-from-graph
/// construction).
pub fn graph_to_bool_matrix_fa<N>(
    graph: &LabeledGraph<N>,
    start: Option<&HashSet<NodeId>>,
    finish: Option<&HashSet<NodeId>>,
) -> BoolMatrixFa
where
    N: Eq + std::hash::Hash + Clone,
{
    let n = graph.num_nodes();
    let mut fa = BoolMatrixFa::new(n);
    for (u, label, v) in graph.edges() {
        fa.add_transition(u, label, v);
    }
    for node in graph.node_ids() {
        if start.is_none_or(|s| s.contains(&node)) {
            fa.set_start(node);
        }
        if finish.is_none_or(|f| f.contains(&node)) {
            fa.set_final(node);
        }
    }
    fa
}

/// Compiles a query [`Regex`] into its minimized boolean-matrix automaton.
pub fn query_to_bool_matrix_fa(query: &Regex) -> BoolMatrixFa {
    let dfa = Dfa::from_nfa(&query.to_nfa()).minimize();
    BoolMatrixFa::from_dfa(&dfa)
}

/// The transitive-closure RPQ method: intersects `db_fa` with `query_fa`,
/// computes the transitive closure of the product's label-agnostic
/// adjacency, and reads off every pair of db nodes connected through a
/// product start/final state pair by at least one transition step.
pub fn query_regex_to_fa(db_fa: &BoolMatrixFa, query_fa: &BoolMatrixFa) -> HashSet<(NodeId, NodeId)> {
    let product = db_fa.intersect(query_fa);
    let mut reachable = product.combined_adjacency();
    reachable.transitive_closure();

    let query_states = query_fa.num_states();
    let mut result = HashSet::new();

    for i in product.start_states() {
        for j in product.final_states() {
            if reachable[(i, j)] {
                let (db_u, _) = BoolMatrixFa::unproduct(i, query_states);
                let (db_v, _) = BoolMatrixFa::unproduct(j, query_states);
                result.insert((db_u, db_v));
            }
        }
    }
    result
}

/// Builds the block-diagonal matrix `block_diag(a, b)`, used to advance the
/// front matrix one step for every shared label at once.
fn block_diag(a: &BitMatrix, b: &BitMatrix) -> BitMatrix {
    let (a_rows, a_cols) = a.size();
    let (b_rows, b_cols) = b.size();
    let mut result = BitMatrix::new(a_rows + b_rows, a_cols + b_cols);
    for i in 0..a_rows {
        for j in 0..a_cols {
            if a[(i, j)] {
                result.set(i, j, true);
            }
        }
    }
    for i in 0..b_rows {
        for j in 0..b_cols {
            if b[(i, j)] {
                result.set(a_rows + i, a_cols + j, true);
            }
        }
    }
    result
}

/// The multi-source BFS RPQ method, driven by a front matrix of shape
/// `(dQ + qQ) × qQ`: the top `dQ` rows track, for each db state, which
/// query states are "currently aligned" with it; the bottom `qQ` rows carry
/// a permuted identity recording which original query start produced each
/// column, so columns can be reassembled correctly after a step that
/// crosses more than one query transition.
pub fn reachable_from(db_fa: &BoolMatrixFa, query_fa: &BoolMatrixFa, sources: &HashSet<NodeId>) -> HashSet<NodeId> {
    let d_q = db_fa.num_states();
    let q_q = query_fa.num_states();

    let mut front = BitMatrix::new(d_q + q_q, q_q);
    for &source in sources {
        for start_q in query_fa.start_states() {
            front.set(source, start_q, true);
        }
    }
    for start_q in query_fa.start_states() {
        front.set(d_q + start_q, start_q, true);
    }

    let mut reached = BitMatrix::new(d_q + q_q, q_q);
    union_assign(&mut reached, &front);

    let shared_labels: Vec<Symbol> = db_fa
        .labels()
        .filter(|label| query_fa.matrix_for(*label).is_some())
        .collect();

    loop {
        let mut next_front = BitMatrix::new(d_q + q_q, q_q);

        for &label in &shared_labels {
            let db_matrix = db_fa.matrix_for(label).expect("label present in db_fa");
            let query_matrix = query_fa
                .matrix_for(label)
                .expect("label present in query_fa by construction");

            let lifted = block_diag(&transpose(db_matrix), &transpose(query_matrix));
            let stepped = multiply(&lifted, &front);

            for i in 0..q_q {
                for j in 0..q_q {
                    if stepped[(d_q + i, j)] {
                        for row in 0..(d_q + q_q) {
                            if stepped[(row, j)] {
                                next_front.set(row, i, true);
                            }
                        }
                    }
                }
            }
        }

        let before = automaton::count_ones(&reached);
        union_assign(&mut reached, &next_front);
        let after = automaton::count_ones(&reached);
        if after == before {
            break;
        }
        front = next_front;
    }

    let final_q_indices: Vec<usize> = query_fa.final_states().collect();
    (0..d_q)
        .filter(|&i| final_q_indices.iter().any(|&j| reached[(i, j)]))
        .collect()
}

/// Runs [`reachable_from`] once per source, returning each source's
/// individually reachable set.
pub fn reachable_from_each(
    db_fa: &BoolMatrixFa,
    query_fa: &BoolMatrixFa,
    sources: &HashSet<NodeId>,
) -> HashMap<NodeId, HashSet<NodeId>> {
    sources
        .iter()
        .map(|&source| {
            let singleton: HashSet<NodeId> = std::iter::once(source).collect();
            (source, reachable_from(db_fa, query_fa, &singleton))
        })
        .collect()
}
