//! The matrix-based CFPQ fixed-point algorithm: one boolean `n × n` matrix
//! per variable, iterated by `T[A] |= T[B] · T[C]` for every binary
//! production `A -> B C` until a full sweep adds no new nonzero entry.

use std::collections::HashMap;

use bit_matrix::BitMatrix;
use cfg_grammar::Cfg;
use cfg_symbol::Symbol;

use automaton::bool_matrix::{count_ones, multiply, union_assign};

use crate::graph::LabeledGraph;
use crate::hellings::CfpqResult;

/// Runs the Matrix algorithm over `graph` against `cfg`, which must already
/// be in weak Chomsky normal form (see [`cfg_grammar::to_wcnf`]). Produces
/// the same result set as [`crate::hellings::hellings`] (testable property
/// 3: the two algorithms agree on every input).
pub fn matrix<N>(graph: &LabeledGraph<N>, cfg: &Cfg) -> CfpqResult
where
    N: Eq + std::hash::Hash + Clone,
{
    let n = graph.num_nodes();
    let mut matrices: HashMap<Symbol, BitMatrix> = HashMap::new();

    let binary_rules: Vec<(Symbol, Symbol, Symbol)> = cfg
        .rules()
        .filter(|r| r.rhs.len() == 2)
        .map(|r| (r.lhs, r.rhs[0], r.rhs[1]))
        .collect();

    for rule in cfg.rules() {
        if rule.rhs.is_empty() {
            let m = matrices
                .entry(rule.lhs)
                .or_insert_with(|| BitMatrix::new(n, n));
            for i in 0..n {
                m.set(i, i, true);
            }
        }
    }

    for (u, label, v) in graph.edges() {
        for rule in cfg.rules() {
            if rule.rhs.len() == 1 && rule.rhs[0] == label {
                let m = matrices
                    .entry(rule.lhs)
                    .or_insert_with(|| BitMatrix::new(n, n));
                m.set(u, v, true);
            }
        }
    }

    loop {
        let before: usize = matrices.values().map(count_ones).sum();

        for &(lhs, left, right) in &binary_rules {
            let (Some(left_matrix), Some(right_matrix)) =
                (matrices.get(&left), matrices.get(&right))
            else {
                continue;
            };
            let product = multiply(left_matrix, right_matrix);
            let target = matrices
                .entry(lhs)
                .or_insert_with(|| BitMatrix::new(n, n));
            union_assign(target, &product);
        }

        let after: usize = matrices.values().map(count_ones).sum();
        log::trace!("matrix: sweep grew nonzero count {before} -> {after}");
        if after == before {
            break;
        }
    }

    CfpqResult::from_matrices(n, matrices)
}
