//! Boolean matrix algebra shared by every fixed-point algorithm in this
//! crate family: automaton intersection via the Kronecker (tensor) product,
//! and the boolean matrix multiplication the CFPQ Matrix algorithm needs to
//! evaluate `T[A] |= T[B] * T[C]` for each binary production `A -> B C`.
//!
//! `bit_matrix::BitMatrix` already gives us `transitive_closure` and
//! `reflexive_closure`, which is exactly what reachability-style queries
//! need; multiplication and the Kronecker product are not part of its
//! public surface, so we build them here on top of its indexing operations.

use std::collections::HashMap;

use bit_matrix::BitMatrix;
use cfg_symbol::Symbol;

/// Boolean matrix multiplication: `result[i][j] = OR_k (a[i][k] AND b[k][j])`.
///
/// Panics if `a`'s column count does not match `b`'s row count.
pub fn multiply(a: &BitMatrix, b: &BitMatrix) -> BitMatrix {
    let (a_rows, a_cols) = a.size();
    let (b_rows, b_cols) = b.size();
    assert_eq!(a_cols, b_rows, "matrix dimensions do not match for multiplication");

    let mut result = BitMatrix::new(a_rows, b_cols);
    for i in 0..a_rows {
        for k in 0..a_cols {
            if !a[(i, k)] {
                continue;
            }
            for j in 0..b_cols {
                if b[(k, j)] {
                    result.set(i, j, true);
                }
            }
        }
    }
    let _ = b_rows;
    result
}

/// In-place elementwise OR: `a[i][j] |= b[i][j]`. Returns whether `a`
/// changed, so fixed-point loops can detect quiescence.
pub fn union_assign(a: &mut BitMatrix, b: &BitMatrix) -> bool {
    let (rows, cols) = a.size();
    debug_assert_eq!((rows, cols), b.size());
    let mut changed = false;
    for i in 0..rows {
        for j in 0..cols {
            if b[(i, j)] && !a[(i, j)] {
                a.set(i, j, true);
                changed = true;
            }
        }
    }
    changed
}

/// Transposes a boolean matrix: `result[i][j] = a[j][i]`.
pub fn transpose(a: &BitMatrix) -> BitMatrix {
    let (rows, cols) = a.size();
    let mut result = BitMatrix::new(cols, rows);
    for i in 0..rows {
        for j in 0..cols {
            if a[(i, j)] {
                result.set(j, i, true);
            }
        }
    }
    result
}

/// Counts set bits, used by the Matrix CFPQ algorithm to detect when a
/// sweep over the grammar's productions stopped adding new triples.
pub fn count_ones(a: &BitMatrix) -> usize {
    let (rows, cols) = a.size();
    let mut count = 0;
    for i in 0..rows {
        for present in a.iter_row(i).take(cols) {
            if present {
                count += 1;
            }
        }
    }
    count
}

/// The Kronecker (tensor) product of two square boolean matrices: state
/// `(i1, i2)` of the product is numbered `i1 * b.size + i2`, and
/// `result[(i1,i2)][(j1,j2)] = a[i1][j1] AND b[i2][j2]`. This is exactly the
/// adjacency relation of the product automaton used to intersect two finite
/// automata one shared label at a time.
pub fn kronecker(a: &BitMatrix, b: &BitMatrix) -> BitMatrix {
    let (a_rows, a_cols) = a.size();
    let (b_rows, b_cols) = b.size();
    let mut result = BitMatrix::new(a_rows * b_rows, a_cols * b_cols);

    for i1 in 0..a_rows {
        for j1 in 0..a_cols {
            if !a[(i1, j1)] {
                continue;
            }
            for i2 in 0..b_rows {
                for j2 in 0..b_cols {
                    if b[(i2, j2)] {
                        result.set(i1 * b_rows + i2, j1 * b_cols + j2, true);
                    }
                }
            }
        }
    }
    result
}

/// A finite automaton represented as one adjacency [`BitMatrix`] per label,
/// plus start/accepting state bit sets. This is the representation the
/// Kronecker-product intersection and transitive-closure RPQ algorithms
/// operate on directly, as opposed to the epsilon-NFA representation used
/// during construction (see [`crate::fa::FiniteAutomaton`]).
#[derive(Clone, Debug)]
pub struct BoolMatrixFa {
    num_states: usize,
    start_states: Vec<bool>,
    final_states: Vec<bool>,
    by_label: HashMap<Symbol, BitMatrix>,
}

impl BoolMatrixFa {
    pub fn new(num_states: usize) -> Self {
        BoolMatrixFa {
            num_states,
            start_states: vec![false; num_states],
            final_states: vec![false; num_states],
            by_label: HashMap::new(),
        }
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn set_start(&mut self, state: usize) {
        self.start_states[state] = true;
    }

    pub fn set_final(&mut self, state: usize) {
        self.final_states[state] = true;
    }

    pub fn is_start(&self, state: usize) -> bool {
        self.start_states[state]
    }

    pub fn is_final(&self, state: usize) -> bool {
        self.final_states[state]
    }

    pub fn start_states(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_states).filter(move |&s| self.start_states[s])
    }

    pub fn final_states(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_states).filter(move |&s| self.final_states[s])
    }

    pub fn add_transition(&mut self, from: usize, label: Symbol, to: usize) {
        let matrix = self
            .by_label
            .entry(label)
            .or_insert_with(|| BitMatrix::new(self.num_states, self.num_states));
        matrix.set(from, to, true);
    }

    pub fn labels(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.by_label.keys().copied()
    }

    pub fn matrix_for(&self, label: Symbol) -> Option<&BitMatrix> {
        self.by_label.get(&label)
    }

    /// The adjacency matrix reachable in one step via any label at all,
    /// ignoring which label was used. This is what the transitive-closure
    /// RPQ method needs: label-agnostic reachability on the product
    /// automaton.
    pub fn combined_adjacency(&self) -> BitMatrix {
        let mut combined = BitMatrix::new(self.num_states, self.num_states);
        for matrix in self.by_label.values() {
            union_assign(&mut combined, matrix);
        }
        combined
    }

    /// Intersects two automata via the Kronecker product: the product
    /// state `(i, j)` (numbered `i * other.num_states + j`) is reachable on
    /// label `l` exactly when `i --l--> i'` in `self` and `j --l--> j'` in
    /// `other`. Only labels appearing in both automata contribute any
    /// transitions; a state is a start (final) state of the product iff
    /// both components are start (final) states.
    pub fn intersect(&self, other: &BoolMatrixFa) -> BoolMatrixFa {
        let num_states = self.num_states * other.num_states;
        let mut product = BoolMatrixFa::new(num_states);

        for i in self.start_states() {
            for j in other.start_states() {
                product.set_start(i * other.num_states + j);
            }
        }
        for i in self.final_states() {
            for j in other.final_states() {
                product.set_final(i * other.num_states + j);
            }
        }

        for (&label, self_matrix) in &self.by_label {
            if let Some(other_matrix) = other.by_label.get(&label) {
                let kron = kronecker(self_matrix, other_matrix);
                product.by_label.insert(label, kron);
            }
        }

        product
    }

    /// Decomposes a product-automaton state index back into its two
    /// component state indices, given the right-hand factor's state count.
    pub fn unproduct(index: usize, right_num_states: usize) -> (usize, usize) {
        (index / right_num_states, index % right_num_states)
    }

    /// Builds the boolean-matrix representation of a determinized automaton.
    pub fn from_dfa(dfa: &crate::dfa::Dfa) -> Self {
        let mut fa = BoolMatrixFa::new(dfa.num_states());
        fa.set_start(dfa.start());
        for state in 0..dfa.num_states() {
            if dfa.is_final(state) {
                fa.set_final(state);
            }
            for &label in dfa.labels_from(state) {
                if let Some(to) = dfa.step(state, label) {
                    fa.add_transition(state, label, to);
                }
            }
        }
        fa
    }
}
