//! Transitive-closure idempotence (testable property 6): once `R+`
//! stabilizes, squaring it again must leave it unchanged. This underlies
//! the RPQ transitive-closure method (`query_regex_to_fa`), which relies on
//! `BitMatrix::transitive_closure` reaching a genuine fixed point.

use bit_matrix::BitMatrix;

use automaton::count_ones;

#[test]
fn squaring_a_stabilized_closure_is_a_no_op() {
    // 0 -> 1 -> 2 -> 0 (a 3-cycle) plus a pendant 2 -> 3, so the closure is
    // nontrivial but still finite and easy to check by hand.
    let mut matrix = BitMatrix::new(4, 4);
    matrix.set(0, 1, true);
    matrix.set(1, 2, true);
    matrix.set(2, 0, true);
    matrix.set(2, 3, true);

    matrix.transitive_closure();
    let once = count_ones(&matrix);

    matrix.transitive_closure();
    let twice = count_ones(&matrix);

    assert_eq!(once, twice, "a second transitive_closure call must not grow the relation");

    // Every pair within the 3-cycle should reach every other, and all three
    // should reach the pendant node 3.
    for i in 0..3 {
        for j in 0..3 {
            assert!(matrix[(i, j)], "node {i} should reach node {j} via the cycle");
        }
        assert!(matrix[(i, 3)], "node {i} should reach the pendant node 3");
    }
    for j in 0..4 {
        assert!(!matrix[(3, j)], "the pendant node 3 has no outgoing edges");
    }
}

#[test]
fn reflexive_closure_adds_the_diagonal_without_disturbing_non_loop_entries() {
    let mut matrix = BitMatrix::new(3, 3);
    matrix.set(0, 1, true);
    matrix.reflexive_closure();

    for i in 0..3 {
        assert!(matrix[(i, i)], "reflexive closure must set every diagonal entry");
    }
    assert!(matrix[(0, 1)]);
    assert!(!matrix[(1, 0)]);
}
