use automaton::{BoolMatrixFa, Dfa, Regex};
use cfg_symbol::SymbolSource;

#[test]
fn intersection_accepts_the_language_intersection() {
    let mut syms = SymbolSource::new();
    let a = syms.intern("a");
    let b = syms.intern("b");

    // a*b, and a(a|b)*, intersected should accept exactly "ab".
    let left = Regex::Symbol(a).star().concat(Regex::Symbol(b));
    let right = Regex::Symbol(a).concat(Regex::Symbol(a).union(Regex::Symbol(b)).star());

    let left_dfa = Dfa::from_nfa(&left.to_nfa());
    let right_dfa = Dfa::from_nfa(&right.to_nfa());

    let left_fa = BoolMatrixFa::from_dfa(&left_dfa);
    let right_fa = BoolMatrixFa::from_dfa(&right_dfa);
    let product = left_fa.intersect(&right_fa);

    // "ab" should be accepted by both components, hence reachable in the
    // product from a start state to a final state.
    let combined = product.combined_adjacency();
    let mut reached: std::collections::HashSet<usize> = product.start_states().collect();
    let mut changed = true;
    while changed {
        changed = false;
        let snapshot: Vec<usize> = reached.iter().copied().collect();
        for &state in &snapshot {
            for next in 0..product.num_states() {
                if combined[(state, next)] && reached.insert(next) {
                    changed = true;
                }
            }
        }
    }

    let accepts_ab = reached.iter().any(|&s| product.is_final(s));
    assert!(accepts_ab, "product automaton should still accept \"ab\"");
}

#[test]
fn disjoint_languages_intersect_to_nothing_reachable() {
    let mut syms = SymbolSource::new();
    let a = syms.intern("a");
    let b = syms.intern("b");

    let only_a = Regex::Symbol(a);
    let only_b = Regex::Symbol(b);

    let a_fa = BoolMatrixFa::from_dfa(&Dfa::from_nfa(&only_a.to_nfa()));
    let b_fa = BoolMatrixFa::from_dfa(&Dfa::from_nfa(&only_b.to_nfa()));
    let product = a_fa.intersect(&b_fa);

    // No shared label exists between the two single-symbol automata's only
    // transitions, so nothing beyond the start states is reachable.
    let combined = product.combined_adjacency();
    for state in 0..product.num_states() {
        for next in 0..product.num_states() {
            assert!(
                !combined[(state, next)],
                "no transitions should exist in the product of disjoint-alphabet automata"
            );
        }
    }
}
