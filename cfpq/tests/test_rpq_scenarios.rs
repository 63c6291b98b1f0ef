//! Scenario tests for regular path querying: the transitive-closure method
//! (`rpq`) and the multi-source BFS method (`reachable_from_any` /
//! `reachable_from_each`).

use std::collections::HashSet;

use cfg_symbol::SymbolSource;

use cfpq::{reachable_from_any, reachable_from_each, rpq, LabeledGraph};

#[test]
fn scenario_s3_rpq_with_loops() {
    let mut sym_source = SymbolSource::new();
    let a = sym_source.intern("a");
    let b = sym_source.intern("b");
    let c = sym_source.intern("c");
    let d = sym_source.intern("d");

    let mut graph: LabeledGraph<i32> = LabeledGraph::new();
    graph.add_edge(0, a, 1);
    graph.add_edge(1, b, 1);
    graph.add_edge(0, c, 2);
    graph.add_edge(2, d, 2);

    // Node 3 in the scenario's final set never appears in the graph; the
    // result is unaffected since no path can ever end there.
    let start: HashSet<usize> = [graph.node_id(&0).unwrap()].into_iter().collect();
    let finish: HashSet<usize> = [graph.node_id(&1).unwrap(), graph.node_id(&2).unwrap()]
        .into_iter()
        .collect();

    let result = rpq(&graph, "abbb|cddd", &mut sym_source, Some(&start), Some(&finish))
        .expect("pattern parses");

    let expected: HashSet<(usize, usize)> = [
        (graph.node_id(&0).unwrap(), graph.node_id(&1).unwrap()),
        (graph.node_id(&0).unwrap(), graph.node_id(&2).unwrap()),
    ]
    .into_iter()
    .collect();

    assert_eq!(result, expected);
}

#[test]
fn scenario_s4_reachable_from_any_multiple_sources() {
    let mut sym_source = SymbolSource::new();
    let a = sym_source.intern("a");
    let b = sym_source.intern("b");

    let mut graph: LabeledGraph<i32> = LabeledGraph::new();
    graph.add_edge(1, a, 2);
    graph.add_edge(2, b, 3);
    graph.add_edge(4, a, 5);
    graph.add_edge(5, b, 6);

    let sources: HashSet<usize> = [graph.node_id(&1).unwrap(), graph.node_id(&4).unwrap()]
        .into_iter()
        .collect();
    let finals: HashSet<usize> = graph.node_ids().collect();

    let reached = reachable_from_any(&graph, "ab", &mut sym_source, &sources, &finals)
        .expect("pattern parses");

    let expected: HashSet<usize> = [graph.node_id(&3).unwrap(), graph.node_id(&6).unwrap()]
        .into_iter()
        .collect();
    assert_eq!(reached, expected);
}

#[test]
fn reachable_from_each_keeps_sources_independent() {
    let mut sym_source = SymbolSource::new();
    let a = sym_source.intern("a");
    let b = sym_source.intern("b");

    let mut graph: LabeledGraph<i32> = LabeledGraph::new();
    graph.add_edge(1, a, 2);
    graph.add_edge(2, b, 3);
    graph.add_edge(4, a, 5);
    graph.add_edge(5, b, 6);

    let sources: HashSet<usize> = [graph.node_id(&1).unwrap(), graph.node_id(&4).unwrap()]
        .into_iter()
        .collect();
    let finals: HashSet<usize> = graph.node_ids().collect();

    let per_source = reachable_from_each(&graph, "ab", &mut sym_source, &sources, &finals)
        .expect("pattern parses");

    let from_1 = &per_source[&graph.node_id(&1).unwrap()];
    let from_4 = &per_source[&graph.node_id(&4).unwrap()];

    assert_eq!(
        from_1.clone(),
        [graph.node_id(&3).unwrap()].into_iter().collect::<HashSet<_>>()
    );
    assert_eq!(
        from_4.clone(),
        [graph.node_id(&6).unwrap()].into_iter().collect::<HashSet<_>>()
    );
}

#[test]
fn empty_alphabet_intersection_is_a_successful_empty_result() {
    // A query over a label that never occurs in the graph intersects to an
    // empty-language automaton; this is a successful empty result, not an
    // error (§7: EmptyAlphabetIntersection).
    let mut sym_source = SymbolSource::new();
    let a = sym_source.intern("a");

    let mut graph: LabeledGraph<i32> = LabeledGraph::new();
    graph.add_edge(0, a, 1);

    let result = rpq(&graph, "zzz", &mut sym_source, None, None).expect("pattern parses");
    assert!(result.is_empty());
}
