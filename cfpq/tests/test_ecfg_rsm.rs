//! ECFG parsing and RSM construction: grammar-text parsing (§6), the ECFG
//! union-of-productions invariant, and RSM/minimized-RSM round trip
//! (testable property 7).

use automaton::Dfa;
use cfg_grammar::Cfg;
use cfg_symbol::SymbolSource;

use cfpq::{Ecfg, Rsm};

#[test]
fn from_text_unions_repeated_heads_into_one_regex() {
    let mut sym_source = SymbolSource::new();
    let ecfg = Ecfg::from_text("S -> A B\nA -> a\nB -> b | c", &mut sym_source).expect("parses");

    let s = sym_source.intern("S");
    let a_var = sym_source.intern("A");
    let b_var = sym_source.intern("B");
    let ta = sym_source.intern("a");
    let tb = sym_source.intern("b");
    let tc = sym_source.intern("c");

    assert_eq!(ecfg.start(), s);
    assert_eq!(ecfg.variables().count(), 3);

    let rsm = Rsm::from_ecfg(&ecfg);

    let s_dfa = Dfa::from_nfa(rsm.automaton_for(s).expect("S has a body"));
    assert!(s_dfa.accepts([a_var, b_var]), "S -> A B");
    assert!(!s_dfa.accepts([b_var, a_var]), "wrong order must be rejected");

    let a_dfa = Dfa::from_nfa(rsm.automaton_for(a_var).expect("A has a body"));
    assert!(a_dfa.accepts([ta]));
    assert!(!a_dfa.accepts([tb]));

    // B -> b | c: both alternatives of a repeated head must survive the union.
    let b_dfa = Dfa::from_nfa(rsm.automaton_for(b_var).expect("B has a body"));
    assert!(b_dfa.accepts([tb]));
    assert!(b_dfa.accepts([tc]));
    assert!(!b_dfa.accepts([ta]));
}

#[test]
fn from_text_rejects_a_line_with_no_arrow() {
    let mut sym_source = SymbolSource::new();
    let err = Ecfg::from_text("S -> a\nnot a production\n", &mut sym_source)
        .expect_err("the second line has no `->`");
    match err {
        cfpq::CfpqError::MalformedGrammarText { line, .. } => assert_eq!(line, 2),
        other => panic!("expected MalformedGrammarText, got {other:?}"),
    }
}

#[test]
fn star_suffix_means_kleene_star_over_that_token() {
    let mut sym_source = SymbolSource::new();
    let ecfg = Ecfg::from_text("S -> a*", &mut sym_source).expect("parses");
    let s = sym_source.intern("S");
    let ta = sym_source.intern("a");

    let dfa = Dfa::from_nfa(rsm_start_automaton(&ecfg, s));
    assert!(dfa.accepts(Vec::<cfg_symbol::Symbol>::new()));
    assert!(dfa.accepts([ta]));
    assert!(dfa.accepts([ta, ta, ta]));
}

fn rsm_start_automaton(ecfg: &Ecfg, start: cfg_symbol::Symbol) -> automaton::FiniteAutomaton {
    let rsm = Rsm::from_ecfg(ecfg);
    rsm.automaton_for(start).expect("start has a body").clone()
}

#[test]
fn minimized_rsm_accepts_the_same_per_variable_language() {
    let mut sym_source = SymbolSource::new();
    let ecfg = Ecfg::from_text("S -> a a* | a*", &mut sym_source).expect("parses");
    let s = sym_source.intern("S");
    let ta = sym_source.intern("a");

    let rsm = Rsm::from_ecfg(&ecfg);
    let minimized = rsm.minimize();

    let original_dfa = Dfa::from_nfa(rsm.automaton_for(s).unwrap());
    let minimized_dfa = Dfa::from_nfa(minimized.automaton_for(s).unwrap());

    for len in 0..5 {
        let word = vec![ta; len];
        assert_eq!(
            original_dfa.accepts(word.clone()),
            minimized_dfa.accepts(word),
            "minimize must be language-preserving at length {len}"
        );
    }
}

#[test]
fn single_automaton_shortcut_names_it_as_variable_s() {
    let mut sym_source = SymbolSource::new();
    let ta = sym_source.intern("a");
    let fa = automaton::Regex::Symbol(ta).star().to_nfa();

    let s = sym_source.intern("S");
    let rsm = Rsm::from_fa(fa, s);

    assert_eq!(rsm.start(), s);
    assert_eq!(rsm.variables().collect::<Vec<_>>(), vec![s]);
}

/// A grammar with a fresh, unnamed (gensym) variable introduced by WCNF
/// binarization must still round-trip through `Ecfg::from_cfg` as a
/// *variable*: its synthesized name must stay uppercase-leading so
/// re-parsing the textualized grammar does not reclassify it as a
/// terminal (testable property 7).
#[test]
fn ecfg_from_cfg_keeps_fresh_wcnf_variables_as_variables() {
    let mut cfg = Cfg::new();
    let s = cfg.intern("S");
    let a = cfg.intern("A");
    let ta = cfg.intern("a");
    let tb = cfg.intern("b");
    // A body of length 3 forces binarization to mint a fresh variable.
    cfg.rule(s).rhs([a, a, tb]);
    cfg.rule(a).rhs([ta]);
    cfg.set_start(s);

    let wcnf_cfg = cfg_grammar::to_wcnf(&cfg);
    let lhs_count = wcnf_cfg
        .rules()
        .map(|r| r.lhs)
        .collect::<std::collections::HashSet<_>>()
        .len();

    let mut sym_source = wcnf_cfg.sym_source().clone();
    let ecfg = Ecfg::from_cfg(&wcnf_cfg, &mut sym_source).expect("textualized grammar re-parses");

    assert_eq!(
        ecfg.variables().count(),
        lhs_count,
        "every WCNF left-hand side, including fresh gensym variables, must survive as its own ECFG head"
    );
}
