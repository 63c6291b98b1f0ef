use cfg_grammar::{to_wcnf, Cfg};

fn is_wcnf_rule(cfg: &Cfg, rhs: &[cfg_grammar::Symbol]) -> bool {
    match rhs.len() {
        0 => true,
        1 => !cfg.is_variable(rhs[0]),
        2 => cfg.is_variable(rhs[0]) && cfg.is_variable(rhs[1]),
        _ => false,
    }
}

#[test]
fn wcnf_rules_are_shaped_epsilon_terminal_or_binary() {
    let mut cfg = Cfg::new();
    let [start, a, b, c, x, y] = cfg.sym();

    cfg.rule(start)
        .rhs([a, x, b])
        .rhs([c])
        .rule(b)
        .rhs([a, a])
        .rhs([a, c])
        .rule(c)
        .rhs([x])
        .rhs([y])
        .rule(a)
        .rhs([]);
    cfg.set_start(start);

    let wcnf = to_wcnf(&cfg);

    for rule in wcnf.rules() {
        assert!(
            is_wcnf_rule(&wcnf, rule.rhs),
            "rule {:?} -> {:?} is not in WCNF shape",
            rule.lhs,
            rule.rhs
        );
    }
}

#[test]
fn wcnf_conversion_removes_unit_productions() {
    let mut cfg = Cfg::new();
    let [start, middle, a] = cfg.sym();

    // start -> middle (unit), middle -> a b (long body forces isolation)
    cfg.rule(start).rhs([middle]).rule(middle).rhs([a]);
    cfg.set_start(start);

    let wcnf = to_wcnf(&cfg);

    for rule in wcnf.rules() {
        assert!(
            !rule.is_unit(&wcnf),
            "unit rule {:?} -> {:?} survived WCNF conversion",
            rule.lhs,
            rule.rhs
        );
    }
}

#[test]
fn wcnf_conversion_drops_useless_rules() {
    let mut cfg = Cfg::new();
    let [start, unreachable_sym, a] = cfg.sym();

    cfg.rule(start).rhs([a]).rule(unreachable_sym).rhs([a]);
    cfg.set_start(start);

    let wcnf = to_wcnf(&cfg);

    assert!(wcnf
        .rules()
        .all(|rule| rule.lhs != unreachable_sym));
}

#[test]
fn wcnf_isolates_terminals_in_long_bodies() {
    let mut cfg = Cfg::new();
    let [start, b] = cfg.sym();
    let t = cfg.intern("t");

    cfg.rule(start).rhs([t, b]).rule(b).rhs([t]);
    cfg.set_start(start);

    let wcnf = to_wcnf(&cfg);

    // The binary rule for `start` must reference a variable standing in for
    // `t`, not the terminal itself.
    let start_rule = wcnf
        .rules()
        .find(|rule| rule.lhs == start)
        .expect("start rule retained");
    assert_eq!(start_rule.rhs.len(), 2);
    assert!(wcnf.is_variable(start_rule.rhs[0]));
    assert!(wcnf.is_variable(start_rule.rhs[1]));
}

#[test]
fn wcnf_keeps_epsilon_rules() {
    let mut cfg = Cfg::new();
    let [start] = cfg.sym();
    cfg.rule(start).rhs([]);
    cfg.set_start(start);

    let wcnf = to_wcnf(&cfg);

    assert!(wcnf.rules().any(|rule| rule.lhs == start && rule.rhs.is_empty()));
}
