//! Conversion to Weak Chomsky Normal Form (WCNF).
//!
//! WCNF relaxes classical CNF by keeping `lhs -> epsilon` productions instead
//! of forbidding the empty string: every production is of the form
//! `A -> B C`, `A -> a`, or `A -> epsilon`, with `B`, `C` variables and `a` a
//! terminal. This is the normal form the fixed-point CFPQ algorithms
//! (Hellings, Matrix) both require.
//!
//! Conversion proceeds in four ordered passes:
//! 1. unit-production elimination (`A -> B` folded into `B`'s own bodies),
//! 2. useless-rule removal (unreachable or unproductive symbols dropped),
//! 3. terminal isolation (a terminal in a body of length >= 2 is replaced by
//!    a fresh variable with a unit rule for it),
//! 4. binarization (a body of length >= 3 is split into a chain of fresh
//!    variables, each with a binary rule).
//!
//! Epsilon productions are carried through unchanged; whether the resulting
//! grammar derives epsilon exactly when the source grammar did is not
//! re-verified here; callers relying on epsilon-membership should check it
//! independently.

use std::collections::HashMap;

use cfg_symbol::Symbol;

use crate::cfg::Cfg;

/// Converts `grammar` to an equivalent grammar in Weak Chomsky Normal Form.
/// The returned grammar has its own extended symbol source (sharing the
/// same IDs for symbols already present in `grammar`, plus fresh symbols
/// for intermediate variables introduced during isolation/binarization).
pub fn to_wcnf(grammar: &Cfg) -> Cfg {
    let mut cfg = eliminate_unit_rules(grammar);
    log::trace!("wcnf: unit elimination left {} rules", cfg.num_rules());
    cfg.remove_useless_rules();
    log::trace!("wcnf: useless-rule removal left {} rules", cfg.num_rules());
    isolate_terminals(&mut cfg);
    binarize(&mut cfg);
    log::trace!("wcnf: isolation/binarization left {} rules", cfg.num_rules());
    cfg
}

/// Pass 1: eliminates unit productions `A -> B` (`B` a variable) by
/// replacing each with copies of `B`'s own productions, following chains of
/// unit productions to a fixed point while guarding against unit cycles.
fn eliminate_unit_rules(grammar: &Cfg) -> Cfg {
    let mut unit_graph: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
    let mut non_unit_rules = Vec::new();

    for rule in grammar.rules() {
        if rule.is_unit(grammar) {
            unit_graph.entry(rule.lhs).or_default().push(rule.rhs[0]);
        } else {
            non_unit_rules.push((rule.lhs, rule.rhs.to_vec()));
        }
    }

    let mut cfg = Cfg::with_sym_source(grammar.sym_source().clone());
    if let Some(start) = grammar.start() {
        cfg.set_start(start);
    }

    for (lhs, rhs) in &non_unit_rules {
        cfg.add_rule(*lhs, rhs.clone());
    }

    // For every variable, find the set of variables reachable through unit
    // productions alone, then copy over every non-unit rule of each reached
    // variable.
    for lhs in unit_closure_sources(&unit_graph) {
        for reached in unit_reachable(&unit_graph, lhs) {
            for (other_lhs, rhs) in &non_unit_rules {
                if *other_lhs == reached {
                    cfg.add_rule(lhs, rhs.clone());
                }
            }
        }
    }

    cfg
}

fn unit_closure_sources(unit_graph: &HashMap<Symbol, Vec<Symbol>>) -> Vec<Symbol> {
    unit_graph.keys().copied().collect()
}

fn unit_reachable(unit_graph: &HashMap<Symbol, Vec<Symbol>>, start: Symbol) -> Vec<Symbol> {
    let mut seen = vec![start];
    let mut stack = vec![start];
    while let Some(sym) = stack.pop() {
        if let Some(targets) = unit_graph.get(&sym) {
            for &target in targets {
                if !seen.contains(&target) {
                    seen.push(target);
                    stack.push(target);
                }
            }
        }
    }
    seen
}

/// Pass 3: replaces every terminal occurring in a body of length >= 2 with a
/// fresh variable `X_t -> t`, reusing one fresh variable per distinct
/// terminal.
fn isolate_terminals(cfg: &mut Cfg) {
    let mut substitutes: HashMap<Symbol, Symbol> = HashMap::new();
    let mut new_rules = Vec::new();

    let old_rules: Vec<(Symbol, Vec<Symbol>)> =
        cfg.rules().map(|r| (r.lhs, r.rhs.to_vec())).collect();

    for (lhs, rhs) in old_rules {
        if rhs.len() < 2 {
            new_rules.push((lhs, rhs));
            continue;
        }
        let mut new_rhs = Vec::with_capacity(rhs.len());
        for sym in rhs {
            if cfg.is_variable(sym) {
                new_rhs.push(sym);
            } else {
                let replacement = *substitutes.entry(sym).or_insert_with(|| {
                    let [fresh] = cfg.sym::<1>();
                    new_rules.push((fresh, vec![sym]));
                    fresh
                });
                new_rhs.push(replacement);
            }
        }
        new_rules.push((lhs, new_rhs));
    }

    replace_rules(cfg, new_rules);
}

/// Pass 4: splits every body of length >= 3 into a right-branching chain of
/// binary rules using fresh intermediate variables, e.g.
/// `A -> B C D E` becomes `A -> B X1`, `X1 -> C X2`, `X2 -> D E`.
fn binarize(cfg: &mut Cfg) {
    let old_rules: Vec<(Symbol, Vec<Symbol>)> =
        cfg.rules().map(|r| (r.lhs, r.rhs.to_vec())).collect();
    let mut new_rules = Vec::new();

    for (lhs, rhs) in old_rules {
        if rhs.len() <= 2 {
            new_rules.push((lhs, rhs));
            continue;
        }
        let mut current_lhs = lhs;
        let mut remaining = &rhs[..];
        while remaining.len() > 2 {
            let [fresh] = cfg.sym::<1>();
            new_rules.push((current_lhs, vec![remaining[0], fresh]));
            current_lhs = fresh;
            remaining = &remaining[1..];
        }
        new_rules.push((current_lhs, remaining.to_vec()));
    }

    replace_rules(cfg, new_rules);
}

fn replace_rules(cfg: &mut Cfg, rules: Vec<(Symbol, Vec<Symbol>)>) {
    cfg.retain(|_| false);
    for (lhs, rhs) in rules {
        cfg.add_rule(lhs, rhs);
    }
}
