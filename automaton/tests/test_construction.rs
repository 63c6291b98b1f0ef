use automaton::{Dfa, Regex};
use cfg_symbol::SymbolSource;

fn accepts(regex: &Regex, words: &[&str], expect: bool, sym_source: &mut SymbolSource) {
    let dfa = Dfa::from_nfa(&regex.to_nfa());
    for word in words {
        let syms: Vec<_> = word.chars().map(|c| sym_source.intern(&c.to_string())).collect();
        assert_eq!(
            dfa.accepts(syms),
            expect,
            "expected {:?} acceptance of {:?} to be {}",
            regex,
            word,
            expect
        );
    }
}

#[test]
fn symbol_accepts_only_itself() {
    let mut syms = SymbolSource::new();
    let a = syms.intern("a");
    let regex = Regex::Symbol(a);
    accepts(&regex, &["a"], true, &mut syms);
    accepts(&regex, &["", "aa", "b"], false, &mut syms);
}

#[test]
fn concat_accepts_the_sequence() {
    let mut syms = SymbolSource::new();
    let a = syms.intern("a");
    let b = syms.intern("b");
    let regex = Regex::Symbol(a).concat(Regex::Symbol(b));
    accepts(&regex, &["ab"], true, &mut syms);
    accepts(&regex, &["a", "b", "ba", "abb"], false, &mut syms);
}

#[test]
fn union_accepts_either_branch() {
    let mut syms = SymbolSource::new();
    let a = syms.intern("a");
    let b = syms.intern("b");
    let regex = Regex::Symbol(a).union(Regex::Symbol(b));
    accepts(&regex, &["a", "b"], true, &mut syms);
    accepts(&regex, &["ab", "", "c"], false, &mut syms);
}

#[test]
fn star_accepts_any_number_of_repetitions_including_zero() {
    let mut syms = SymbolSource::new();
    let a = syms.intern("a");
    let regex = Regex::Symbol(a).star();
    accepts(&regex, &["", "a", "aa", "aaaaa"], true, &mut syms);
    accepts(&regex, &["b", "ab"], false, &mut syms);
}

#[test]
fn minimized_dfa_accepts_the_same_language() {
    let mut syms = SymbolSource::new();
    let a = syms.intern("a");
    let b = syms.intern("b");
    // (a|b)*ab
    let regex = Regex::Symbol(a)
        .union(Regex::Symbol(b))
        .star()
        .concat(Regex::Symbol(a))
        .concat(Regex::Symbol(b));

    let dfa = Dfa::from_nfa(&regex.to_nfa());
    let minimized = dfa.minimize();

    for word in ["ab", "aab", "bab", "abab", "a", "b", "", "ba"] {
        let syms_seq: Vec<_> = word.chars().map(|c| syms.intern(&c.to_string())).collect();
        assert_eq!(
            dfa.accepts(syms_seq.clone()),
            minimized.accepts(syms_seq),
            "minimized DFA disagrees with original on {word:?}"
        );
    }
}
