//! Standard regex syntax translation (`parse_regex`), covering the pieces
//! of `regex-syntax`'s HIR this crate's alphabet-based matching can express:
//! literals, classes, and each repetition shape (`*`, `+`, `?`, bounded).

use cfg_symbol::SymbolSource;
use test_case::test_case;

use automaton::{parse_regex, Dfa};

fn accepts(pattern: &str, word: &str) -> bool {
    let mut sym_source = SymbolSource::new();
    let regex = parse_regex(pattern, &mut sym_source).expect("pattern parses");
    let dfa = Dfa::from_nfa(&regex.to_nfa());
    let syms: Vec<_> = word.chars().map(|c| sym_source.intern(&c.to_string())).collect();
    dfa.accepts(syms)
}

#[test_case("ab|cd", "ab", true)]
#[test_case("ab|cd", "cd", true)]
#[test_case("ab|cd", "ac", false)]
#[test_case("a*", "", true)]
#[test_case("a*", "aaaa", true)]
#[test_case("a+", "", false)]
#[test_case("a+", "a", true)]
#[test_case("a?b", "b", true)]
#[test_case("a?b", "ab", true)]
#[test_case("a?b", "aab", false)]
#[test_case("a{2,3}", "a", false)]
#[test_case("a{2,3}", "aa", true)]
#[test_case("a{2,3}", "aaa", true)]
#[test_case("a{2,3}", "aaaa", false)]
#[test_case("[abc]", "a", true)]
#[test_case("[abc]", "d", false)]
fn repetitions_and_classes_match_the_expected_words(pattern: &str, word: &str, expected: bool) {
    assert_eq!(
        accepts(pattern, word),
        expected,
        "pattern {pattern:?} against {word:?}"
    );
}

#[test]
fn anchors_are_reported_as_unsupported_rather_than_silently_ignored() {
    let mut sym_source = SymbolSource::new();
    let err = parse_regex("^a$", &mut sym_source).expect_err("anchors are not expressible");
    assert!(matches!(err, automaton::RegexSyntaxError::Unsupported(_)));
}
