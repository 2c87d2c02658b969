use cfg_ll1::{Analysis, ConflictPolicy, Grammar};
use test_case::test_case;

mod grammars;
mod support;

#[test_case(grammars::expression(), 5 ; "expression")]
#[test_case(grammars::balanced(), 8 ; "balanced parentheses")]
fn test_accepts_exactly_derivable_strings(grammar: Grammar, max_len: usize) {
    support::init_logger();
    let derivable = support::derivable_strings(&grammar, max_len);
    let analysis = Analysis::new(grammar, ConflictPolicy::default());
    assert!(analysis.table().is_ll1());
    let parser = analysis.parser();

    for string in support::all_strings(analysis.grammar(), max_len) {
        let outcome = parser.parse(&string);
        assert_eq!(
            outcome.is_accepted(),
            derivable.contains(&string),
            "input `{}`",
            support::names(analysis.grammar(), &string)
        );
    }
}

#[test_case(grammars::expression(), 5 ; "expression")]
#[test_case(grammars::balanced(), 8 ; "balanced parentheses")]
fn test_trace_is_leftmost_derivation(grammar: Grammar, max_len: usize) {
    let derivable = support::derivable_strings(&grammar, max_len);
    let analysis = Analysis::new(grammar, ConflictPolicy::default());
    let grammar = analysis.grammar();
    let parser = analysis.parser();

    for string in &derivable {
        let outcome = parser.parse(string);
        assert!(outcome.is_accepted());

        let mut form = vec![cfg_ll1::Symbol::NonTerminal(grammar.start())];
        for id in outcome.trace.applied_productions() {
            let production = grammar.production(id);
            let idx = form
                .iter()
                .position(|sym| sym.nonterminal().is_some())
                .unwrap();
            assert_eq!(form[idx].nonterminal(), Some(production.lhs));
            form.splice(idx..idx + 1, production.rhs_symbols().iter().copied());
        }
        let yielded: Vec<_> = form
            .iter()
            .map(|&sym| match sym {
                cfg_ll1::Symbol::Terminal(t) => t,
                other => panic!("unexpanded symbol {:?}", other),
            })
            .collect();
        assert_eq!(&yielded, string);
    }
}
