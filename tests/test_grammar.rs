use cfg_ll1::{Grammar, GrammarError, MalformedReason, ProductionId, Symbol, TokenizeError};
use test_case::test_case;

mod grammars;

#[test]
fn test_no_productions() {
    let builder = Grammar::builder();
    assert_eq!(builder.finalize("S"), Err(GrammarError::NoProductions));
}

#[test]
fn test_unknown_start_symbol() {
    let mut builder = Grammar::builder();
    builder.rule("S").rhs(["a"]);
    let err = builder.finalize("a").unwrap_err();
    assert_eq!(
        err,
        GrammarError::UnknownStartSymbol {
            name: "a".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "start symbol `a` is not the left-hand side of any production"
    );
}

#[test_case("", MalformedReason::Empty ; "empty")]
#[test_case("a b", MalformedReason::Whitespace ; "whitespace")]
#[test_case("$", MalformedReason::Reserved ; "end marker")]
#[test_case("ε", MalformedReason::Reserved ; "epsilon")]
fn test_malformed_symbol(name: &str, reason: MalformedReason) {
    let mut builder = Grammar::builder();
    builder.rule("S").rhs(["x"]).rhs(["x", name]);
    assert_eq!(
        builder.finalize("S"),
        Err(GrammarError::MalformedSymbol {
            production: ProductionId::from_index(1),
            name: name.to_string(),
            reason,
        })
    );
}

#[test]
fn test_alphabets() {
    let grammar = grammars::expression();
    let nonterminals: Vec<_> = grammar.nonterminals().map(|nt| grammar.name_of(nt)).collect();
    let terminals: Vec<_> = grammar.terminals().map(|t| grammar.name_of(t)).collect();
    assert_eq!(nonterminals, ["E", "X", "T", "Y", "F"]);
    assert_eq!(terminals, ["+", "*", "(", ")", "i"]);
    assert_eq!(grammar.name_of(grammar.start()), "E");
    assert_eq!(grammar.max_rhs_len(), 3);
}

#[test]
fn test_epsilon_productions() {
    let grammar = grammars::expression();
    let x = grammar.nonterminal("X").unwrap();
    let alternatives: Vec<_> = grammar.productions_for(x).collect();
    assert_eq!(alternatives.len(), 2);
    assert!(!alternatives[0].is_epsilon());
    assert!(alternatives[1].is_epsilon());
    assert_eq!(alternatives[1].rhs, [Symbol::Epsilon]);
    assert!(alternatives[1].rhs_symbols().is_empty());
}

#[test]
fn test_production_ids_follow_declaration_order() {
    let grammar = grammars::expression();
    for (idx, production) in grammar.productions().iter().enumerate() {
        assert_eq!(production.id, ProductionId::from_index(idx));
        assert_eq!(grammar.production(production.id), production);
    }
}

#[test]
fn test_stringify_to_bnf() {
    let grammar = grammars::balanced();
    assert_eq!(grammar.stringify_to_bnf(), "S -> ( S ) S\nS -> ε\n");
}

#[test]
fn test_multi_character_symbols() {
    let grammar = grammars::statements();
    assert!(grammar.nonterminal("else_part").is_some());
    assert!(grammar.terminal(":=").is_some());
    assert!(grammar.terminal("stmt").is_none());

    let tokens = grammar.tokenize_whitespace("id := num").unwrap();
    let names: Vec<_> = tokens.iter().map(|&t| grammar.name_of(t)).collect();
    assert_eq!(names, ["id", ":=", "num"]);
}

#[test]
fn test_tokenize_unknown_terminal() {
    let grammar = grammars::statements();
    assert_eq!(
        grammar.tokenize_whitespace("id  = num"),
        Err(TokenizeError::UnknownTerminal {
            token: "=".to_string(),
            offset: 4,
        })
    );

    let grammar = grammars::expression();
    assert_eq!(
        grammar.tokenize_chars("i-i"),
        Err(TokenizeError::UnknownTerminal {
            token: "-".to_string(),
            offset: 1,
        })
    );
}

#[test]
fn test_rhs_nonterminal_declared_later() {
    let mut builder = Grammar::builder();
    builder.rule("S").rhs(["A", "b"]).rule("A").rhs(["a"]);
    let grammar = builder.finalize("S").unwrap();
    let a = grammar.nonterminal("A").unwrap();
    assert_eq!(grammar.productions()[0].rhs[0], Symbol::NonTerminal(a));
    assert_eq!(grammar.num_terminals(), 2);
}

#[test]
fn test_symbol_ids_follow_first_occurrence() {
    let mut builder = Grammar::builder();
    builder
        .rule("S")
        .rhs(["b", "A", "a"])
        .rule("A")
        .rhs(["a", "c"])
        .rule("B");
    let grammar = builder.finalize("S").unwrap();
    let nonterminals: Vec<_> = grammar.nonterminals().map(|nt| grammar.name_of(nt)).collect();
    let terminals: Vec<_> = grammar.terminals().map(|t| grammar.name_of(t)).collect();
    assert_eq!(nonterminals, ["S", "A"]);
    assert_eq!(terminals, ["b", "a", "c"]);
    assert_eq!(grammar.nonterminal("B"), None);
    assert_eq!(grammar.terminal("B"), None);
    assert_eq!(
        grammar.productions()[1].lhs,
        grammar.nonterminal("A").unwrap()
    );
}
