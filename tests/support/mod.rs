#![allow(dead_code)]

use std::collections::{BTreeSet, VecDeque};

use cfg_ll1::{Grammar, GrammarAnalysisExt, Symbol, Terminal};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Collects every terminal string of at most `max_len` symbols that has a
/// leftmost derivation from the start symbol.
pub fn derivable_strings(grammar: &Grammar, max_len: usize) -> BTreeSet<Vec<Terminal>> {
    let nullable = grammar.nullable_set();
    // Lower bound on the length of any string the form derives.
    let min_yield = |form: &[Symbol]| {
        form.iter()
            .filter(|&&sym| match sym {
                Symbol::Terminal(_) => true,
                Symbol::NonTerminal(nt) => !nullable.is_nullable(nt),
                _ => false,
            })
            .count()
    };

    let mut result = BTreeSet::new();
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    let start = vec![Symbol::NonTerminal(grammar.start())];
    seen.insert(start.clone());
    queue.push_back(start);

    while let Some(form) = queue.pop_front() {
        let leftmost = form.iter().position(|sym| sym.nonterminal().is_some());
        let idx = match leftmost {
            Some(idx) => idx,
            None => {
                let string = form
                    .iter()
                    .filter_map(|&sym| match sym {
                        Symbol::Terminal(t) => Some(t),
                        _ => None,
                    })
                    .collect();
                result.insert(string);
                continue;
            }
        };
        let lhs = form[idx].nonterminal().unwrap();
        for production in grammar.productions_for(lhs) {
            let mut next = form[..idx].to_vec();
            next.extend(production.rhs_symbols().iter().copied());
            next.extend(form[idx + 1..].iter().copied());
            if min_yield(&next) <= max_len && seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    result
}

/// Enumerates every string over the grammar's terminals of at most
/// `max_len` symbols.
pub fn all_strings(grammar: &Grammar, max_len: usize) -> Vec<Vec<Terminal>> {
    let terminals: Vec<Terminal> = grammar.terminals().collect();
    let mut result = vec![vec![]];
    let mut layer = vec![vec![]];
    for _ in 0..max_len {
        let mut next_layer = vec![];
        for string in &layer {
            for &t in &terminals {
                let mut longer: Vec<Terminal> = string.clone();
                longer.push(t);
                next_layer.push(longer);
            }
        }
        result.extend(next_layer.iter().cloned());
        layer = next_layer;
    }
    result
}

pub fn names(grammar: &Grammar, string: &[Terminal]) -> String {
    string.iter().map(|&t| grammar.name_of(t)).collect::<Vec<_>>().join(" ")
}
