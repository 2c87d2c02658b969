//! Grammar rules can be built with the builder pattern.

use log::debug;

use crate::grammar::{Grammar, GrammarError, MalformedReason};
use crate::rule::{Production, ProductionId};
use crate::symbol::{
    NameInterner, NonTerminal, Symbol, SymbolNames, Terminal, END_MARKER_NAME, EPSILON_NAME,
};

/// A production whose symbols are still interned names.
struct RawProduction {
    lhs: usize,
    rhs: Vec<usize>,
}

/// Collects productions by name. Finalizing the builder resolves names into
/// symbols and yields an immutable [`Grammar`].
#[derive(Default)]
pub struct GrammarBuilder {
    names: NameInterner,
    productions: Vec<RawProduction>,
}

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: usize,
    grammar: &'a mut GrammarBuilder,
}

impl GrammarBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(&mut self, lhs: &str) -> RuleBuilder<'_> {
        let lhs = self.names.intern(lhs);
        RuleBuilder { lhs, grammar: self }
    }

    /// Returns the number of productions added so far.
    pub fn num_productions(&self) -> usize {
        self.productions.len()
    }

    /// Validates the collected productions and builds the grammar.
    ///
    /// Every name that appears on some left-hand side is a nonterminal. Every
    /// other name on a right-hand side is a terminal.
    pub fn finalize(self, start: &str) -> Result<Grammar, GrammarError> {
        if self.productions.is_empty() {
            return Err(GrammarError::NoProductions);
        }
        let names = self.names.into_names();
        for (idx, raw) in self.productions.iter().enumerate() {
            check_name(idx, &names[raw.lhs])?;
            for &name in &raw.rhs {
                check_name(idx, &names[name])?;
            }
        }

        // Nonterminals are numbered by first occurrence on a left-hand side.
        let mut symbols: Vec<Option<Symbol>> = vec![None; names.len()];
        let mut nonterminal_names = vec![];
        let mut lhs_ids = Vec::with_capacity(self.productions.len());
        for raw in &self.productions {
            let lhs = match symbols[raw.lhs] {
                Some(Symbol::NonTerminal(nonterminal)) => nonterminal,
                _ => {
                    let nonterminal = NonTerminal::from_index(nonterminal_names.len());
                    symbols[raw.lhs] = Some(Symbol::NonTerminal(nonterminal));
                    nonterminal_names.push(names[raw.lhs].clone());
                    nonterminal
                }
            };
            lhs_ids.push(lhs);
        }
        let start_sym = names
            .iter()
            .position(|name| name == start)
            .and_then(|idx| symbols[idx])
            .and_then(Symbol::nonterminal)
            .ok_or_else(|| GrammarError::UnknownStartSymbol {
                name: start.to_string(),
            })?;

        let mut terminal_names = vec![];
        let mut productions = Vec::with_capacity(self.productions.len());
        for (idx, raw) in self.productions.iter().enumerate() {
            let rhs = if raw.rhs.is_empty() {
                vec![Symbol::Epsilon]
            } else {
                raw.rhs
                    .iter()
                    .map(|&name| {
                        *symbols[name].get_or_insert_with(|| {
                            let terminal = Terminal::from_index(terminal_names.len());
                            terminal_names.push(names[name].clone());
                            Symbol::Terminal(terminal)
                        })
                    })
                    .collect()
            };
            productions.push(Production::new(
                ProductionId::from_index(idx),
                lhs_ids[idx],
                rhs,
            ));
        }

        let names = SymbolNames::new(nonterminal_names, terminal_names);
        debug!(
            "finalized grammar: {} productions, {} nonterminals, {} terminals",
            productions.len(),
            names.num_nonterminals(),
            names.num_terminals()
        );
        Ok(Grammar::new(productions, names, start_sym))
    }
}

impl<'a> RuleBuilder<'a> {
    /// Starts building a new rule with the given LHS.
    pub fn rule(self, lhs: &str) -> Self {
        self.grammar.rule(lhs)
    }

    /// Adds a rule alternative to the grammar. An empty sequence adds an
    /// epsilon production.
    pub fn rhs<I, S>(self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rhs = syms
            .into_iter()
            .map(|s| self.grammar.names.intern(s.as_ref()))
            .collect();
        self.grammar.productions.push(RawProduction { lhs: self.lhs, rhs });
        self
    }

    /// Adds an epsilon alternative, `lhs -> ε`.
    pub fn epsilon(self) -> Self {
        self.rhs(None::<&str>)
    }
}

fn check_name(production: usize, name: &str) -> Result<(), GrammarError> {
    let reason = if name.is_empty() {
        MalformedReason::Empty
    } else if name.chars().any(char::is_whitespace) {
        MalformedReason::Whitespace
    } else if name == EPSILON_NAME || name == END_MARKER_NAME {
        MalformedReason::Reserved
    } else {
        return Ok(());
    };
    Err(GrammarError::MalformedSymbol {
        production: ProductionId::from_index(production),
        name: name.to_string(),
        reason,
    })
}
