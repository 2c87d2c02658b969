//! Definitions of the immutable grammar type and its errors.

use std::error::Error;
use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rule::builder::GrammarBuilder;
use crate::rule::{Production, ProductionId};
use crate::symbol::{Named, NonTerminal, Symbol, SymbolNames, Terminal};

/// Context-free grammar type. Once finalized, a grammar is never mutated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grammar {
    /// The array of rules, in declaration order.
    productions: Vec<Production>,
    /// Names of all symbols.
    names: SymbolNames,
    /// The start symbol.
    start: NonTerminal,
}

/// Represents an error in the supplied productions. Analysis does not proceed
/// past it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// No productions were supplied.
    NoProductions,
    /// The start symbol is not the left-hand side of any production.
    UnknownStartSymbol {
        /// Name of the requested start symbol.
        name: String,
    },
    /// A production refers to a symbol with an invalid name.
    MalformedSymbol {
        /// The offending production.
        production: ProductionId,
        /// The symbol's name.
        name: String,
        /// What is wrong with the name.
        reason: MalformedReason,
    },
}

/// Why a symbol name was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedReason {
    /// The name is an empty string.
    Empty,
    /// The name contains whitespace.
    Whitespace,
    /// The name is the spelling of epsilon or of the end marker.
    Reserved,
}

/// Represents an error when splitting a parse request into terminals.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenizeError {
    /// The token is not a terminal of the grammar.
    UnknownTerminal {
        /// The token.
        token: String,
        /// Byte offset of the token in the input.
        offset: usize,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::NoProductions => write!(f, "grammar has no productions"),
            GrammarError::UnknownStartSymbol { name } => {
                write!(
                    f,
                    "start symbol `{}` is not the left-hand side of any production",
                    name
                )
            }
            GrammarError::MalformedSymbol {
                production,
                name,
                reason,
            } => {
                write!(
                    f,
                    "malformed symbol {:?} in production {}: {}",
                    name, production, reason
                )
            }
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MalformedReason::Empty => "empty name",
            MalformedReason::Whitespace => "name contains whitespace",
            MalformedReason::Reserved => "name is reserved for epsilon or the end marker",
        })
    }
}

impl Error for GrammarError {}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenizeError::UnknownTerminal { token, offset } => {
                write!(f, "unknown terminal {:?} at offset {}", token, offset)
            }
        }
    }
}

impl Error for TokenizeError {}

impl Grammar {
    pub(crate) fn new(productions: Vec<Production>, names: SymbolNames, start: NonTerminal) -> Self {
        Grammar {
            productions,
            names,
            start,
        }
    }

    /// Starts collecting productions for a new grammar.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Returns all productions in declaration order.
    pub fn productions(&self) -> &[Production] {
        &self.productions[..]
    }

    /// Returns the production with the given ID.
    pub fn production(&self, id: ProductionId) -> &Production {
        &self.productions[id.usize()]
    }

    /// Iterates over productions with the given left-hand side.
    pub fn productions_for(&self, lhs: NonTerminal) -> impl Iterator<Item = &Production> {
        self.productions.iter().filter(move |p| p.lhs == lhs)
    }

    /// Iterates over all nonterminals.
    pub fn nonterminals(&self) -> impl Iterator<Item = NonTerminal> {
        (0..self.names.num_nonterminals()).map(NonTerminal::from_index)
    }

    /// Iterates over all terminals.
    pub fn terminals(&self) -> impl Iterator<Item = Terminal> {
        (0..self.names.num_terminals()).map(Terminal::from_index)
    }

    /// Returns the start symbol.
    pub fn start(&self) -> NonTerminal {
        self.start
    }

    /// Returns the number of nonterminals.
    pub fn num_nonterminals(&self) -> usize {
        self.names.num_nonterminals()
    }

    /// Returns the number of terminals.
    pub fn num_terminals(&self) -> usize {
        self.names.num_terminals()
    }

    /// Returns the length of the longest right-hand side.
    pub fn max_rhs_len(&self) -> usize {
        self.productions
            .iter()
            .map(|p| p.rhs_symbols().len())
            .max()
            .unwrap_or(0)
    }

    /// Returns the name tables.
    pub fn names(&self) -> &SymbolNames {
        &self.names
    }

    /// Returns the name of a symbol.
    pub fn name_of(&self, sym: impl Into<Symbol>) -> &str {
        self.names.name_of(sym.into())
    }

    /// Looks up a nonterminal by name.
    pub fn nonterminal(&self, name: &str) -> Option<NonTerminal> {
        self.names.nonterminal(name)
    }

    /// Looks up a terminal by name.
    pub fn terminal(&self, name: &str) -> Option<Terminal> {
        self.names.terminal(name)
    }

    /// Wraps a symbol, a lookahead or a string of symbols so that it displays
    /// with names from this grammar.
    pub fn named<S>(&self, sym: S) -> Named<'_, S> {
        Named {
            names: &self.names,
            sym,
        }
    }

    /// Renders one production, e.g. `E -> T X`.
    pub fn display_production(&self, id: ProductionId) -> String {
        let production = self.production(id);
        format!(
            "{} -> {}",
            self.name_of(production.lhs),
            self.named(&production.rhs[..])
        )
    }

    /// Renders all productions, one per line.
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        for production in &self.productions {
            let _ = writeln!(result, "{}", self.display_production(production.id));
        }
        result
    }

    /// Splits the input into single-character terminals.
    pub fn tokenize_chars(&self, input: &str) -> Result<Vec<Terminal>, TokenizeError> {
        let mut buf = [0u8; 4];
        input
            .char_indices()
            .map(|(offset, ch)| {
                let token = ch.encode_utf8(&mut buf);
                self.lookup_token(token, offset)
            })
            .collect()
    }

    /// Splits the input into whitespace-separated terminals.
    pub fn tokenize_whitespace(&self, input: &str) -> Result<Vec<Terminal>, TokenizeError> {
        let base = input.as_ptr() as usize;
        input
            .split_whitespace()
            .map(|token| self.lookup_token(token, token.as_ptr() as usize - base))
            .collect()
    }

    fn lookup_token(&self, token: &str, offset: usize) -> Result<Terminal, TokenizeError> {
        self.terminal(token)
            .ok_or_else(|| TokenizeError::UnknownTerminal {
                token: token.to_string(),
                offset,
            })
    }
}
