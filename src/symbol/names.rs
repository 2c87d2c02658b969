//! Name tables for finalized grammars.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;

/// Maps between symbol IDs and their names.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolNames {
    nonterminals: Vec<String>,
    terminals: Vec<String>,
    nonterminal_ids: BTreeMap<String, NonTerminal>,
    terminal_ids: BTreeMap<String, Terminal>,
}

impl SymbolNames {
    /// Creates name tables from names listed in ID order.
    pub fn new(nonterminals: Vec<String>, terminals: Vec<String>) -> Self {
        let nonterminal_ids = nonterminals
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), NonTerminal::from_index(i)))
            .collect();
        let terminal_ids = terminals
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), Terminal::from_index(i)))
            .collect();
        SymbolNames {
            nonterminals,
            terminals,
            nonterminal_ids,
            terminal_ids,
        }
    }

    /// Returns the name of any symbol.
    pub fn name_of(&self, sym: Symbol) -> &str {
        match sym {
            Symbol::NonTerminal(nt) => &self.nonterminals[nt.usize()],
            Symbol::Terminal(t) => &self.terminals[t.usize()],
            Symbol::Epsilon => EPSILON_NAME,
            Symbol::EndMarker => END_MARKER_NAME,
        }
    }

    /// Looks up a nonterminal by name.
    pub fn nonterminal(&self, name: &str) -> Option<NonTerminal> {
        self.nonterminal_ids.get(name).copied()
    }

    /// Looks up a terminal by name.
    pub fn terminal(&self, name: &str) -> Option<Terminal> {
        self.terminal_ids.get(name).copied()
    }

    /// Returns the number of nonterminals.
    pub fn num_nonterminals(&self) -> usize {
        self.nonterminals.len()
    }

    /// Returns the number of terminals.
    pub fn num_terminals(&self) -> usize {
        self.terminals.len()
    }
}
