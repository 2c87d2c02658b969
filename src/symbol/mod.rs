//! A type that can represent symbols in a context-free grammar. Terminals and nonterminals are
//! distinguished by their IDs, which are dense indices into the grammar's name tables.

pub mod intern;
pub mod names;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::intern::NameInterner;
pub use self::names::SymbolNames;

/// Spelling of the empty sequence.
pub const EPSILON_NAME: &str = "ε";
/// Spelling of the end-of-input marker.
pub const END_MARKER_NAME: &str = "$";

/// A nonterminal symbol.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct NonTerminal(u32);

/// A terminal symbol.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Terminal(u32);

impl NonTerminal {
    /// Creates a nonterminal from its index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        NonTerminal(index as u32)
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl Terminal {
    /// Creates a terminal from its index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Terminal(index as u32)
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

/// A grammar symbol, as it appears on the right-hand side of a production
/// or on the parser stack.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    /// A terminal.
    Terminal(Terminal),
    /// A nonterminal.
    NonTerminal(NonTerminal),
    /// The empty sequence. Only ever the sole symbol of a right-hand side.
    Epsilon,
    /// The end of input. Only ever found at the bottom of the parser stack.
    EndMarker,
}

impl Symbol {
    /// Returns the nonterminal, if this symbol is one.
    #[inline]
    pub fn nonterminal(self) -> Option<NonTerminal> {
        match self {
            Symbol::NonTerminal(nt) => Some(nt),
            _ => None,
        }
    }

    /// Returns the lookahead this symbol must match, if it is a terminal or
    /// the end marker.
    #[inline]
    pub fn lookahead(self) -> Option<Lookahead> {
        match self {
            Symbol::Terminal(t) => Some(Lookahead::Terminal(t)),
            Symbol::EndMarker => Some(Lookahead::EndMarker),
            _ => None,
        }
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nonterminal: NonTerminal) -> Self {
        Symbol::NonTerminal(nonterminal)
    }
}

/// A single symbol of lookahead: a terminal, or the end of input.
///
/// `EndMarker` orders after every terminal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Lookahead {
    /// A terminal.
    Terminal(Terminal),
    /// The end of input.
    EndMarker,
}

impl Lookahead {
    /// Returns the terminal, unless this is the end marker.
    #[inline]
    pub fn terminal(self) -> Option<Terminal> {
        match self {
            Lookahead::Terminal(t) => Some(t),
            Lookahead::EndMarker => None,
        }
    }
}

impl From<Terminal> for Lookahead {
    fn from(terminal: Terminal) -> Self {
        Lookahead::Terminal(terminal)
    }
}

impl From<Lookahead> for Symbol {
    fn from(lookahead: Lookahead) -> Self {
        match lookahead {
            Lookahead::Terminal(t) => Symbol::Terminal(t),
            Lookahead::EndMarker => Symbol::EndMarker,
        }
    }
}

/// Displays a symbol with its name.
pub struct Named<'a, S> {
    pub(crate) names: &'a SymbolNames,
    pub(crate) sym: S,
}

impl<'a> fmt::Display for Named<'a, Symbol> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.names.name_of(self.sym))
    }
}

impl<'a> fmt::Display for Named<'a, Lookahead> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.names.name_of(self.sym.into()))
    }
}

impl<'a> fmt::Display for Named<'a, &'a [Symbol]> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, &sym) in self.sym.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(self.names.name_of(sym))?;
        }
        Ok(())
    }
}
