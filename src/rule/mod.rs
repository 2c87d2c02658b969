//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single nonterminal on its left-hand side and a nonempty array
//! of symbols on its right-hand side. An empty right-hand side is spelled
//! `[Epsilon]`.

pub mod builder;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::{NonTerminal, Symbol};

/// Identifies a production by its position in declaration order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct ProductionId(u32);

impl ProductionId {
    /// Creates an ID from a production index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        ProductionId(index as u32)
    }

    /// Cast the ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typical grammar rule representation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Production {
    /// The production's ID.
    pub id: ProductionId,
    /// The rule's left-hand side.
    pub lhs: NonTerminal,
    /// The rule's right-hand side. Never empty.
    pub rhs: Vec<Symbol>,
}

impl Production {
    /// Creates a new rule.
    pub fn new(id: ProductionId, lhs: NonTerminal, rhs: Vec<Symbol>) -> Self {
        debug_assert!(!rhs.is_empty(), "empty right-hand sides are spelled [Epsilon]");
        Production { id, lhs, rhs }
    }

    /// Whether this is an epsilon production, `A -> ε`.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.rhs == [Symbol::Epsilon]
    }

    /// The right-hand side without the epsilon placeholder.
    #[inline]
    pub fn rhs_symbols(&self) -> &[Symbol] {
        if self.is_epsilon() {
            &[]
        } else {
            &self.rhs[..]
        }
    }
}
