//! Nullable nonterminals.

use bit_vec::BitVec;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::symbol::{NonTerminal, Symbol};

/// The set of nonterminals that derive the empty sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NullableSet {
    bit_vec: BitVec,
    passes: usize,
}

impl NullableSet {
    /// Computes nullability for all nonterminals of the grammar.
    ///
    /// `A -> ε` makes `A` nullable. `A -> X1 … Xk` makes `A` nullable once
    /// every `Xi` is a nonterminal known to be nullable. Full passes over the
    /// productions repeat until one pass changes nothing.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = NullableSet {
            bit_vec: BitVec::from_elem(grammar.num_nonterminals(), false),
            passes: 0,
        };
        while this.pass(grammar) {}
        debug!(
            "nullable set: {} of {} nonterminals after {} passes",
            this.iter().count(),
            grammar.num_nonterminals(),
            this.passes
        );
        this
    }

    /// Runs one full pass. Returns whether anything changed.
    fn pass(&mut self, grammar: &Grammar) -> bool {
        self.passes += 1;
        let mut changed = false;
        for production in grammar.productions() {
            if self.bit_vec[production.lhs.usize()] {
                continue;
            }
            if self.derives_empty(&production.rhs[..]) {
                trace!("nullable: {}", grammar.name_of(production.lhs));
                self.bit_vec.set(production.lhs.usize(), true);
                changed = true;
            }
        }
        changed
    }

    /// Whether every symbol of the string is epsilon or a nullable
    /// nonterminal.
    pub fn derives_empty(&self, string: &[Symbol]) -> bool {
        string.iter().all(|&sym| match sym {
            Symbol::Epsilon => true,
            Symbol::NonTerminal(nt) => self.bit_vec[nt.usize()],
            Symbol::Terminal(_) | Symbol::EndMarker => false,
        })
    }

    /// Whether the nonterminal derives the empty sequence.
    #[inline]
    pub fn is_nullable(&self, nonterminal: NonTerminal) -> bool {
        self.bit_vec[nonterminal.usize()]
    }

    /// Iterates over nullable nonterminals.
    pub fn iter(&self) -> impl Iterator<Item = NonTerminal> + '_ {
        self.bit_vec
            .iter()
            .enumerate()
            .filter(|&(_, is_nullable)| is_nullable)
            .map(|(i, _)| NonTerminal::from_index(i))
    }

    /// Returns the number of full passes the computation took, including the
    /// last pass that changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }
}
