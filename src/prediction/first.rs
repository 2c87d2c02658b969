//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::prediction::NullableSet;
use crate::symbol::{NonTerminal, Symbol, Terminal};

/// FIRST sets of all nonterminals.
///
/// Sets hold terminals only. Whether a nonterminal or a string derives the
/// empty sequence is tracked by the frozen [`NullableSet`] these sets were
/// computed with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    map: BTreeMap<NonTerminal, BTreeSet<Terminal>>,
    nullable: NullableSet,
    passes: usize,
}

/// The FIRST set of a string of symbols.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequenceFirst {
    /// Terminals that can begin the string.
    pub terminals: BTreeSet<Terminal>,
    /// Whether the whole string derives the empty sequence.
    pub nullable: bool,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, t), in which N is related to t
    /// if the grammar has a production of the form `N ⸬= α t β`, where
    /// α is a nullable string of symbols.
    ///
    /// Full passes over the productions grow the sets until one pass changes
    /// nothing.
    pub fn new(grammar: &Grammar, nullable: &NullableSet) -> Self {
        let mut this = FirstSets {
            map: grammar.nonterminals().map(|nt| (nt, BTreeSet::new())).collect(),
            nullable: nullable.clone(),
            passes: 0,
        };
        while this.pass(grammar) {}
        debug!("FIRST sets: fixed point after {} passes", this.passes);
        this
    }

    /// Runs one full pass. Returns whether any set grew.
    fn pass(&mut self, grammar: &Grammar) -> bool {
        self.passes += 1;
        let mut changed = false;
        let mut lookahead = SequenceFirst::default();
        for production in grammar.productions() {
            self.first_set_collect(&production.rhs[..], &mut lookahead);
            let first_set = self.map.entry(production.lhs).or_default();
            let prev_cardinality = first_set.len();
            first_set.append(&mut lookahead.terminals);
            if first_set.len() != prev_cardinality {
                trace!(
                    "FIRST({}) grew to {} terminals",
                    grammar.name_of(production.lhs),
                    first_set.len()
                );
                changed = true;
            }
        }
        changed
    }

    /// Calculates the FIRST set for a string of symbols.
    pub fn first_of_sequence(&self, string: &[Symbol]) -> SequenceFirst {
        let mut result = SequenceFirst::default();
        self.first_set_collect(string, &mut result);
        result
    }

    /// Compute a FIRST set.
    fn first_set_collect(&self, string: &[Symbol], result: &mut SequenceFirst) {
        for &sym in string {
            match sym {
                Symbol::Terminal(terminal) => {
                    result.terminals.insert(terminal);
                    result.nullable = false;
                    return;
                }
                Symbol::NonTerminal(nonterminal) => {
                    if let Some(set) = self.map.get(&nonterminal) {
                        result.terminals.extend(set.iter().copied());
                    }
                    if !self.nullable.is_nullable(nonterminal) {
                        result.nullable = false;
                        return;
                    }
                }
                Symbol::Epsilon => {}
                Symbol::EndMarker => {
                    result.nullable = false;
                    return;
                }
            }
        }
        result.nullable = true;
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn first(&self, nonterminal: NonTerminal) -> &BTreeSet<Terminal> {
        &self.map[&nonterminal]
    }

    /// Returns the nullability these sets were computed with.
    pub fn nullable_set(&self) -> &NullableSet {
        &self.nullable
    }

    /// Whether the nonterminal derives the empty sequence.
    pub fn is_nullable(&self, nonterminal: NonTerminal) -> bool {
        self.nullable.is_nullable(nonterminal)
    }

    /// Returns a reference to FIRST sets.
    pub fn first_sets(&self) -> &BTreeMap<NonTerminal, BTreeSet<Terminal>> {
        &self.map
    }

    /// Returns the number of full passes the computation took.
    pub fn passes(&self) -> usize {
        self.passes
    }
}
