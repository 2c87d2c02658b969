//! FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::prediction::FirstSets;
use crate::symbol::{Lookahead, NonTerminal, Symbol};

/// FOLLOW sets.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: BTreeMap<NonTerminal, BTreeSet<Lookahead>>,
    passes: usize,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// FOLLOW of the start symbol is seeded with the end marker. For every
    /// production `A -> α B β`, FOLLOW(B) gains FIRST(β), and also FOLLOW(A)
    /// when β is empty or nullable.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: grammar.nonterminals().map(|nt| (nt, BTreeSet::new())).collect(),
            passes: 0,
        };
        this.map
            .entry(grammar.start())
            .or_default()
            .insert(Lookahead::EndMarker);
        while this.pass(grammar, first_sets) {}
        debug!("FOLLOW sets: fixed point after {} passes", this.passes);
        this
    }

    /// Runs one full pass. Returns whether any set grew.
    fn pass(&mut self, grammar: &Grammar, first_sets: &FirstSets) -> bool {
        self.passes += 1;
        let mut changed = false;
        for production in grammar.productions() {
            let rhs = production.rhs_symbols();
            for (i, &sym) in rhs.iter().enumerate() {
                let nonterminal = match sym {
                    Symbol::NonTerminal(nt) => nt,
                    _ => continue,
                };
                let beta = first_sets.first_of_sequence(&rhs[i + 1..]);
                let mut gained: Vec<Lookahead> =
                    beta.terminals.into_iter().map(Lookahead::Terminal).collect();
                if beta.nullable {
                    gained.extend(self.map[&production.lhs].iter().copied());
                }
                let followed = self.map.entry(nonterminal).or_default();
                let prev_cardinality = followed.len();
                followed.extend(gained);
                if followed.len() != prev_cardinality {
                    trace!(
                        "FOLLOW({}) grew to {} lookaheads",
                        grammar.name_of(nonterminal),
                        followed.len()
                    );
                    changed = true;
                }
            }
        }
        changed
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn follow(&self, nonterminal: NonTerminal) -> &BTreeSet<Lookahead> {
        &self.map[&nonterminal]
    }

    /// Returns a reference to FOLLOW sets.
    pub fn follow_sets(&self) -> &BTreeMap<NonTerminal, BTreeSet<Lookahead>> {
        &self.map
    }

    /// Returns the number of full passes the computation took.
    pub fn passes(&self) -> usize {
        self.passes
    }
}
