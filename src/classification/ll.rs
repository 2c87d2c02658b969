//! The LL(1) prediction table and grammar class.

use std::collections::BTreeMap;

use bit_vec::BitVec;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::prediction::{FirstSets, FollowSets};
use crate::rule::ProductionId;
use crate::symbol::{Lookahead, NonTerminal, Symbol};

/// Decides which production keeps a cell claimed by two productions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConflictPolicy {
    /// The later production in declaration order overwrites the cell.
    #[default]
    LastWins,
    /// The earlier production keeps the cell.
    FirstWins,
}

/// A cell that two distinct productions would both occupy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConflictRecord {
    /// Row of the cell.
    pub nonterminal: NonTerminal,
    /// Column of the cell.
    pub lookahead: Lookahead,
    /// The production that does not end up in the cell.
    pub losing: ProductionId,
    /// The production that ends up in the cell, at the time of the conflict.
    pub winning: ProductionId,
}

/// LL(1) prediction table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictionTable {
    #[cfg_attr(feature = "serde", serde(with = "cells"))]
    map: BTreeMap<PredictionTableKey, ProductionId>,
    conflicts: Vec<ConflictRecord>,
    policy: ConflictPolicy,
}

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
struct PredictionTableKey {
    nonterminal: NonTerminal,
    lookahead: Lookahead,
}

/// Container for classifying nonterminals as LL(1) or context-free.
#[derive(Debug, Eq, PartialEq)]
pub struct LlClassification {
    classes: BTreeMap<NonTerminal, LlNonterminalClass>,
}

/// A nonterminal class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Context-free class.
    ContextFree,
}

impl PredictionTable {
    /// Creates a prediction table.
    ///
    /// `table[A, a]` is assigned the production `A → w` if and only if
    /// a is in FIRST(w), or w is nullable and a is in FOLLOW(A).
    /// Productions are visited in declaration order. Every cell claimed by two
    /// distinct productions is recorded as a conflict; the policy decides
    /// which production keeps the cell. Construction never fails.
    pub fn new(
        grammar: &Grammar,
        first: &FirstSets,
        follow: &FollowSets,
        policy: ConflictPolicy,
    ) -> Self {
        let mut this = PredictionTable {
            map: BTreeMap::new(),
            conflicts: vec![],
            policy,
        };
        for production in grammar.productions() {
            let rhs_first_set = first.first_of_sequence(&production.rhs[..]);
            for &terminal in &rhs_first_set.terminals {
                this.assign(grammar, production.lhs, terminal.into(), production.id);
            }
            if rhs_first_set.nullable {
                for &lookahead in follow.follow(production.lhs) {
                    this.assign(grammar, production.lhs, lookahead, production.id);
                }
            }
        }
        debug!(
            "prediction table: {} cells, {} conflicts",
            this.map.len(),
            this.conflicts.len()
        );
        this
    }

    fn assign(
        &mut self,
        grammar: &Grammar,
        nonterminal: NonTerminal,
        lookahead: Lookahead,
        production: ProductionId,
    ) {
        let key = PredictionTableKey {
            nonterminal,
            lookahead,
        };
        let cell = self.map.entry(key).or_insert(production);
        if *cell == production {
            return;
        }
        let (losing, winning) = match self.policy {
            ConflictPolicy::LastWins => (*cell, production),
            ConflictPolicy::FirstWins => (production, *cell),
        };
        *cell = winning;
        debug!(
            "conflict at ({}, {}): `{}` loses to `{}`",
            grammar.name_of(nonterminal),
            grammar.name_of(lookahead),
            grammar.display_production(losing),
            grammar.display_production(winning)
        );
        self.conflicts.push(ConflictRecord {
            nonterminal,
            lookahead,
            losing,
            winning,
        });
    }

    /// Looks up the production predicted for the nonterminal under the
    /// lookahead.
    pub fn get(&self, nonterminal: NonTerminal, lookahead: Lookahead) -> Option<ProductionId> {
        self.map
            .get(&PredictionTableKey {
                nonterminal,
                lookahead,
            })
            .copied()
    }

    /// Iterates over populated cells of one row, in lookahead order.
    pub fn row(
        &self,
        nonterminal: NonTerminal,
    ) -> impl Iterator<Item = (Lookahead, ProductionId)> + '_ {
        self.iter()
            .filter(move |&(nt, _, _)| nt == nonterminal)
            .map(|(_, lookahead, production)| (lookahead, production))
    }

    /// Iterates over all populated cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (NonTerminal, Lookahead, ProductionId)> + '_ {
        self.map
            .iter()
            .map(|(key, &production)| (key.nonterminal, key.lookahead, production))
    }

    /// Returns the number of populated cells.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns all conflicts in the order they were found.
    pub fn conflicts(&self) -> &[ConflictRecord] {
        &self.conflicts[..]
    }

    /// Whether the grammar is LL(1), that is, whether no conflicts were found.
    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Returns the policy the table was built with.
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Classifies nonterminals as LL(1) or context-free.
    ///
    /// A nonterminal is context-free if its row has a conflict, or if one of its
    /// productions mentions a context-free nonterminal.
    pub fn classify(&self, grammar: &Grammar) -> LlClassification {
        let mut property = BitVec::from_elem(grammar.num_nonterminals(), false);
        for conflict in &self.conflicts {
            property.set(conflict.nonterminal.usize(), true);
        }
        let mut changed = true;
        while changed {
            changed = false;
            for production in grammar.productions() {
                if property[production.lhs.usize()] {
                    continue;
                }
                let any = production.rhs.iter().any(|&sym| match sym {
                    Symbol::NonTerminal(nt) => property[nt.usize()],
                    _ => false,
                });
                if any {
                    property.set(production.lhs.usize(), true);
                    changed = true;
                }
            }
        }
        let classes = grammar
            .nonterminals()
            .map(|nt| {
                let class = if property[nt.usize()] {
                    LlNonterminalClass::ContextFree
                } else {
                    LlNonterminalClass::Ll1
                };
                (nt, class)
            })
            .collect();
        LlClassification { classes }
    }
}

impl LlClassification {
    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<NonTerminal, LlNonterminalClass> {
        &self.classes
    }

    /// Returns the class of one nonterminal.
    pub fn class(&self, nonterminal: NonTerminal) -> LlNonterminalClass {
        self.classes[&nonterminal]
    }
}

/// Populated cells are stored as a sequence of `(nonterminal, lookahead,
/// production)` entries, in row order.
#[cfg(feature = "serde")]
mod cells {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::PredictionTableKey;
    use crate::rule::ProductionId;
    use crate::symbol::{Lookahead, NonTerminal};

    pub(super) fn serialize<S>(
        map: &BTreeMap<PredictionTableKey, ProductionId>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(
            map.iter()
                .map(|(key, &production)| (key.nonterminal, key.lookahead, production)),
        )
    }

    pub(super) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<PredictionTableKey, ProductionId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells: Vec<(NonTerminal, Lookahead, ProductionId)> =
            Deserialize::deserialize(deserializer)?;
        Ok(cells
            .into_iter()
            .map(|(nonterminal, lookahead, production)| {
                (
                    PredictionTableKey {
                        nonterminal,
                        lookahead,
                    },
                    production,
                )
            })
            .collect())
    }
}
