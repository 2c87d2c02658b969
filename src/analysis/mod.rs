//! Runs every analysis phase once, in dependency order.

use crate::classification::{ConflictPolicy, PredictionTable};
use crate::grammar::Grammar;
use crate::parse::{ParserConfig, PredictiveParser};
use crate::prediction::{FirstSets, FollowSets, NullableSet};

/// Frozen results of analyzing one grammar.
///
/// Nullability, FIRST sets, FOLLOW sets and the prediction table are each
/// computed exactly once. All of them are read-only afterwards and may be
/// shared between threads.
#[derive(Clone, Debug)]
pub struct Analysis {
    grammar: Grammar,
    nullable: NullableSet,
    first: FirstSets,
    follow: FollowSets,
    table: PredictionTable,
}

impl Analysis {
    /// Takes ownership of the grammar and analyzes it.
    pub fn new(grammar: Grammar, policy: ConflictPolicy) -> Self {
        let nullable = NullableSet::new(&grammar);
        let first = FirstSets::new(&grammar, &nullable);
        let follow = FollowSets::new(&grammar, &first);
        let table = PredictionTable::new(&grammar, &first, &follow, policy);
        Analysis {
            grammar,
            nullable,
            first,
            follow,
            table,
        }
    }

    /// Returns the analyzed grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the nullable nonterminals.
    pub fn nullable(&self) -> &NullableSet {
        &self.nullable
    }

    /// Returns FIRST sets.
    pub fn first(&self) -> &FirstSets {
        &self.first
    }

    /// Returns FOLLOW sets.
    pub fn follow(&self) -> &FollowSets {
        &self.follow
    }

    /// Returns the prediction table.
    pub fn table(&self) -> &PredictionTable {
        &self.table
    }

    /// Creates a parser with the default configuration.
    pub fn parser(&self) -> PredictiveParser<'_> {
        PredictiveParser::new(&self.grammar, &self.table)
    }

    /// Creates a parser with the given configuration.
    pub fn parser_with_config(&self, config: ParserConfig) -> PredictiveParser<'_> {
        PredictiveParser::with_config(&self.grammar, &self.table, config)
    }
}
