//! Prediction for predictive parsers: nullability, FIRST and FOLLOW sets.
//!
//! Each set is computed once by fixed-point iteration over full passes of the
//! grammar's productions, then frozen. Later phases only read earlier ones.

mod first;
mod follow;
mod nullable;

pub use self::first::{FirstSets, SequenceFirst};
pub use self::follow::FollowSets;
pub use self::nullable::NullableSet;

use crate::grammar::Grammar;

/// Adds set computations to grammars.
pub trait GrammarAnalysisExt {
    /// Computes which nonterminals derive the empty sequence.
    fn nullable_set(&self) -> NullableSet;
    /// Computes nullability and FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes nullability, FIRST and FOLLOW sets.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from previously computed FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
}

impl GrammarAnalysisExt for Grammar {
    fn nullable_set(&self) -> NullableSet {
        NullableSet::new(self)
    }

    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self, &self.nullable_set())
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }
}
