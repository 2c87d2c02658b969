//! Classification of grammars.

pub mod ll;

pub use self::ll::{
    ConflictPolicy, ConflictRecord, LlClassification, LlNonterminalClass, PredictionTable,
};
