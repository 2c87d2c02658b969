//! Library for LL(1) analysis of context-free grammars. Computes nullability, FIRST and FOLLOW
//! sets, builds a prediction table while collecting conflicts, and parses strings with a
//! table-driven stack machine.
//!
//! Each phase takes the grammar and the frozen results of earlier phases, and returns a new
//! frozen result.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]
#![cfg_attr(test, allow(missing_docs))]

mod analysis;
pub mod classification;
mod grammar;
pub mod parse;
pub mod prediction;
pub mod rule;
pub mod symbol;

pub use crate::analysis::Analysis;
pub use crate::classification::{ConflictPolicy, ConflictRecord, PredictionTable};
pub use crate::grammar::{Grammar, GrammarError, MalformedReason, TokenizeError};
pub use crate::parse::{ParseOutcome, ParserConfig, PredictiveParser, StepLimit, Verdict};
pub use crate::prediction::GrammarAnalysisExt;
pub use crate::rule::builder::GrammarBuilder;
pub use crate::rule::{Production, ProductionId};
pub use crate::symbol::{Lookahead, NonTerminal, Symbol, Terminal};
