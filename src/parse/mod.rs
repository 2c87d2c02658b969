//! The predictive parser: a stack machine driven by a prediction table.

mod outcome;

use std::iter;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classification::PredictionTable;
use crate::grammar::{Grammar, TokenizeError};
use crate::symbol::{Lookahead, Symbol, Terminal};

pub use self::outcome::{
    Action, ParseOutcome, ParseTrace, RejectReason, Rejection, Step, Verdict,
};

/// Steps allowed by `StepLimit::Auto` regardless of input length.
pub const BASE_STEPS: usize = 1_000;
/// Steps allowed by `StepLimit::Auto` per input symbol and per production.
pub const STEPS_PER_SYMBOL: usize = 32;

/// Ceiling on the number of transitions of one parse attempt.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StepLimit {
    /// `BASE_STEPS + STEPS_PER_SYMBOL * (input length + 1) * (productions + 1)`.
    #[default]
    Auto,
    /// An explicit number of transitions.
    Fixed(usize),
}

/// Parser configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParserConfig {
    /// Ceiling on the number of transitions.
    pub step_limit: StepLimit,
}

/// Simulates the pushdown automaton for a frozen grammar and table.
///
/// Parsing takes `&self` and never mutates the grammar or the table, so one
/// parser may serve many threads.
#[derive(Clone, Copy, Debug)]
pub struct PredictiveParser<'a> {
    grammar: &'a Grammar,
    table: &'a PredictionTable,
    config: ParserConfig,
}

impl<'a> PredictiveParser<'a> {
    /// Creates a parser with the default configuration.
    pub fn new(grammar: &'a Grammar, table: &'a PredictionTable) -> Self {
        Self::with_config(grammar, table, ParserConfig::default())
    }

    /// Creates a parser.
    pub fn with_config(
        grammar: &'a Grammar,
        table: &'a PredictionTable,
        config: ParserConfig,
    ) -> Self {
        PredictiveParser {
            grammar,
            table,
            config,
        }
    }

    /// Sets the step limit.
    pub fn step_limit(mut self, step_limit: StepLimit) -> Self {
        self.config.step_limit = step_limit;
        self
    }

    /// Returns the number of transitions allowed for input of the given
    /// length, end marker excluded.
    pub fn max_steps(&self, input_len: usize) -> usize {
        match self.config.step_limit {
            StepLimit::Auto => {
                let productions = self.grammar.productions().len();
                STEPS_PER_SYMBOL
                    .saturating_mul(input_len + 1)
                    .saturating_mul(productions + 1)
                    .saturating_add(BASE_STEPS)
            }
            StepLimit::Fixed(limit) => limit,
        }
    }

    /// Parses a string of terminals.
    ///
    /// The stack starts as `[$, start]`. A terminal or end marker on top must
    /// match the lookahead and is popped. A nonterminal on top is replaced by
    /// the right-hand side the table predicts, leftmost symbol on top.
    /// The input is accepted when the stack empties with all input consumed.
    pub fn parse(&self, input: &[Terminal]) -> ParseOutcome {
        let input: Vec<Lookahead> = input
            .iter()
            .map(|&t| Lookahead::Terminal(t))
            .chain(iter::once(Lookahead::EndMarker))
            .collect();
        let limit = self.max_steps(input.len() - 1);
        let mut trace = ParseTrace::new(input.clone());
        let mut stack = vec![Symbol::EndMarker, Symbol::NonTerminal(self.grammar.start())];
        let mut position = 0;
        let mut transitions = 0;

        let verdict = loop {
            let top = match stack.last() {
                Some(&top) => top,
                None if position == input.len() => {
                    trace.push(&stack, position, Action::Accept);
                    break Verdict::Accepted;
                }
                None => {
                    let step = trace.push(&stack, position, Action::Reject);
                    break reject(RejectReason::UnconsumedInput, step);
                }
            };
            if transitions >= limit {
                let step = trace.push(&stack, position, Action::StepBoundExceeded);
                break Verdict::StepBoundExceeded { limit, step };
            }
            let lookahead = match input.get(position) {
                Some(&lookahead) => lookahead,
                None => {
                    let step = trace.push(&stack, position, Action::Reject);
                    break reject(RejectReason::InputExhausted, step);
                }
            };
            trace!(
                "stack top {}, lookahead {}",
                self.grammar.named(top),
                self.grammar.named(lookahead)
            );
            match top {
                Symbol::NonTerminal(nonterminal) => {
                    match self.table.get(nonterminal, lookahead) {
                        Some(id) => {
                            trace.push(&stack, position, Action::Apply(id));
                            stack.pop();
                            let production = self.grammar.production(id);
                            stack.extend(production.rhs_symbols().iter().rev().copied());
                        }
                        None => {
                            let step = trace.push(&stack, position, Action::NoRule);
                            break reject(
                                RejectReason::NoRule {
                                    nonterminal,
                                    lookahead,
                                },
                                step,
                            );
                        }
                    }
                }
                expected => {
                    if expected.lookahead() == Some(lookahead) {
                        trace.push(&stack, position, Action::Match);
                        stack.pop();
                        position += 1;
                    } else {
                        let step = trace.push(&stack, position, Action::Mismatch);
                        break reject(
                            RejectReason::Mismatch {
                                expected,
                                found: lookahead,
                            },
                            step,
                        );
                    }
                }
            }
            transitions += 1;
        };
        debug!("parse finished after {} steps: {:?}", trace.len(), verdict);
        ParseOutcome { trace, verdict }
    }

    /// Splits the input into single-character terminals and parses it.
    /// Characters that are not terminals of the grammar are rejected before
    /// parsing.
    pub fn parse_chars(&self, input: &str) -> Result<ParseOutcome, TokenizeError> {
        let tokens = self.grammar.tokenize_chars(input)?;
        Ok(self.parse(&tokens[..]))
    }
}

fn reject(reason: RejectReason, step: usize) -> Verdict {
    Verdict::Rejected(Rejection { reason, step })
}
