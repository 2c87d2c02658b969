//! Parse traces and verdicts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rule::ProductionId;
use crate::symbol::{Lookahead, NonTerminal, Symbol};

/// What the stack machine did at one step.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// The terminal on top of the stack matched the input and was popped.
    Match,
    /// The nonterminal on top of the stack was replaced by a right-hand side.
    Apply(ProductionId),
    /// The terminal on top of the stack disagreed with the input.
    Mismatch,
    /// The table has no production for the nonterminal and the lookahead.
    NoRule,
    /// The stack emptied with all input consumed.
    Accept,
    /// The run ended without a match or table error, but did not accept.
    Reject,
    /// The run took more steps than allowed.
    StepBoundExceeded,
}

/// One recorded step. The stack and position are captured before the action
/// is taken.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    /// The stack, bottom first.
    pub stack: Vec<Symbol>,
    /// Index of the current lookahead in the input.
    pub position: usize,
    /// The action.
    pub action: Action,
}

/// The ordered steps of one parse attempt, along with its input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseTrace {
    input: Vec<Lookahead>,
    steps: Vec<Step>,
}

/// Why a parse attempt was rejected.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectReason {
    /// The symbol on top of the stack disagreed with the input.
    Mismatch {
        /// The symbol on top of the stack.
        expected: Symbol,
        /// The current input symbol.
        found: Lookahead,
    },
    /// No table entry exists for the pair.
    NoRule {
        /// The nonterminal on top of the stack.
        nonterminal: NonTerminal,
        /// The current input symbol.
        lookahead: Lookahead,
    },
    /// The stack emptied before all input was consumed.
    UnconsumedInput,
    /// The input ran out while the stack was not empty.
    InputExhausted,
}

/// Details of a rejection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rejection {
    /// What went wrong.
    pub reason: RejectReason,
    /// Index of the trace step at which it went wrong.
    pub step: usize,
}

/// The final verdict of a parse attempt.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The input is derivable from the start symbol.
    Accepted,
    /// The input was rejected.
    Rejected(Rejection),
    /// The run was stopped by the step limit.
    StepBoundExceeded {
        /// The limit in effect.
        limit: usize,
        /// Index of the trace step at which the run was stopped.
        step: usize,
    },
}

/// A trace together with its verdict.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutcome {
    /// The recorded steps.
    pub trace: ParseTrace,
    /// The verdict.
    pub verdict: Verdict,
}

impl ParseTrace {
    pub(crate) fn new(input: Vec<Lookahead>) -> Self {
        ParseTrace {
            input,
            steps: vec![],
        }
    }

    pub(crate) fn push(&mut self, stack: &[Symbol], position: usize, action: Action) -> usize {
        self.steps.push(Step {
            stack: stack.to_vec(),
            position,
            action,
        });
        self.steps.len() - 1
    }

    /// Returns the input, terminated by the end marker.
    pub fn input(&self) -> &[Lookahead] {
        &self.input[..]
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps[..]
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the input not yet consumed at the given step.
    pub fn remaining_input(&self, step: &Step) -> &[Lookahead] {
        &self.input[step.position.min(self.input.len())..]
    }

    /// Iterates over the productions applied, in order. For an accepted
    /// input, this is its leftmost derivation.
    pub fn applied_productions(&self) -> impl Iterator<Item = ProductionId> + '_ {
        self.steps.iter().filter_map(|step| match step.action {
            Action::Apply(id) => Some(id),
            _ => None,
        })
    }
}

impl ParseOutcome {
    /// Whether the input was accepted.
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }

    /// Returns the rejection, if the input was rejected.
    pub fn rejection(&self) -> Option<Rejection> {
        match self.verdict {
            Verdict::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}
