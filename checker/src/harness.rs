// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::interval::{compare, Interval, Relation};
use crate::scenario::Scenario;

use interval_annotations::*;
use serde::Serialize;

/// Where the harness is in its single pass from construction to a terminal state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HarnessState {
    Start,
    Decision { first: Interval, second: Interval },
    Exit,
    Error,
}

impl HarnessState {
    pub fn terminal(&self) -> Option<Terminal> {
        match self {
            HarnessState::Exit => Some(Terminal::Exit),
            HarnessState::Error => Some(Terminal::Error),
            _ => None,
        }
    }
}

/// The observable outcome of one harness run.
#[derive(Serialize, Clone, Debug, Eq, PartialEq)]
pub struct Run {
    pub terminal: Terminal,
    pub relation: Relation,
    pub first: Interval,
    pub second: Interval,
    /// The values drawn from the nondeterministic source, in draw order.
    pub witness: Vec<i32>,
}

/// Records every value handed out by the wrapped source.
struct Recording<S> {
    inner: S,
    drawn: Vec<i32>,
}

impl<S: NondetSource> NondetSource for Recording<S> {
    fn nondet_int(&mut self) -> i32 {
        let value = self.inner.nondet_int();
        self.drawn.push(value);
        value
    }
}

/// Builds the scenario's two intervals, compares them once and branches:
/// Overlap leads to Error, anything else to Exit.
pub struct Harness<'s, S: NondetSource> {
    scenario: &'s Scenario,
    source: Recording<S>,
    state: HarnessState,
    decided: Option<(Interval, Interval, Relation)>,
}

impl<'s, S: NondetSource> Harness<'s, S> {
    pub fn new(scenario: &'s Scenario, source: S) -> Harness<'s, S> {
        Harness {
            scenario,
            source: Recording {
                inner: source,
                drawn: Vec::new(),
            },
            state: HarnessState::Start,
            decided: None,
        }
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// Advances by one transition. Terminal states do not move.
    pub fn step(&mut self) -> HarnessState {
        self.state = match self.state {
            HarnessState::Start => {
                let first = self.scenario.first.concretize(&mut self.source);
                let second = self.scenario.second.concretize(&mut self.source);
                debug!("{}: start with {} and {}", self.scenario.name, first, second);
                HarnessState::Decision { first, second }
            }
            HarnessState::Decision { first, second } => {
                let relation = compare(&first, &second);
                self.decided = Some((first, second, relation));
                let next = if relation == Relation::Overlap {
                    HarnessState::Error
                } else {
                    HarnessState::Exit
                };
                debug!(
                    "{}: compare returned {}, going to {:?}",
                    self.scenario.name,
                    relation.value(),
                    next
                );
                next
            }
            terminal @ (HarnessState::Exit | HarnessState::Error) => terminal,
        };
        self.state
    }

    pub fn run(mut self) -> Run {
        let terminal = loop {
            if let Some(terminal) = self.step().terminal() {
                break terminal;
            }
        };
        match self.decided {
            Some((first, second, relation)) => Run {
                terminal,
                relation,
                first,
                second,
                witness: self.source.drawn,
            },
            None => verify_unreachable!("a terminal state is only entered through the decision"),
        }
    }
}

/// Runs the fixed scenario. Its nondeterministic input is declared but never queried.
pub fn run_fixed() -> Terminal {
    Harness::new(&Scenario::fixed(), NoInput).run().terminal
}
