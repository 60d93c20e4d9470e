// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

// Answers the question a verifier asks of the fixture family: can the harness reach Error?

use crate::error::ExploreError;
use crate::harness::{Harness, Run};
use crate::interval::Relation;
use crate::interval_domain::{possible_relations, AbstractInterval};
use crate::k_limits;
use crate::scenario::Scenario;

use interval_annotations::{NoInput, NondetSource, SequenceSource};
use itertools::{Either, Itertools};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Serialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Evaluate the comparator over the interval domain.
    Abstract,
    /// Enumerate every nondeterministic choice within the bound.
    Bounded,
    /// Sample nondeterministic choices within the bound from a seeded generator.
    Random,
}

impl Strategy {
    pub const NAMES: [&'static str; 3] = ["abstract", "bounded", "random"];
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Strategy, String> {
        match s {
            "abstract" => Ok(Strategy::Abstract),
            "bounded" => Ok(Strategy::Bounded),
            "random" => Ok(Strategy::Random),
            _ => Err(format!("unknown strategy `{s}`")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Abstract => "abstract",
            Strategy::Bounded => "bounded",
            Strategy::Random => "random",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Clone, Debug, Eq, PartialEq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// No choice of inputs reaches Error.
    Unreachable,
    /// This run reaches Error; its witness replays it.
    Reachable { run: Run },
    /// Nothing that was tried reaches Error, but not everything was tried.
    NotFound,
    /// The abstraction cannot rule Error in or out.
    Unknown,
}

impl Verdict {
    /// The explorer's exit status: 1 when the error state was reached, as for the fixture.
    pub fn status_code(&self) -> i32 {
        match self {
            Verdict::Reachable { .. } => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Unreachable => f.write_str("error state unreachable"),
            Verdict::Reachable { run } => write!(
                f,
                "error state reachable: {} vs {} overlap, witness {:?}",
                run.first, run.second, run.witness
            ),
            Verdict::NotFound => f.write_str("no run reached the error state"),
            Verdict::Unknown => f.write_str("error state may be reachable"),
        }
    }
}

#[derive(Serialize, Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub scenario: String,
    pub strategy: Strategy,
    pub verdict: Verdict,
    /// Relations the comparator can return, when the strategy computes them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<BTreeSet<Relation>>,
    /// Number of concrete harness runs made.
    pub runs: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.scenario, self.strategy, self.verdict)
    }
}

/// Draws uniformly from [-bound ... bound].
struct RandomSource<'r> {
    rng: &'r mut StdRng,
    bound: i32,
}

impl NondetSource for RandomSource<'_> {
    fn nondet_int(&mut self) -> i32 {
        self.rng.gen_range(-self.bound..=self.bound)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Explorer {
    pub bound: i32,
    pub samples: u64,
    pub seed: u64,
}

impl Default for Explorer {
    fn default() -> Self {
        Explorer {
            bound: k_limits::DEFAULT_BOUND,
            samples: k_limits::DEFAULT_SAMPLES,
            seed: k_limits::DEFAULT_SEED,
        }
    }
}

impl Explorer {
    pub fn explore(&self, scenario: &Scenario, strategy: Strategy) -> Result<Report, ExploreError> {
        info!(
            "exploring {} ({} nondeterministic bounds) with the {} strategy",
            scenario.name,
            scenario.nondet_slots(),
            strategy
        );
        let report = match strategy {
            Strategy::Abstract => self.explore_abstract(scenario),
            Strategy::Bounded => self.explore_bounded(scenario)?,
            Strategy::Random => self.explore_random(scenario),
        };
        info!("{report}");
        Ok(report)
    }

    fn report(
        &self,
        scenario: &Scenario,
        strategy: Strategy,
        verdict: Verdict,
        runs: u64,
    ) -> Report {
        Report {
            scenario: scenario.name.to_string(),
            strategy,
            verdict,
            relations: None,
            runs,
        }
    }

    fn explore_abstract(&self, scenario: &Scenario) -> Report {
        let first = AbstractInterval::from(&scenario.first);
        let second = AbstractInterval::from(&scenario.second);
        let relations = possible_relations(&first, &second);
        debug!("{}: possible relations {:?}", scenario.name, relations);
        let mut runs = 0;
        let verdict = if !relations.contains(&Relation::Overlap) {
            Verdict::Unreachable
        } else if first.is_singleton() && second.is_singleton() {
            runs = 1;
            let run = Harness::new(scenario, NoInput).run();
            if run.terminal.is_error() {
                Verdict::Reachable { run }
            } else {
                Verdict::Unknown
            }
        } else {
            Verdict::Unknown
        };
        let mut report = self.report(scenario, Strategy::Abstract, verdict, runs);
        report.relations = Some(relations);
        report
    }

    /// Choices are drawn from [-bound ... bound]; a negative bound counts as its magnitude.
    fn magnitude(&self) -> i32 {
        self.bound.checked_abs().unwrap_or(i32::MAX)
    }

    /// The number of runs needed to try every choice within the bound.
    pub fn bounded_states(&self, scenario: &Scenario) -> Option<u128> {
        let width = 2 * self.magnitude() as u128 + 1;
        width.checked_pow(scenario.nondet_slots() as u32)
    }

    fn explore_bounded(&self, scenario: &Scenario) -> Result<Report, ExploreError> {
        let limit = k_limits::MAX_BOUNDED_STATES;
        let states = self.bounded_states(scenario).unwrap_or(u128::MAX);
        if states > limit {
            warn!(
                "{}: {} states within bound {} exceed the limit of {}",
                scenario.name, states, self.bound, limit
            );
            return Err(ExploreError::SearchSpaceTooLarge { states, limit });
        }

        let slots = scenario.nondet_slots();
        if slots == 0 {
            let run = Harness::new(scenario, NoInput).run();
            let verdict = if run.terminal.is_error() {
                Verdict::Reachable { run }
            } else {
                Verdict::Unreachable
            };
            return Ok(self.report(scenario, Strategy::Bounded, verdict, 1));
        }

        let bound = self.magnitude();
        let runs = AtomicU64::new(0);
        let found = (-bound..=bound).into_par_iter().find_map_first(|head| {
            candidates(head, slots - 1, bound).find_map(|choice| {
                runs.fetch_add(1, Ordering::Relaxed);
                let run = Harness::new(scenario, SequenceSource::new(choice)).run();
                run.terminal.is_error().then_some(run)
            })
        });
        let verdict = match found {
            Some(run) => Verdict::Reachable { run },
            None => Verdict::NotFound,
        };
        Ok(self.report(scenario, Strategy::Bounded, verdict, runs.into_inner()))
    }

    fn explore_random(&self, scenario: &Scenario) -> Report {
        if scenario.is_concrete() {
            let run = Harness::new(scenario, NoInput).run();
            let verdict = if run.terminal.is_error() {
                Verdict::Reachable { run }
            } else {
                Verdict::Unreachable
            };
            return self.report(scenario, Strategy::Random, verdict, 1);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut source = RandomSource {
            rng: &mut rng,
            bound: self.magnitude(),
        };
        let mut runs = 0;
        let mut verdict = Verdict::NotFound;
        while runs < self.samples {
            runs += 1;
            let run = Harness::new(scenario, &mut source).run();
            if run.terminal.is_error() {
                verdict = Verdict::Reachable { run };
                break;
            }
        }
        self.report(scenario, Strategy::Random, verdict, runs)
    }
}

/// Every choice of nondeterministic values that starts with `head`, in lexicographic order.
fn candidates(head: i32, rest: usize, bound: i32) -> impl Iterator<Item = Vec<i32>> {
    if rest == 0 {
        Either::Left(std::iter::once(vec![head]))
    } else {
        Either::Right(
            (0..rest)
                .map(|_| -bound..=bound)
                .multi_cartesian_product()
                .map(move |tail| {
                    let mut choice = Vec::with_capacity(tail.len() + 1);
                    choice.push(head);
                    choice.extend(tail);
                    choice
                }),
        )
    }
}
