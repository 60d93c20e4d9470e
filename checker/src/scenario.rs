// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ExploreError;
use crate::interval::Interval;

use interval_annotations::{NondetSource, Terminal};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// A value that is chosen by the verifier rather than written into the fixture.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Nondet,
}

/// One bound of an interval in a scenario description: a literal, or `"nondet"` in JSON.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[serde(untagged)]
pub enum Bound {
    Literal(i32),
    Symbolic(Symbol),
}

impl Bound {
    pub const NONDET: Bound = Bound::Symbolic(Symbol::Nondet);

    pub fn is_nondet(&self) -> bool {
        matches!(self, Bound::Symbolic(Symbol::Nondet))
    }

    /// Fixes the value of this bound, drawing from the source if it is nondeterministic.
    pub fn concretize(&self, source: &mut impl NondetSource) -> i32 {
        match self {
            Bound::Literal(value) => *value,
            Bound::Symbolic(Symbol::Nondet) => source.nondet_int(),
        }
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Bound {
        Bound::Literal(value)
    }
}

/// An interval whose bounds may be left to the verifier.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[serde(deny_unknown_fields)]
pub struct IntervalSpec {
    pub left: Bound,
    pub right: Bound,
}

impl IntervalSpec {
    pub const fn literal(left: i32, right: i32) -> IntervalSpec {
        IntervalSpec {
            left: Bound::Literal(left),
            right: Bound::Literal(right),
        }
    }

    pub fn bounds(&self) -> [Bound; 2] {
        [self.left, self.right]
    }

    /// Left is drawn before right.
    pub fn concretize(&self, source: &mut impl NondetSource) -> Interval {
        let left = self.left.concretize(source);
        let right = self.right.concretize(source);
        Interval { left, right }
    }
}

impl From<Interval> for IntervalSpec {
    fn from(interval: Interval) -> IntervalSpec {
        IntervalSpec::literal(interval.left, interval.right)
    }
}

/// A member of the fixture family: two intervals to compare and, optionally, the terminal
/// state the harness is expected to reach.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: Cow<'static, str>,
    pub first: IntervalSpec,
    pub second: IntervalSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Terminal>,
}

impl Scenario {
    /// The fixed scenario: an inverted [5...4] compared with [1...3].
    /// 5 > 3 puts the first interval after the second, so the error state is never reached.
    pub fn fixed() -> Scenario {
        Scenario {
            name: Cow::Borrowed("interval"),
            first: IntervalSpec::literal(5, 4),
            second: IntervalSpec::literal(1, 3),
            expected: Some(Terminal::Exit),
        }
    }

    pub fn load(path: &Path) -> Result<Scenario, ExploreError> {
        let contents = fs::read_to_string(path).map_err(|source| ExploreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ExploreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// All four bounds in the order they are concretized.
    pub fn bounds(&self) -> [Bound; 4] {
        let [a, b] = self.first.bounds();
        let [c, d] = self.second.bounds();
        [a, b, c, d]
    }

    /// The number of values a run draws from its nondeterministic source.
    pub fn nondet_slots(&self) -> usize {
        self.bounds().iter().filter(|b| b.is_nondet()).count()
    }

    pub fn is_concrete(&self) -> bool {
        self.nondet_slots() == 0
    }
}
