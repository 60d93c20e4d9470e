// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use interval_annotations::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive integer range [left ... right]. Nothing requires left <= right, so an interval
/// may be inverted and the comparator still gives it a well defined answer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Interval {
    pub left: i32,
    pub right: i32,
}

impl Interval {
    pub const fn new(left: i32, right: i32) -> Interval {
        Interval { left, right }
    }

    pub fn is_inverted(&self) -> bool {
        self.left > self.right
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}...{}]", self.left, self.right)
    }
}

/// The ordering of one interval relative to another.
/// The discriminants are the values the comparator reports: -1, 0 and 1.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Relation {
    /// The first interval lies entirely to the left of the second.
    Before = -1,
    /// The intervals are judged to overlap.
    Overlap = 0,
    /// The first interval lies entirely to the right of the second.
    After = 1,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Before, Relation::Overlap, Relation::After];

    pub fn value(self) -> i32 {
        self as i32
    }
}

impl From<Relation> for i32 {
    fn from(relation: Relation) -> i32 {
        relation.value()
    }
}

/// Decides how `a` is ordered relative to `b`.
///
/// [a.left ... a.right] after [b.left ... b.right] if a.left > b.right,
/// else before if a.right < b.left, else overlap.
/// Only those two bound pairs are consulted, so the test is one sided:
/// b.left > a.right and b.right < a.left are never looked at, and
/// compare(a, b) is not in general the negation of compare(b, a).
pub fn compare(a: &Interval, b: &Interval) -> Relation {
    let result = if a.left > b.right {
        Relation::After
    } else if a.right < b.left {
        Relation::Before
    } else {
        Relation::Overlap
    };
    verify!(result != Relation::After || a.left > b.right);
    verify!(result != Relation::Before || (a.left <= b.right && a.right < b.left));
    trace!("compare {} with {} is {:?}", a, b, result);
    result
}
