// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.
//

use crate::interval::Relation;
use crate::scenario::{Bound, IntervalSpec, Symbol};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An element of the Interval domain is a range of i128 numbers denoted by a lower bound and
/// upper bound.
/// Here the domain abstracts the value of one interval bound in a scenario, so that the
/// comparator's two tests can be decided for every value a verifier might choose at once.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialOrd, PartialEq, Hash, Ord)]
pub struct IntervalDomain {
    lower_bound: i128,
    upper_bound: i128,
}

pub const BOTTOM: IntervalDomain = IntervalDomain {
    lower_bound: 1,
    upper_bound: 0,
};

/// Every value an i32 nondeterministic source can produce.
pub const NONDET_I32: IntervalDomain = IntervalDomain {
    lower_bound: i32::MIN as i128,
    upper_bound: i32::MAX as i128,
};

impl From<i128> for IntervalDomain {
    fn from(i: i128) -> IntervalDomain {
        IntervalDomain {
            lower_bound: i,
            upper_bound: i,
        }
    }
}

impl From<i32> for IntervalDomain {
    fn from(i: i32) -> IntervalDomain {
        i128::from(i).into()
    }
}

impl From<&Bound> for IntervalDomain {
    fn from(bound: &Bound) -> IntervalDomain {
        match bound {
            Bound::Literal(value) => (*value).into(),
            Bound::Symbolic(Symbol::Nondet) => NONDET_I32.clone(),
        }
    }
}

impl IntervalDomain {
    /// [lower...upper], or bottom if lower > upper.
    pub fn new(lower_bound: i128, upper_bound: i128) -> Self {
        if lower_bound > upper_bound {
            return BOTTOM.clone();
        }
        IntervalDomain {
            lower_bound,
            upper_bound,
        }
    }

    // [x...y] > [a...b] = x > b
    // !([x...y] > [a...b]) = [a...b] >= [x...y] = a >= y
    pub fn greater_than(&self, other: &Self) -> Option<bool> {
        if self.is_bottom() || other.is_bottom() {
            None
        } else if self.lower_bound > other.upper_bound {
            Some(true)
        } else if other.lower_bound >= self.upper_bound {
            Some(false)
        } else {
            None
        }
    }

    // There is no integer value in this interval. Not to be confused with an inverted
    // Interval, whose bounds are two perfectly good values.
    pub fn is_bottom(&self) -> bool {
        self.upper_bound < self.lower_bound
    }

    /// True if this interval denotes exactly one value.
    pub fn is_singleton(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    // [x...y] < [a...b] = y < a
    // !([x...y] < [a...b]) = [a...b] <= [x...y] = b <= x
    pub fn less_than(&self, other: &Self) -> Option<bool> {
        if self.is_bottom() || other.is_bottom() {
            None
        } else if self.upper_bound < other.lower_bound {
            Some(true)
        } else if other.upper_bound <= self.lower_bound {
            Some(false)
        } else {
            None
        }
    }
}

/// The abstraction of an Interval: each of its bounds is a range of possible values.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AbstractInterval {
    pub left: IntervalDomain,
    pub right: IntervalDomain,
}

impl AbstractInterval {
    /// True if both bounds are known exactly.
    pub fn is_singleton(&self) -> bool {
        self.left.is_singleton() && self.right.is_singleton()
    }
}

impl From<&IntervalSpec> for AbstractInterval {
    fn from(spec: &IntervalSpec) -> AbstractInterval {
        AbstractInterval {
            left: (&spec.left).into(),
            right: (&spec.right).into(),
        }
    }
}

/// The relations compare(a, b) can return for some choice of concrete bounds in a and b.
/// Each test is decided three-valued; when it is undecided both outcomes are kept.
/// The bounds of a scenario are drawn independently, so the result is exact for them.
pub fn possible_relations(a: &AbstractInterval, b: &AbstractInterval) -> BTreeSet<Relation> {
    let mut possible = BTreeSet::new();
    if [&a.left, &a.right, &b.left, &b.right]
        .iter()
        .any(|d| d.is_bottom())
    {
        return possible;
    }
    match a.left.greater_than(&b.right) {
        Some(true) => {
            possible.insert(Relation::After);
            return possible;
        }
        Some(false) => {}
        None => {
            possible.insert(Relation::After);
        }
    }
    match a.right.less_than(&b.left) {
        Some(true) => {
            possible.insert(Relation::Before);
        }
        Some(false) => {
            possible.insert(Relation::Overlap);
        }
        None => {
            possible.insert(Relation::Before);
            possible.insert(Relation::Overlap);
        }
    }
    possible
}
