// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

// Annotations and value sources shared by verification fixtures and the tools that explore them.

/// The terminal state reached by a fixture harness.
/// A verifier asks whether `Error` is reachable; both states are normal terminations.
#[derive(Ord, PartialOrd, Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Terminal {
    Exit,
    Error,
}

impl Terminal {
    /// The process status code reported for this terminal state.
    pub fn status_code(self) -> i32 {
        match self {
            Terminal::Exit => 0,
            Terminal::Error => 1,
        }
    }

    pub fn is_error(self) -> bool {
        self == Terminal::Error
    }
}

/// A source of nondeterministic integers. Fixtures query it wherever a verifier is free to
/// choose any value; tests and explorers inject sources with controlled values.
pub trait NondetSource {
    fn nondet_int(&mut self) -> i32;
}

impl<S: NondetSource + ?Sized> NondetSource for &mut S {
    fn nondet_int(&mut self) -> i32 {
        (**self).nondet_int()
    }
}

/// The source for fixtures that declare, but never query, a nondeterministic input.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInput;

impl NondetSource for NoInput {
    fn nondet_int(&mut self) -> i32 {
        0
    }
}

/// Yields the same value on every query.
#[derive(Clone, Copy, Debug)]
pub struct ConstantSource(pub i32);

impl NondetSource for ConstantSource {
    fn nondet_int(&mut self) -> i32 {
        self.0
    }
}

/// Replays a recorded sequence of values, then yields zero once the sequence is used up.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    values: Vec<i32>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<i32>) -> SequenceSource {
        SequenceSource { values, cursor: 0 }
    }

    /// The number of values not yet handed out.
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.cursor)
    }
}

impl From<Vec<i32>> for SequenceSource {
    fn from(values: Vec<i32>) -> SequenceSource {
        SequenceSource::new(values)
    }
}

impl NondetSource for SequenceSource {
    fn nondet_int(&mut self) -> i32 {
        let value = self.values.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        value
    }
}

/// Equivalent to a no op when used with an unmodified Rust compiler.
/// When compiled with `--cfg verifier`, this asks the verifier to check the condition and
/// emit a diagnostic unless it can prove it to be true.
#[macro_export]
macro_rules! verify {
    ($condition:expr) => {
        if cfg!(verifier) {
            $crate::verifier_verify($condition, "false verification condition")
        }
    };
}

/// Equivalent to the standard assert! when used with an unmodified Rust compiler.
/// When compiled with `--cfg verifier`, the verifier checks the condition instead.
#[macro_export]
macro_rules! checked_verify {
    ($condition:expr) => (
        if cfg!(verifier) {
            $crate::verifier_verify($condition, "false verification condition")
        } else {
            assert!($condition);
        }
    );
    ($condition:expr, $message:literal) => {
        if cfg!(verifier) {
            $crate::verifier_verify($condition, concat!("false verification condition: ", $message))
        } else {
            assert!($condition, $message);
        }
    };
    ($condition:expr, $($arg:tt)*) => (
        if cfg!(verifier) {
            $crate::verifier_verify($condition, concat!("false verification condition: ", stringify!($($arg)*)));
        } else {
            assert!($condition, $($arg)*);
        }
    );
}

/// Equivalent to the standard assert_eq! when used with an unmodified Rust compiler.
#[macro_export]
macro_rules! checked_verify_eq {
    ($left:expr, $right:expr) => (
        if cfg!(verifier) {
            $crate::verifier_verify($left == $right, concat!("false verification condition: ", stringify!($left == $right)))
        } else {
            assert_eq!($left, $right);
        }
    );
    ($left:expr, $right:expr, $($arg:tt)*) => (
        if cfg!(verifier) {
            $crate::verifier_verify($left == $right, concat!("false verification condition: ", stringify!($left == $right), ", ", stringify!($($arg)*)));
        } else {
            assert_eq!($left, $right, $($arg)*);
        }
    );
}

/// Equivalent to unreachable! when used with an unmodified Rust compiler.
/// When compiled with `--cfg verifier`, this marks a statement the verifier must prove unreachable.
#[macro_export]
macro_rules! verify_unreachable {
    () => {
        if cfg!(verifier) {
            panic!("statement is reachable");
        } else {
            unreachable!()
        }
    };
    ($message:literal) => {
        if cfg!(verifier) {
            panic!($message);
        } else {
            unreachable!($message)
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if cfg!(verifier) {
            panic!($fmt, $($arg)*);
        } else {
            unreachable!($fmt, $($arg)*)
        }
    };
}

// Helper function for the verifier. Should only be called via the verify macros.
#[doc(hidden)]
pub fn verifier_verify(_condition: bool, _message: &str) {}
