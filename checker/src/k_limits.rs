// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

// Somewhat arbitrary constants used to limit how much work the reachability explorer does.

/// Nondeterministic values are drawn from [-DEFAULT_BOUND ... DEFAULT_BOUND] unless told otherwise.
pub const DEFAULT_BOUND: i32 = 8;

/// Number of harness runs made by the random strategy.
pub const DEFAULT_SAMPLES: u64 = 10_000;

/// Seed for the random strategy, so that reports are reproducible.
pub const DEFAULT_SEED: u64 = 0;

/// Exhaustive enumeration refuses search spaces with more states than this.
pub const MAX_BOUNDED_STATES: u128 = 50_000_000;
