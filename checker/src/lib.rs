// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.
//
// A verification fixture that orders two integer intervals, together with the scenario
// family it belongs to and an explorer that decides whether its error state is reachable.

#[macro_use]
extern crate log;

pub mod error;
pub mod harness;
pub mod interval;
pub mod interval_domain;
pub mod k_limits;
pub mod options;
pub mod reachability;
pub mod scenario;
