// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.
//

use interval_fixture::k_limits;
use interval_fixture::options::Options;
use interval_fixture::reachability::Strategy;
use std::path::PathBuf;

fn args(s: &str) -> Vec<String> {
    Options::split_flags(s).unwrap()
}

#[test]
fn defaults_explore_fixed_scenario_abstractly() {
    let options = Options::parse(&[]).unwrap();
    assert_eq!(options, Options::default());
    assert_eq!(options.scenario, None);
    assert_eq!(options.strategy, Strategy::Abstract);
    assert_eq!(options.bound, k_limits::DEFAULT_BOUND);
    assert!(!options.json);
}

#[test]
fn all_options_parse() {
    let options = Options::parse(&args(
        "--strategy random --bound 3 --samples 12 --seed 99 --json 'my scenario.json'",
    ))
    .unwrap();
    assert_eq!(options.scenario, Some(PathBuf::from("my scenario.json")));
    assert_eq!(options.strategy, Strategy::Random);
    assert_eq!(options.bound, 3);
    assert_eq!(options.samples, 12);
    assert_eq!(options.seed, 99);
    assert!(options.json);
    let explorer = options.explorer();
    assert_eq!(explorer.bound, 3);
    assert_eq!(explorer.samples, 12);
    assert_eq!(explorer.seed, 99);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(Options::parse(&args("--strategy symbolic")).is_err());
    assert!(Options::parse(&args("--bound -1")).is_err());
    assert!(Options::parse(&args("--samples 0")).is_err());
    assert!(Options::parse(&args("--unknown")).is_err());
}

#[test]
fn mismatched_quotes_are_reported() {
    let error = Options::split_flags("--strategy 'bounded").unwrap_err();
    assert!(error.to_string().contains("INTERVAL_FLAGS"));
}
