// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.
//

use interval_annotations::*;
use interval_fixture::harness::{run_fixed, Harness, HarnessState};
use interval_fixture::interval::{Interval, Relation};
use interval_fixture::scenario::{Bound, IntervalSpec, Scenario};

#[test]
fn fixed_scenario_exits() {
    let terminal = run_fixed();
    assert_eq!(terminal, Terminal::Exit);
    assert_eq!(terminal.status_code(), 0);
}

#[test]
#[should_panic]
fn fixed_scenario_never_reaches_error() {
    checked_verify_eq!(run_fixed(), Terminal::Error);
}

#[test]
fn fixed_scenario_walks_every_state() {
    let scenario = Scenario::fixed();
    let mut harness = Harness::new(&scenario, NoInput);
    assert_eq!(harness.state(), HarnessState::Start);
    assert_eq!(
        harness.step(),
        HarnessState::Decision {
            first: Interval::new(5, 4),
            second: Interval::new(1, 3),
        }
    );
    assert_eq!(harness.step(), HarnessState::Exit);
    // Terminal states do not move.
    assert_eq!(harness.step(), HarnessState::Exit);
    assert_eq!(harness.state().terminal(), Some(Terminal::Exit));
}

#[test]
fn fixed_run_reports_relation_and_intervals() {
    let scenario = Scenario::fixed();
    let run = Harness::new(&scenario, NoInput).run();
    assert_eq!(run.terminal, Terminal::Exit);
    assert_eq!(run.relation, Relation::After);
    assert_eq!(run.first, Interval::new(5, 4));
    assert_eq!(run.second, Interval::new(1, 3));
    assert!(run.witness.is_empty());
}

#[test]
fn fixed_scenario_ignores_its_nondet_source() {
    let scenario = Scenario::fixed();
    assert_eq!(scenario.nondet_slots(), 0);
    let mut source = SequenceSource::new(vec![0, 0, 0, 0]);
    let run = Harness::new(&scenario, &mut source).run();
    assert_eq!(run.terminal, Terminal::Exit);
    assert_eq!(source.remaining(), 4);
}

#[test]
fn overlap_reaches_error() {
    let scenario = Scenario {
        name: "overlap".into(),
        first: IntervalSpec::literal(1, 5),
        second: IntervalSpec::literal(3, 8),
        expected: Some(Terminal::Error),
    };
    let run = Harness::new(&scenario, NoInput).run();
    assert_eq!(run.relation, Relation::Overlap);
    assert_eq!(run.terminal, Terminal::Error);
    assert_eq!(run.terminal.status_code(), 1);
}

#[test]
fn before_exits() {
    let scenario = Scenario {
        name: "before".into(),
        first: IntervalSpec::literal(1, 3),
        second: IntervalSpec::literal(5, 4),
        expected: None,
    };
    let run = Harness::new(&scenario, NoInput).run();
    assert_eq!(run.relation, Relation::Before);
    assert_eq!(run.terminal, Terminal::Exit);
}

#[test]
fn nondet_bounds_are_drawn_in_order() {
    let scenario = Scenario {
        name: "all_nondet".into(),
        first: IntervalSpec {
            left: Bound::NONDET,
            right: Bound::NONDET,
        },
        second: IntervalSpec {
            left: Bound::NONDET,
            right: Bound::NONDET,
        },
        expected: None,
    };
    assert_eq!(scenario.nondet_slots(), 4);
    let run = Harness::new(&scenario, SequenceSource::new(vec![1, 2, 3, 4])).run();
    assert_eq!(run.first, Interval::new(1, 2));
    assert_eq!(run.second, Interval::new(3, 4));
    assert_eq!(run.witness, vec![1, 2, 3, 4]);
    assert_eq!(run.relation, Relation::Before);
}

#[test]
fn constant_source_feeds_every_nondet_bound() {
    let scenario = Scenario {
        name: "constant".into(),
        first: IntervalSpec {
            left: Bound::NONDET,
            right: Bound::Literal(4),
        },
        second: IntervalSpec {
            left: Bound::Literal(1),
            right: Bound::NONDET,
        },
        expected: None,
    };
    let run = Harness::new(&scenario, ConstantSource(2)).run();
    assert_eq!(run.first, Interval::new(2, 4));
    assert_eq!(run.second, Interval::new(1, 2));
    assert_eq!(run.witness, vec![2, 2]);
    assert_eq!(run.terminal, Terminal::Error);
}

#[test]
fn exhausted_sequence_yields_zero() {
    let mut source = SequenceSource::from(vec![9]);
    assert_eq!(source.nondet_int(), 9);
    assert_eq!(source.remaining(), 0);
    assert_eq!(source.nondet_int(), 0);
    assert_eq!(NoInput.nondet_int(), 0);
}

#[test]
fn scenario_descriptions_parse() {
    let scenario: Scenario = serde_json::from_str(
        r#"{
            "name": "parsed",
            "first": { "left": "nondet", "right": 4 },
            "second": { "left": 1, "right": 3 },
            "expected": "error"
        }"#,
    )
    .unwrap();
    assert_eq!(scenario.first.left, Bound::NONDET);
    assert_eq!(scenario.first.right, Bound::Literal(4));
    assert_eq!(scenario.expected, Some(Terminal::Error));
    assert!(!scenario.is_concrete());

    let json = serde_json::to_string(&Scenario::fixed()).unwrap();
    let fixed: Scenario = serde_json::from_str(&json).unwrap();
    assert_eq!(fixed, Scenario::fixed());
}

#[test]
fn unknown_symbols_are_rejected() {
    let parsed = serde_json::from_str::<Scenario>(
        r#"{
            "name": "bad",
            "first": { "left": "any", "right": 4 },
            "second": { "left": 1, "right": 3 }
        }"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn misspelled_keys_are_rejected() {
    let misspelled_expectation = serde_json::from_str::<Scenario>(
        r#"{
            "name": "typo",
            "first": { "left": 5, "right": 4 },
            "second": { "left": 1, "right": 3 },
            "expcted": "exit"
        }"#,
    );
    assert!(misspelled_expectation.is_err());

    let misspelled_bound = serde_json::from_str::<Scenario>(
        r#"{
            "name": "typo",
            "first": { "left": 5, "rigth": 4 },
            "second": { "left": 1, "right": 3 }
        }"#,
    );
    assert!(misspelled_bound.is_err());
}
