// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ExploreError;
use crate::k_limits;
use crate::reachability::{Explorer, Strategy};

use clap::{value_parser, Arg, ArgAction, Command};
use interval_annotations::*;
use std::path::PathBuf;

/// Creates the clap::Command metadata for argument parsing.
fn make_options_parser() -> Command {
    Command::new("interval-explore")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decides whether an interval ordering fixture can reach its error state.")
        .arg(Arg::new("scenario")
            .value_name("SCENARIO")
            .value_parser(value_parser!(PathBuf))
            .help("A JSON scenario description.")
            .long_help("Without a scenario the fixed scenario [5...4] vs [1...3] is explored."))
        .arg(Arg::new("strategy")
            .long("strategy")
            .value_parser(Strategy::NAMES)
            .default_value("abstract")
            .help("How to explore nondeterministic bounds.\n")
            .long_help("With `abstract`, bounds are evaluated over the interval domain.\nWith `bounded`, every choice within --bound is tried.\nWith `random`, --samples choices within --bound are drawn.\n"))
        .arg(Arg::new("bound")
            .long("bound")
            .value_parser(value_parser!(i32).range(0..))
            .help("Nondeterministic values are drawn from [-bound ... bound].")
            .long_help("The default is 8."))
        .arg(Arg::new("samples")
            .long("samples")
            .value_parser(value_parser!(u64).range(1..))
            .help("The number of runs made by the random strategy.")
            .long_help("The default is 10000."))
        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .help("Seed for the random strategy."))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the report as JSON."))
}

/// Represents options passed to the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub scenario: Option<PathBuf>,
    pub strategy: Strategy,
    pub bound: i32,
    pub samples: u64,
    pub seed: u64,
    pub json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            scenario: None,
            strategy: Strategy::Abstract,
            bound: k_limits::DEFAULT_BOUND,
            samples: k_limits::DEFAULT_SAMPLES,
            seed: k_limits::DEFAULT_SEED,
            json: false,
        }
    }
}

impl Options {
    /// Splits an argument string using unix shell escaping rules.
    pub fn split_flags(s: &str) -> Result<Vec<String>, ExploreError> {
        shellwords::split(s).map_err(|_| ExploreError::InvalidOption {
            name: "INTERVAL_FLAGS",
            message: "mismatched quotes".to_string(),
        })
    }

    /// Parses options from a list of strings, not including the binary name.
    pub fn parse(args: &[String]) -> Result<Options, clap::Error> {
        let matches = make_options_parser().try_get_matches_from(args.iter())?;
        let mut options = Options::default();
        options.scenario = matches.get_one::<PathBuf>("scenario").cloned();
        if let Some(strategy) = matches.get_one::<String>("strategy") {
            options.strategy = match strategy.parse() {
                Ok(strategy) => strategy,
                Err(_) => verify_unreachable!("clap only accepts known strategy names"),
            };
        }
        if let Some(bound) = matches.get_one::<i32>("bound") {
            options.bound = *bound;
        }
        if let Some(samples) = matches.get_one::<u64>("samples") {
            options.samples = *samples;
        }
        if let Some(seed) = matches.get_one::<u64>("seed") {
            options.seed = *seed;
        }
        options.json = matches.get_flag("json");
        Ok(options)
    }

    pub fn explorer(&self) -> Explorer {
        Explorer {
            bound: self.bound,
            samples: self.samples,
            seed: self.seed,
        }
    }
}
