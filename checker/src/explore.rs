// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

// This provides the "interval-explore" command, which asks of a scenario the question an
// external verifier asks of the fixture: is the error state reachable?
// Options are taken from INTERVAL_FLAGS first, then from the command line.

use interval_fixture::error::ExploreError;
use interval_fixture::options::Options;
use interval_fixture::reachability::Report;
use interval_fixture::scenario::Scenario;
use std::env;

fn main() {
    if env::var("INTERVAL_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("INTERVAL_LOG")
            .write_style("INTERVAL_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let mut args = match env::var("INTERVAL_FLAGS") {
        Ok(flags) => match Options::split_flags(&flags) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("interval-explore: {e}");
                std::process::exit(2);
            }
        },
        Err(_) => vec![],
    };
    args.extend(env::args().skip(1));
    let options = Options::parse(&args).unwrap_or_else(|e| e.exit());

    match explore(&options) {
        Ok(report) => {
            if options.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("interval-explore: {e}");
                        std::process::exit(2);
                    }
                }
            } else {
                println!("{report}");
            }
            std::process::exit(report.verdict.status_code());
        }
        Err(e) => {
            eprintln!("interval-explore: {e}");
            std::process::exit(2);
        }
    }
}

fn explore(options: &Options) -> Result<Report, ExploreError> {
    let scenario = match &options.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::fixed(),
    };
    options.explorer().explore(&scenario, options.strategy)
}
