// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.
//
// The fixture itself: compares [5...4] with [1...3] and reports the terminal state it reaches
// as the process status, 0 for exit and 1 for error. It takes no arguments.

use interval_fixture::harness;
use std::env;

fn main() {
    // Diagnostics go to stderr and only when asked for; the status code is the whole interface.
    if env::var("INTERVAL_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("INTERVAL_LOG")
            .write_style("INTERVAL_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let terminal = harness::run_fixed();
    std::process::exit(terminal.status_code());
}
