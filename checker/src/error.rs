// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures of the tooling around the fixture. The fixture itself cannot fail.
#[derive(Debug)]
pub enum ExploreError {
    /// A scenario file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A scenario file is not a valid scenario description.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Exhaustive enumeration would visit more states than k_limits::MAX_BOUNDED_STATES.
    SearchSpaceTooLarge { states: u128, limit: u128 },
    /// Option text that could not be split into arguments.
    InvalidOption { name: &'static str, message: String },
}

impl fmt::Display for ExploreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExploreError::Io { path, source } => {
                write!(f, "cannot read scenario {}: {}", path.display(), source)
            }
            ExploreError::Malformed { path, source } => {
                write!(f, "malformed scenario {}: {}", path.display(), source)
            }
            ExploreError::SearchSpaceTooLarge { states, limit } => write!(
                f,
                "bounded search would visit {states} states, more than the limit of {limit}"
            ),
            ExploreError::InvalidOption { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ExploreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExploreError::Io { source, .. } => Some(source),
            ExploreError::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}
