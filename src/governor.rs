// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The set of governor names a cpufreq policy accepts.

use std::fmt;
use std::io::BufRead;

use anyhow::{Context, Result};
use serde::Serialize;

/// Governor names in the order the kernel reports them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GovernorSet(Vec<String>);

impl GovernorSet {
    /// Parse the first line of a `scaling_available_governors` file.
    ///
    /// The kernel separates names with single spaces and ends the line with
    /// a trailing space, so any run of whitespace is treated as a separator.
    pub fn parse<R: BufRead>(reader: R) -> Result<GovernorSet> {
        let first_line = reader.lines().next().context("No content in buffer")??;
        Ok(GovernorSet(
            first_line.split_whitespace().map(str::to_owned).collect(),
        ))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|governor| governor == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for GovernorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        GovernorSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Formats as `a|b|c`, the form used in usage and error messages.
impl fmt::Display for GovernorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("|"))
    }
}
