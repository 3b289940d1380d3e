// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Writing a governor to every policy.
//!
//! Validation runs against every policy before the first write. Writes are
//! not transactional: a failed write leaves earlier policies updated, and
//! the report names each policy that failed.

use std::fmt;

use log::debug;

use crate::cpufreq::Policy;
use crate::error::{Error, Result};

/// Per-policy outcome of `apply_governor`.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub governor: String,
    pub applied: Vec<String>,
    pub failed: Vec<(String, anyhow::Error)>,
}

impl ApplyReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turn a report with failures into `Error::Apply`.
    pub fn into_result(self) -> Result<ApplyReport> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Apply(self))
        }
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to set governor {} on {} of {} policies",
            self.governor,
            self.failed.len(),
            self.applied.len() + self.failed.len()
        )?;
        for (policy, err) in &self.failed {
            write!(f, "\n  {}: {:#}", policy, err)?;
        }
        Ok(())
    }
}

/// Make sure every policy lists `governor` in its own capability file.
///
/// Policies on heterogeneous systems may offer different sets, so the
/// first policy's answer is not trusted for the rest.
pub fn check_policies(policies: &[Policy], governor: &str) -> Result<()> {
    for policy in policies {
        let governors = policy.available_governors()?;
        if !governors.contains(governor) {
            return Err(Error::UnsupportedByPolicy {
                name: governor.to_owned(),
                policy: policy.name().to_owned(),
                governors,
            });
        }
    }
    Ok(())
}

/// Write `governor` to every policy, continuing past failures.
///
/// Failures are only recorded; the report's `Display` lists them.
pub fn apply_governor(policies: &[Policy], governor: &str) -> ApplyReport {
    let mut report = ApplyReport {
        governor: governor.to_owned(),
        ..Default::default()
    };
    for policy in policies {
        match policy.set_governor(governor) {
            Ok(()) => {
                debug!("Set {} to {}", policy.name(), governor);
                report.applied.push(policy.name().to_owned());
            }
            Err(err) => report.failed.push((policy.name().to_owned(), err)),
        }
    }
    report
}
