// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Discovery of cpufreq policies and access to their sysfs files.

use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs_err as fs;
use log::debug;
use serde::Serialize;

use crate::governor::GovernorSet;

/// Base path for cpufreq relative to rootdir.
pub const CPUFREQ_PATH: &str = "sys/devices/system/cpu/cpufreq";

const AVAILABLE_GOVERNORS_FILE: &str = "scaling_available_governors";
const SCALING_GOVERNOR_FILE: &str = "scaling_governor";

/// Returns the cpufreq directory under `root`.
pub fn cpufreq_dir(root: &Path) -> PathBuf {
    root.join(CPUFREQ_PATH)
}

/// One cpufreq scaling domain, e.g. `/sys/devices/system/cpu/cpufreq/policy0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    name: String,
    path: PathBuf,
}

/// Snapshot of a policy, as printed by `--status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyStatus {
    pub policy: String,
    pub governor: String,
    pub available: GovernorSet,
}

impl Policy {
    pub fn new(path: PathBuf) -> Result<Policy> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid policy path {}", path.display()))?
            .to_owned();
        Ok(Policy { name, path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // The number at the end of the name, e.g. 4 for "policy4".
    fn index(&self) -> Option<u32> {
        let digits = self.name.trim_end_matches(|c: char| c.is_ascii_digit());
        self.name[digits.len()..].parse().ok()
    }

    pub fn available_governors(&self) -> Result<GovernorSet> {
        let path = self.path.join(AVAILABLE_GOVERNORS_FILE);
        let reader = fs::File::open(&path).map(BufReader::new)?;
        GovernorSet::parse(reader).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn current_governor(&self) -> Result<String> {
        let governor = fs::read_to_string(self.path.join(SCALING_GOVERNOR_FILE))?;
        Ok(governor.trim().to_owned())
    }

    /// Write `governor` into `scaling_governor`, newline terminated.
    pub fn set_governor(&self, governor: &str) -> Result<()> {
        let path = self.path.join(SCALING_GOVERNOR_FILE);
        debug!("Writing {} to {}", governor, path.display());
        fs::write(&path, format!("{}\n", governor))?;
        Ok(())
    }

    pub fn status(&self) -> Result<PolicyStatus> {
        Ok(PolicyStatus {
            policy: self.name.clone(),
            governor: self.current_governor()?,
            available: self.available_governors()?,
        })
    }
}

/// List every entry of `cpufreq_dir` whose name contains "policy".
///
/// Policies are ordered by their numeric suffix, so `policy2` comes before
/// `policy10` and the first element is `policy0` on a regular system.
pub fn discover_policies(cpufreq_dir: &Path) -> Result<Vec<Policy>> {
    let mut policies = Vec::new();
    let entries = fs::read_dir(cpufreq_dir).context("Failed to list cpufreq policies")?;
    for entry in entries {
        let entry = entry?;
        if entry.file_name().to_string_lossy().contains("policy") {
            policies.push(Policy::new(entry.path())?);
        }
    }
    policies.sort_by(|a, b| {
        let key = |p: &Policy| (p.index().is_none(), p.index(), p.name.clone());
        key(a).cmp(&key(b))
    });
    debug!(
        "Found policies: {:?}",
        policies.iter().map(Policy::name).collect::<Vec<_>>()
    );
    Ok(policies)
}

/// Read the governors supported by the first policy.
///
/// All policies are assumed to share this set for usage text and the
/// initial validation; `apply` re-checks each policy before writing.
pub fn discover_governors(policies: &[Policy]) -> Result<GovernorSet> {
    let first = policies.first().context("No cpufreq policies found")?;
    first.available_governors()
}
