// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Command line argument parsing.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Set the cpufreq scaling governor on every CPU policy.
#[derive(Parser, Debug)]
#[command(version, about, group(ArgGroup::new("mode").args(["list", "status"])))]
pub struct Args {
    /// Governor to apply. Exactly one is required unless --list or
    /// --status is given; the count is checked after parsing so the usage
    /// message can list what the system supports.
    #[arg(value_name = "GOVERNOR")]
    pub governor: Vec<String>,

    /// Print the governors the system supports
    #[arg(long, conflicts_with_all(["status", "governor"]))]
    pub list: bool,

    /// Print the current and available governors of every policy
    #[arg(long, conflicts_with("governor"))]
    pub status: bool,

    /// Print --list or --status output as JSON
    #[arg(long, requires("mode"))]
    pub json: bool,

    /// Filesystem root that sysfs is found under
    #[arg(long, default_value = "/")]
    pub root: PathBuf,

    /// Show debug output
    #[arg(long)]
    pub debug: bool,
}
