// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Set the cpufreq scaling governor on every CPU policy.
//!
//! The sequence is: discover policies and the governors the first one
//! offers, validate the requested name, check write permission, confirm
//! every policy offers the name, then write it to each `scaling_governor`.

pub mod apply;
pub mod command_line;
pub mod cpufreq;
pub mod error;
pub mod governor;
pub mod platform;

use std::io::Write;

use anyhow::Context;

pub use crate::command_line::Args;
pub use crate::error::{Error, Result};
use crate::governor::GovernorSet;
use crate::platform::Platform;

/// Run one invocation. `program` is used in the usage message.
///
/// `--list` and `--status` output goes to `out`. Errors carry their own
/// message and exit code; nothing is printed for them here.
pub fn run(
    program: &str,
    args: &Args,
    platform: &dyn Platform,
    out: &mut dyn Write,
) -> Result<()> {
    let cpufreq_dir = cpufreq::cpufreq_dir(&platform.root());
    let policies = cpufreq::discover_policies(&cpufreq_dir)?;

    if args.status {
        return print_status(&policies, args.json, out);
    }

    let governors = cpufreq::discover_governors(&policies)?;

    if args.list {
        return print_governors(&governors, args.json, out);
    }

    let name = match args.governor.as_slice() {
        [name] => name,
        _ => {
            return Err(Error::Usage {
                program: program.to_owned(),
                governors,
            })
        }
    };

    if !governors.contains(name) {
        return Err(Error::InvalidGovernor {
            name: name.to_owned(),
            governors,
        });
    }

    if !platform.can_write(&cpufreq_dir) {
        return Err(Error::NoPermission);
    }

    apply::check_policies(&policies, name)?;
    apply::apply_governor(&policies, name).into_result()?;
    Ok(())
}

fn print_governors(governors: &GovernorSet, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, governors).context("Failed to serialize governors")?;
        writeln!(out).context("Failed to write output")?;
    } else {
        writeln!(out, "{}", governors).context("Failed to write output")?;
    }
    Ok(())
}

fn print_status(policies: &[cpufreq::Policy], json: bool, out: &mut dyn Write) -> Result<()> {
    let statuses = policies
        .iter()
        .map(cpufreq::Policy::status)
        .collect::<anyhow::Result<Vec<_>>>()?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &statuses)
            .context("Failed to serialize policy status")?;
        writeln!(out).context("Failed to write output")?;
    } else {
        for status in statuses {
            writeln!(
                out,
                "{}: {} ({})",
                status.policy, status.governor, status.available
            )
            .context("Failed to write output")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpufreq::tests::{read_governor, write_policy};
    use crate::platform::MockPlatform;
    use clap::Parser;
    use std::path::Path;

    fn run_with(root: &Path, writable: bool, argv: &[&str]) -> (Result<()>, String) {
        let mut platform = MockPlatform::new();
        platform.expect_root_path(root);
        platform.expect_can_write().returning(move |_| writable);
        let args = Args::parse_from(argv);
        let mut out = Vec::new();
        let result = run("setgov", &args, &platform, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn setup(root: &Path) {
        write_policy(root, 0, "performance powersave schedutil", "schedutil");
        write_policy(root, 1, "performance powersave schedutil", "schedutil");
    }

    #[test]
    fn test_run_applies_to_every_policy() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        setup(root);

        let (result, out) = run_with(root, true, &["setgov", "powersave"]);
        result.unwrap();
        assert!(out.is_empty());
        assert_eq!(read_governor(root, 0), "powersave\n");
        assert_eq!(read_governor(root, 1), "powersave\n");
    }

    #[test]
    fn test_run_usage() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        setup(root);

        for argv in [&["setgov"][..], &["setgov", "performance", "powersave"][..]] {
            let (result, _) = run_with(root, true, argv);
            let err = result.unwrap_err();
            assert_eq!(err.exit_code(), 1);
            assert_eq!(
                err.to_string(),
                "Usage: setgov performance|powersave|schedutil"
            );
            assert_eq!(read_governor(root, 0), "schedutil\n");
            assert_eq!(read_governor(root, 1), "schedutil\n");
        }
    }

    #[test]
    fn test_run_invalid_governor() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        setup(root);

        let (result, _) = run_with(root, true, &["setgov", "turbo"]);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "turbo is not a valid governor for this system: performance|powersave|schedutil"
        );
        assert_eq!(read_governor(root, 0), "schedutil\n");
    }

    #[test]
    fn test_run_no_permission() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        setup(root);

        let (result, _) = run_with(root, false, &["setgov", "performance"]);
        assert_eq!(result.unwrap_err().exit_code(), 3);
        assert_eq!(read_governor(root, 0), "schedutil\n");
        assert_eq!(read_governor(root, 1), "schedutil\n");
    }

    #[test]
    fn test_run_list() {
        let root = tempfile::tempdir().unwrap();
        setup(root.path());

        let (result, out) = run_with(root.path(), true, &["setgov", "--list"]);
        result.unwrap();
        assert_eq!(out, "performance|powersave|schedutil\n");

        let (result, out) = run_with(root.path(), true, &["setgov", "--list", "--json"]);
        result.unwrap();
        assert_eq!(out, "[\"performance\",\"powersave\",\"schedutil\"]\n");
    }

    #[test]
    fn test_run_status() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        write_policy(root, 0, "performance powersave", "powersave");
        write_policy(root, 1, "performance", "performance");

        let (result, out) = run_with(root, true, &["setgov", "--status"]);
        result.unwrap();
        assert_eq!(
            out,
            "policy0: powersave (performance|powersave)\npolicy1: performance (performance)\n"
        );

        let (result, out) = run_with(root, true, &["setgov", "--status", "--json"]);
        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {
                    "policy": "policy0",
                    "governor": "powersave",
                    "available": ["performance", "powersave"],
                },
                {
                    "policy": "policy1",
                    "governor": "performance",
                    "available": ["performance"],
                },
            ])
        );
    }

    #[test]
    fn test_run_no_cpufreq() {
        let root = tempfile::tempdir().unwrap();
        let (result, _) = run_with(root.path(), true, &["setgov", "performance"]);
        assert_eq!(result.unwrap_err().exit_code(), 4);
    }
}
