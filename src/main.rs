// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Set the cpufreq scaling governor on every CPU policy.
//!
//! Exit status: 0 on success, 1 for usage errors, 2 for a governor the
//! system does not offer, 3 without write permission, 4 for anything else.

mod logger;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::error;

use setgov::platform::PlatformImpl;
use setgov::Args;

const USAGE_EXIT_CODE: u8 = 1;
const FAILURE_EXIT_CODE: u8 = 4;

fn main() -> ExitCode {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                return ExitCode::from(USAGE_EXIT_CODE);
            }
        },
    };

    if let Err(err) = logger::init(args.debug) {
        eprintln!("Failed to initialize logger: {}", err);
        return ExitCode::from(FAILURE_EXIT_CODE);
    }

    let platform = PlatformImpl::new(args.root.clone());
    match setgov::run(&program, &args, &platform, &mut std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_rejection() {
                println!("{}", err);
            } else {
                error!("{:#}", err);
            }
            ExitCode::from(err.exit_code())
        }
    }
}
