// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Diagnostics for setgov.
//!
//! Usage, rejected governors and the permission hint are printed by `main`
//! as plain lines. This logger only carries diagnostics (`--debug` output
//! and environment failures) and always writes to stderr, so `--list` and
//! `--status` output on stdout stays machine readable.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct DiagnosticLogger {
    level: LevelFilter,
}

// Debug records name the module they came from; the rest only their level.
fn format_line(level: Level, target: &str, args: &std::fmt::Arguments) -> String {
    match level {
        Level::Debug | Level::Trace => format!("{} {}: {}", level, target, args),
        _ => format!("{}: {}", level, args),
    }
}

impl Log for DiagnosticLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(record.level(), record.target(), record.args())
            );
        }
    }

    fn flush(&self) {}
}

/// Install the logger; `debug` lowers the threshold from `Info` to `Debug`.
pub fn init(debug: bool) -> Result<(), SetLoggerError> {
    let level = match debug {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };
    log::set_boxed_logger(Box::new(DiagnosticLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
