// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use thiserror::Error as ThisError;

use crate::apply::ApplyReport;
use crate::governor::GovernorSet;

/// Everything that stops a run, each mapped to a distinct exit status.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Wrong number of positional arguments.
    #[error("Usage: {program} {governors}")]
    Usage {
        program: String,
        governors: GovernorSet,
    },
    /// The governor is not offered by the first policy.
    #[error("{name} is not a valid governor for this system: {governors}")]
    InvalidGovernor {
        name: String,
        governors: GovernorSet,
    },
    /// The governor is not offered by one of the other policies.
    #[error("{name} is not supported by {policy}: {governors}")]
    UnsupportedByPolicy {
        name: String,
        policy: String,
        governors: GovernorSet,
    },
    #[error("No write permission. Use sudo to run as root.")]
    NoPermission,
    #[error("{0}")]
    Apply(ApplyReport),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Whether the run was turned down before touching any policy.
    ///
    /// These are printed to the user as a plain line on stdout; the rest
    /// are environment failures and go through the logger.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Error::Apply(_) | Error::Other(_))
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage { .. } => 1,
            Error::InvalidGovernor { .. } | Error::UnsupportedByPolicy { .. } => 2,
            Error::NoPermission => 3,
            Error::Apply(_) | Error::Other(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
