// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::{Path, PathBuf};

use nix::unistd::{access, AccessFlags};

/// Platform abstraction layer.
#[cfg_attr(test, mockall::automock)]
pub trait Platform {
    /// Get the filesystem root that sysfs paths are resolved against.
    ///
    /// The non-test implementation returns `/` unless overridden on the
    /// command line.
    fn root(&self) -> PathBuf;

    /// Whether the current process may write to `path`.
    fn can_write(&self, path: &Path) -> bool;
}

/// Non-test implementation of `Platform`.
pub struct PlatformImpl {
    root: PathBuf,
}

impl PlatformImpl {
    pub fn new(root: PathBuf) -> Self {
        PlatformImpl { root }
    }
}

impl Platform for PlatformImpl {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn can_write(&self, path: &Path) -> bool {
        access(path, AccessFlags::W_OK).is_ok()
    }
}

#[cfg(test)]
impl MockPlatform {
    pub fn expect_root_path(&mut self, root: &Path) {
        let root = root.to_owned();
        self.expect_root().returning(move || root.clone());
    }
}
