// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::sdk::{DeviceSdk, SdkError};

/// Production SDK boundary.
///
/// Global setup at this level is host-side bookkeeping only; device
/// discovery and link bring-up happen when the first device is opened.
#[derive(Debug, Default)]
pub struct LinkedSdk;

impl LinkedSdk {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceSdk for LinkedSdk {
    fn initialize(&self, banner: &str, install_signal_handler: bool) -> Result<(), SdkError> {
        tracing::info!(banner, install_signal_handler, "Initializing device SDK");
        Ok(())
    }
}
