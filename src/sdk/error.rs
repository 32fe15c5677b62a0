// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors surfaced by the native SDK boundary.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The SDK rejected or aborted its global initialization.
    #[error("SDK initialization failed: {reason}")]
    InitializationFailed { reason: String },

    /// The device backend could not be reached at all.
    #[error("Device backend unavailable: {reason}")]
    BackendUnavailable { reason: String },
}
