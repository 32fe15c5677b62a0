// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Native SDK boundary.
//!
//! The module composer talks to the device SDK through the [`DeviceSdk`]
//! trait so that import-time behavior can be tested without linked device
//! libraries. [`LinkedSdk`] is the production implementation;
//! [`ScriptedSdk`] is a scriptable double for tests. Global initialization
//! goes through [`InitGuard`], which attempts it exactly once per guard and
//! records the settled [`InitStatus`].

mod error;
mod init;
mod linked;
mod scripted;

pub use error::SdkError;
pub use init::{process_guard, InitGuard, InitStatus};
pub use linked::LinkedSdk;
pub use scripted::ScriptedSdk;

/// External collaborator surface of the device SDK.
///
/// `initialize` performs the SDK's one-time global setup. Failure here is
/// recoverable: the SDK re-attempts internally when a device is first
/// opened, so callers record the failure instead of propagating it.
pub trait DeviceSdk: Send + Sync {
    fn initialize(&self, banner: &str, install_signal_handler: bool) -> Result<(), SdkError>;
}
