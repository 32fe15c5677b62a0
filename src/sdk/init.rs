// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One-time SDK initialization with a recorded outcome.
//!
//! Import must succeed even when the device stack is absent, so a failed
//! `initialize` is swallowed at the boundary. Swallowed must not mean
//! invisible: the guard records the settled [`InitStatus`] and logs the
//! deferral, and callers can query the status at any time. Each guard
//! attempts initialization at most once for its lifetime; the import path
//! uses a process-global guard, tests construct their own.

use crate::observability::messages::bootstrap::{SdkInitDeferred, SdkInitialized};
use crate::observability::messages::StructuredLog;
use crate::sdk::DeviceSdk;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Settled (or not yet attempted) state of SDK global initialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitStatus {
    /// No `initialize_once` call has happened on this guard yet.
    Unstarted,
    /// The SDK accepted global initialization.
    Initialized,
    /// Initialization failed and was deferred to first device use.
    Deferred { reason: String },
}

impl InitStatus {
    pub fn is_initialized(&self) -> bool {
        matches!(self, InitStatus::Initialized)
    }
}

impl fmt::Display for InitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitStatus::Unstarted => write!(f, "unstarted"),
            InitStatus::Initialized => write!(f, "initialized"),
            InitStatus::Deferred { reason } => write!(f, "deferred ({})", reason),
        }
    }
}

/// Once-guard around [`DeviceSdk::initialize`].
pub struct InitGuard {
    state: OnceLock<InitStatus>,
}

impl InitGuard {
    pub const fn new() -> Self {
        Self {
            state: OnceLock::new(),
        }
    }

    /// Attempt SDK initialization exactly once for this guard's lifetime.
    ///
    /// The first call drives [`DeviceSdk::initialize`] and records the
    /// settled status; every later call returns the recorded status without
    /// touching the SDK again. Failure is reported as
    /// [`InitStatus::Deferred`], never as an error: the SDK re-attempts
    /// internally when the first device is opened.
    pub fn initialize_once(
        &self,
        sdk: &dyn DeviceSdk,
        banner: &str,
        install_signal_handler: bool,
    ) -> InitStatus {
        self.state
            .get_or_init(|| match sdk.initialize(banner, install_signal_handler) {
                Ok(()) => {
                    SdkInitialized { banner }.log();
                    InitStatus::Initialized
                }
                Err(error) => {
                    let reason = error.to_string();
                    SdkInitDeferred {
                        banner,
                        reason: &reason,
                    }
                    .log();
                    InitStatus::Deferred { reason }
                }
            })
            .clone()
    }

    /// Current status without triggering an attempt.
    pub fn status(&self) -> InitStatus {
        self.state.get().cloned().unwrap_or(InitStatus::Unstarted)
    }
}

impl Default for InitGuard {
    fn default() -> Self {
        Self::new()
    }
}

static PROCESS_GUARD: InitGuard = InitGuard::new();

/// Process-lifetime guard backing the default import path.
pub fn process_guard() -> &'static InitGuard {
    &PROCESS_GUARD
}
