// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::sdk::{DeviceSdk, SdkError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Arguments captured from an `initialize` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedInit {
    pub banner: String,
    pub install_signal_handler: bool,
}

enum ScriptedOutcome {
    Succeed,
    FailInit(String),
    Unavailable(String),
}

/// Scriptable SDK double.
///
/// Records every `initialize` call and returns a preconfigured outcome, so
/// tests can assert both the once-only discipline and the arguments that
/// crossed the boundary.
pub struct ScriptedSdk {
    outcome: ScriptedOutcome,
    calls: AtomicUsize,
    last_init: Mutex<Option<RecordedInit>>,
}

impl ScriptedSdk {
    /// Double whose initialization always succeeds.
    pub fn succeeding() -> Self {
        Self::with_outcome(ScriptedOutcome::Succeed)
    }

    /// Double whose initialization fails with the given reason.
    pub fn failing(reason: &str) -> Self {
        Self::with_outcome(ScriptedOutcome::FailInit(reason.to_string()))
    }

    /// Double simulating an unreachable device backend.
    pub fn unavailable(reason: &str) -> Self {
        Self::with_outcome(ScriptedOutcome::Unavailable(reason.to_string()))
    }

    fn with_outcome(outcome: ScriptedOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_init: Mutex::new(None),
        }
    }

    /// Number of `initialize` calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Arguments of the most recent `initialize` call, if any.
    pub fn last_init(&self) -> Option<RecordedInit> {
        match self.last_init.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DeviceSdk for ScriptedSdk {
    fn initialize(&self, banner: &str, install_signal_handler: bool) -> Result<(), SdkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_init.lock() {
            *guard = Some(RecordedInit {
                banner: banner.to_string(),
                install_signal_handler,
            });
        }

        match &self.outcome {
            ScriptedOutcome::Succeed => Ok(()),
            ScriptedOutcome::FailInit(reason) => Err(SdkError::InitializationFailed {
                reason: reason.clone(),
            }),
            ScriptedOutcome::Unavailable(reason) => Err(SdkError::BackendUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}
