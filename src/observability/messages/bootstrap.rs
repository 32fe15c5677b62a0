// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for module bootstrap events.
//!
//! This module contains message types for logging events related to:
//! * Build metadata publication onto the module namespace
//! * Signal-handler policy resolution against the host runtime
//! * One-time SDK initialization and deferral

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Build metadata attributes published onto the module namespace.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::bootstrap::MetadataPublished;
///
/// let msg = MetadataPublished { attr_count: 7 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct MetadataPublished {
    pub attr_count: usize,
}

impl Display for MetadataPublished {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Published {} build metadata attributes",
            self.attr_count
        )
    }
}

impl StructuredLog for MetadataPublished {
    fn log(&self) {
        tracing::info!(
            attr_count = self.attr_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "metadata_published",
            span_name = name,
            attr_count = self.attr_count,
        )
    }
}

/// Install-signal-handler policy resolved from host overrides.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::bootstrap::PolicyResolved;
///
/// let msg = PolicyResolved {
///     install_signal_handler: false,
///     interpreter_override: None,
///     globals_override: Some(false),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PolicyResolved {
    pub install_signal_handler: bool,
    pub interpreter_override: Option<bool>,
    pub globals_override: Option<bool>,
}

impl Display for PolicyResolved {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Signal handler policy resolved: install={} (interpreter={:?}, globals={:?})",
            self.install_signal_handler, self.interpreter_override, self.globals_override
        )
    }
}

impl StructuredLog for PolicyResolved {
    fn log(&self) {
        tracing::info!(
            install_signal_handler = self.install_signal_handler,
            interpreter_override = ?self.interpreter_override,
            globals_override = ?self.globals_override,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "policy_resolved",
            span_name = name,
            install_signal_handler = self.install_signal_handler,
            interpreter_override = ?self.interpreter_override,
            globals_override = ?self.globals_override,
        )
    }
}

/// Native SDK accepted one-time initialization.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::bootstrap::SdkInitialized;
///
/// let msg = SdkInitialized {
///     banner: "Lume script bindings - version: 0.1.0",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SdkInitialized<'a> {
    pub banner: &'a str,
}

impl Display for SdkInitialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "SDK initialized: {}", self.banner)
    }
}

impl StructuredLog for SdkInitialized<'_> {
    fn log(&self) {
        tracing::info!(
            banner = self.banner,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "sdk_initialized",
            span_name = name,
            banner = self.banner,
        )
    }
}

/// Native SDK initialization failed and was deferred to first use.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::bootstrap::SdkInitDeferred;
///
/// let msg = SdkInitDeferred {
///     banner: "Lume script bindings - version: 0.1.0",
///     reason: "no device backend available",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct SdkInitDeferred<'a> {
    pub banner: &'a str,
    pub reason: &'a str,
}

impl Display for SdkInitDeferred<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "SDK initialization deferred to first use: {}",
            self.reason
        )
    }
}

impl StructuredLog for SdkInitDeferred<'_> {
    fn log(&self) {
        tracing::warn!(
            banner = self.banner,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "sdk_init_deferred",
            span_name = name,
            banner = self.banner,
            reason = self.reason,
        )
    }
}

/// Module import completed end to end.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::bootstrap::ImportCompleted;
///
/// let msg = ImportCompleted {
///     module: "lume",
///     phase: "initialized",
///     unit_count: 14,
///     install_signal_handler: true,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ImportCompleted<'a> {
    pub module: &'a str,
    pub phase: &'a str,
    pub unit_count: usize,
    pub install_signal_handler: bool,
}

impl Display for ImportCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Module '{}' import completed in phase {}: {} units, install_signal_handler={}",
            self.module, self.phase, self.unit_count, self.install_signal_handler
        )
    }
}

impl StructuredLog for ImportCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            module = self.module,
            phase = self.phase,
            unit_count = self.unit_count,
            install_signal_handler = self.install_signal_handler,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "import_completed",
            span_name = name,
            module = self.module,
            phase = self.phase,
            unit_count = self.unit_count,
            install_signal_handler = self.install_signal_handler,
        )
    }
}
