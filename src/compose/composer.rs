// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Top-level module composition.
//!
//! `Composer` is the import entry point. It publishes build metadata onto
//! the namespace, drives the unit scheduler, resolves the signal-handler
//! policy against the host runtime, and performs guarded one-time SDK
//! initialization. After metadata publication only a unit registration
//! failure can escape; policy probes and SDK initialization never raise
//! past the composer, so the terminal phase is otherwise always reached.

use crate::bindings;
use crate::build_info;
use crate::compose::{RegistrationResult, Scheduler};
use crate::config::ComposeConfig;
use crate::host::policy::{resolve_install_signal_handler, PolicyResolution};
use crate::host::HostRuntime;
use crate::module::ModuleNamespace;
use crate::observability::messages::bootstrap::{
    ImportCompleted, MetadataPublished, PolicyResolved,
};
use crate::observability::messages::StructuredLog;
use crate::sdk::{process_guard, DeviceSdk, InitGuard, InitStatus};
use serde::Serialize;
use std::fmt;

/// Progress of a module import.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPhase {
    Unstarted,
    MetadataPublished,
    UnitsRegistered,
    PolicyResolved,
    Initialized,
    InitializationDeferred,
}

impl fmt::Display for ImportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ImportPhase::Unstarted => "unstarted",
            ImportPhase::MetadataPublished => "metadata_published",
            ImportPhase::UnitsRegistered => "units_registered",
            ImportPhase::PolicyResolved => "policy_resolved",
            ImportPhase::Initialized => "initialized",
            ImportPhase::InitializationDeferred => "initialization_deferred",
        };
        write!(f, "{}", text)
    }
}

/// Summary of one completed import.
#[derive(Debug, Serialize)]
pub struct ImportReport {
    pub module_name: String,
    pub phase: ImportPhase,
    pub unit_count: usize,
    pub policy: PolicyResolution,
    pub init: InitStatus,
    pub banner: String,
}

/// The module import entry point.
pub struct Composer<'a> {
    config: ComposeConfig,
    host: &'a dyn HostRuntime,
    sdk: &'a dyn DeviceSdk,
}

impl<'a> Composer<'a> {
    pub fn new(config: ComposeConfig, host: &'a dyn HostRuntime, sdk: &'a dyn DeviceSdk) -> Self {
        Self { config, host, sdk }
    }

    /// Compose against the process-lifetime init guard.
    pub fn compose(&self) -> RegistrationResult<(ModuleNamespace, ImportReport)> {
        self.compose_with_guard(process_guard())
    }

    /// Compose with an explicit init guard.
    ///
    /// Tests pass their own guard so initialization outcomes stay isolated
    /// per test instead of sticking to the process guard.
    pub fn compose_with_guard(
        &self,
        guard: &InitGuard,
    ) -> RegistrationResult<(ModuleNamespace, ImportReport)> {
        let mut module = ModuleNamespace::new(&self.config.module_name);
        let mut phase = ImportPhase::Unstarted;
        tracing::debug!(%phase, module = module.name(), "Starting module composition");

        let attr_count = build_info::publish(&mut module);
        phase = ImportPhase::MetadataPublished;
        tracing::debug!(%phase, attr_count, "Import phase reached");
        MetadataPublished { attr_count }.log();

        let catalog = bindings::builtin_catalog(&self.config.units);
        let unit_count = catalog.len();
        Scheduler::new(catalog).run(&mut module)?;
        phase = ImportPhase::UnitsRegistered;
        tracing::debug!(%phase, unit_count, "Import phase reached");

        let policy = resolve_install_signal_handler(self.host, self.config.install_signal_handler);
        phase = ImportPhase::PolicyResolved;
        tracing::debug!(%phase, "Import phase reached");
        PolicyResolved {
            install_signal_handler: policy.install_signal_handler,
            interpreter_override: policy.interpreter_override,
            globals_override: policy.globals_override,
        }
        .log();

        let banner = build_info::banner(&self.config.product);
        let init = guard.initialize_once(self.sdk, &banner, policy.install_signal_handler);
        phase = if init.is_initialized() {
            ImportPhase::Initialized
        } else {
            ImportPhase::InitializationDeferred
        };

        let phase_text = phase.to_string();
        ImportCompleted {
            module: module.name(),
            phase: &phase_text,
            unit_count,
            install_signal_handler: policy.install_signal_handler,
        }
        .log();

        let report = ImportReport {
            module_name: module.name().to_string(),
            phase,
            unit_count,
            policy,
            init,
            banner,
        };
        Ok((module, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use crate::sdk::ScriptedSdk;

    #[test]
    fn test_phase_display_names() {
        assert_eq!(ImportPhase::Unstarted.to_string(), "unstarted");
        assert_eq!(ImportPhase::UnitsRegistered.to_string(), "units_registered");
        assert_eq!(
            ImportPhase::InitializationDeferred.to_string(),
            "initialization_deferred"
        );
    }

    #[test]
    fn test_successful_compose_reaches_initialized() {
        let sdk = ScriptedSdk::succeeding();
        let composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);
        let guard = InitGuard::new();

        let (_, report) = composer.compose_with_guard(&guard).unwrap();

        assert_eq!(report.phase, ImportPhase::Initialized);
        assert!(report.init.is_initialized());
    }

    #[test]
    fn test_failed_init_reaches_deferred_phase() {
        let sdk = ScriptedSdk::failing("no devices");
        let composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);
        let guard = InitGuard::new();

        let (_, report) = composer.compose_with_guard(&guard).unwrap();

        assert_eq!(report.phase, ImportPhase::InitializationDeferred);
        assert!(matches!(report.init, InitStatus::Deferred { .. }));
    }
}
