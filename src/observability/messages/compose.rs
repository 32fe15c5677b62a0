// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for unit catalog validation and registration events.
//!
//! This module contains message types for logging events related to:
//! * Composition lifecycle (start, completion)
//! * Per-unit registration, including on-demand requests
//! * Catalog validation failures
//! * Requirement cycle detection

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Composition started for a validated unit catalog.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::CompositionStarted;
///
/// let msg = CompositionStarted { unit_count: 14 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct CompositionStarted {
    pub unit_count: usize,
}

impl Display for CompositionStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting module composition: {} binding units",
            self.unit_count
        )
    }
}

impl StructuredLog for CompositionStarted {
    fn log(&self) {
        tracing::info!(
            unit_count = self.unit_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "composition",
            span_name = name,
            unit_count = self.unit_count,
        )
    }
}

/// Composition completed with every unit registered.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::CompositionCompleted;
///
/// let msg = CompositionCompleted { unit_count: 14 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct CompositionCompleted {
    pub unit_count: usize,
}

impl Display for CompositionCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Module composition completed: {} binding units registered",
            self.unit_count
        )
    }
}

impl StructuredLog for CompositionCompleted {
    fn log(&self) {
        tracing::info!(
            unit_count = self.unit_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "composition_completed",
            span_name = name,
            unit_count = self.unit_count,
        )
    }
}

/// A binding unit finished registering its surface.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::UnitRegistered;
///
/// let msg = UnitRegistered { unit_id: "device" };
///
/// tracing::info!("{}", msg);
/// ```
pub struct UnitRegistered<'a> {
    pub unit_id: &'a str,
}

impl Display for UnitRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unit '{}' registered", self.unit_id)
    }
}

impl StructuredLog for UnitRegistered<'_> {
    fn log(&self) {
        tracing::info!(
            unit_id = self.unit_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "unit_registered",
            span_name = name,
            unit_id = self.unit_id,
        )
    }
}

/// A unit requested another unit mid-registration.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::OnDemandRegistration;
///
/// let msg = OnDemandRegistration {
///     unit_id: "data_queue",
///     requested_by: "device",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct OnDemandRegistration<'a> {
    pub unit_id: &'a str,
    pub requested_by: &'a str,
}

impl Display for OnDemandRegistration<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit '{}' registering on demand, requested by '{}'",
            self.unit_id, self.requested_by
        )
    }
}

impl StructuredLog for OnDemandRegistration<'_> {
    fn log(&self) {
        tracing::info!(
            unit_id = self.unit_id,
            requested_by = self.requested_by,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "on_demand_registration",
            span_name = name,
            unit_id = self.unit_id,
            requested_by = self.requested_by,
        )
    }
}

/// A binding unit's registration routine failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::UnitRegistrationFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = UnitRegistrationFailed {
///     unit_id: "device",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnitRegistrationFailed<'a> {
    pub unit_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for UnitRegistrationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit '{}' registration failed: {}",
            self.unit_id, self.error
        )
    }
}

impl StructuredLog for UnitRegistrationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            unit_id = self.unit_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unit_registration_failed",
            span_name = name,
            unit_id = self.unit_id,
            error = %self.error,
        )
    }
}

/// Requirement cycle detected in the unit catalog.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::DependencyCycleDetected;
///
/// let cycle = vec!["node".to_string(), "pipeline".to_string(), "node".to_string()];
/// let msg = DependencyCycleDetected { cycle: &cycle };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DependencyCycleDetected<'a> {
    pub cycle: &'a [String],
}

impl Display for DependencyCycleDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dependency cycle detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for DependencyCycleDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "dependency_cycle",
            span_name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// A unit requires another unit that is not in the catalog.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::UnresolvedRequirementDetected;
///
/// let msg = UnresolvedRequirementDetected {
///     unit_id: "device",
///     missing_requirement: "link",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnresolvedRequirementDetected<'a> {
    pub unit_id: &'a str,
    pub missing_requirement: &'a str,
}

impl Display for UnresolvedRequirementDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit '{}' requires missing unit '{}'",
            self.unit_id, self.missing_requirement
        )
    }
}

impl StructuredLog for UnresolvedRequirementDetected<'_> {
    fn log(&self) {
        tracing::error!(
            unit_id = self.unit_id,
            missing_requirement = self.missing_requirement,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unresolved_requirement",
            span_name = name,
            unit_id = self.unit_id,
            missing_requirement = self.missing_requirement,
        )
    }
}

/// Duplicate unit ID detected in the catalog.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use lume_bindings::observability::messages::compose::DuplicateUnitIdDetected;
///
/// let msg = DuplicateUnitIdDetected { unit_id: "device" };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateUnitIdDetected<'a> {
    pub unit_id: &'a str,
}

impl Display for DuplicateUnitIdDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate unit ID: '{}'", self.unit_id)
    }
}

impl StructuredLog for DuplicateUnitIdDetected<'_> {
    fn log(&self) {
        tracing::error!(
            unit_id = self.unit_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "duplicate_unit_id",
            span_name = name,
            unit_id = self.unit_id,
        )
    }
}
