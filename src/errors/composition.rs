// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur during unit catalog validation
#[derive(Debug, Clone, PartialEq)]
pub enum CompositionError {
    /// A circular requirement was detected between binding units
    DependencyCycle {
        /// The cycle path showing the circular requirement
        cycle: Vec<String>,
    },
    /// A unit requires another unit that is not in the catalog
    UnresolvedRequirement {
        /// The unit that has the unresolved requirement
        unit_id: String,
        /// The requirement that couldn't be resolved
        missing_requirement: String,
    },
    /// A unit has a duplicate ID
    DuplicateUnitId {
        /// The duplicate unit ID
        unit_id: String,
    },
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionError::DependencyCycle { cycle } => {
                write!(f, "Dependency cycle detected: {}", cycle.join(" -> "))
            }
            CompositionError::UnresolvedRequirement {
                unit_id,
                missing_requirement,
            } => {
                write!(
                    f,
                    "Unit '{}' requires '{}' which is not in the catalog",
                    unit_id, missing_requirement
                )
            }
            CompositionError::DuplicateUnitId { unit_id } => {
                write!(f, "Duplicate unit ID: '{}'", unit_id)
            }
        }
    }
}

impl std::error::Error for CompositionError {}
