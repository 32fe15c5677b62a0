// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for binding unit registration.
//!
//! Registration failures are the only composition-time defects allowed to
//! escape a module import: they indicate a build or packaging problem, not a
//! runtime condition. All errors implement `std::error::Error` via the
//! `thiserror` crate for consistent error handling.

use crate::errors::{CompositionError, NamespaceError};
use thiserror::Error;

/// Error type for failures while registering binding units.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// A unit's registration routine reported a failure.
    #[error("Unit '{unit_id}' failed to register: {reason}")]
    UnitFailed { unit_id: String, reason: String },

    /// The unit catalog failed structural validation before scheduling.
    #[error("Unit catalog validation failed:\n{details}")]
    CatalogInvalid { details: String },

    /// A structural composition error surfaced during registration,
    /// e.g. a requirement cycle discovered through on-demand registration.
    #[error("{0}")]
    Composition(#[from] CompositionError),

    /// A namespace mutation was rejected, e.g. duplicate type registration.
    #[error("{0}")]
    Namespace(#[from] NamespaceError),
}

/// Result type alias for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;
