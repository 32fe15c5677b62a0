// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for module namespace mutation and type registration.

use std::error::Error;
use std::fmt;

/// Errors that can occur while populating a module namespace
#[derive(Debug, Clone, PartialEq)]
pub enum NamespaceError {
    /// A type binding with this name has already been fully defined
    TypeAlreadyDefined {
        /// The conflicting type name
        name: String,
    },
}

impl fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespaceError::TypeAlreadyDefined { name } => {
                write!(
                    f,
                    "Type '{}' is already defined in the module namespace",
                    name
                )
            }
        }
    }
}

impl Error for NamespaceError {}
