// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Host scripting runtime boundary.
//!
//! The binding layer never probes the host interpreter directly; everything
//! it needs from the embedding runtime goes through the [`HostRuntime`]
//! trait. The host exposes two well-known attribute namespaces:
//!
//! * [`HostScope::Interpreter`] - interpreter-level state, consulted first
//! * [`HostScope::Globals`] - the global builtins namespace
//!
//! Attribute reads are total: a lookup can fail (scope unavailable, runtime
//! error), succeed with no value, or succeed with a dynamically typed
//! [`HostValue`]. Policy code narrows those outcomes with
//! [`policy::read_optional_bool`].

mod scripted;

pub mod policy;

pub use scripted::ScriptedHost;

use std::fmt;
use thiserror::Error;

/// The host runtime's well-known attribute namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostScope {
    /// Interpreter-level state, e.g. flags set before the import ran.
    Interpreter,
    /// The global builtins namespace.
    Globals,
}

impl fmt::Display for HostScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostScope::Interpreter => write!(f, "interpreter"),
            HostScope::Globals => write!(f, "globals"),
        }
    }
}

/// A dynamically typed attribute value read from the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl HostValue {
    /// Strict boolean cast matching the host runtime's conversion rules:
    /// only a genuine boolean converts, everything else fails the cast.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Error type for host attribute lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostAttrError {
    /// The requested namespace does not exist in this host.
    #[error("Host scope '{scope}' is unavailable")]
    ScopeUnavailable { scope: HostScope },

    /// The lookup itself raised inside the host runtime.
    #[error("Host attribute lookup failed for '{key}': {reason}")]
    LookupFailed { key: String, reason: String },
}

/// Attribute lookups against the embedding scripting runtime.
pub trait HostRuntime {
    /// Read an attribute from one of the host's well-known namespaces.
    ///
    /// `Ok(None)` means the attribute is absent; `Err` means the lookup
    /// itself failed.
    fn read_attr(&self, scope: HostScope, key: &str) -> Result<Option<HostValue>, HostAttrError>;
}

/// A host with no reachable namespaces.
///
/// Used when composing outside a real scripting runtime, e.g. from the
/// inspection binary. Every probe fails, so policy resolution falls back to
/// its defaults.
pub struct NullHost;

impl HostRuntime for NullHost {
    fn read_attr(&self, scope: HostScope, _key: &str) -> Result<Option<HostValue>, HostAttrError> {
        Err(HostAttrError::ScopeUnavailable { scope })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_cast_is_strict() {
        assert_eq!(HostValue::Bool(false).as_bool(), Some(false));
        assert_eq!(HostValue::Int(1).as_bool(), None);
        assert_eq!(HostValue::Str("true".into()).as_bool(), None);
    }

    #[test]
    fn test_null_host_has_no_scopes() {
        let result = NullHost.read_attr(HostScope::Interpreter, "anything");
        assert!(matches!(
            result,
            Err(HostAttrError::ScopeUnavailable { .. })
        ));
    }
}
