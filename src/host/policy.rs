// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Signal-handler policy resolution.
//!
//! Whether the SDK may install its own process signal handler is decided at
//! import time from host-side overrides: the interpreter scope and the
//! globals scope may each carry an optional boolean under
//! [`INSTALL_SIGNAL_HANDLER_KEY`]. The resolution is the logical AND of the
//! configured default and every override that could actually be read, so
//! any reachable `false` wins and unreadable sources contribute nothing.

use crate::host::{HostRuntime, HostScope};
use serde::Serialize;

/// Attribute key probed in both host scopes for the signal-handler override.
pub const INSTALL_SIGNAL_HANDLER_KEY: &str = "LUME_INSTALL_SIGNAL_HANDLER";

/// Outcome of resolving the install-signal-handler policy.
///
/// Carries the per-scope overrides that were actually read so callers can
/// see which sources constrained the decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyResolution {
    pub install_signal_handler: bool,
    pub interpreter_override: Option<bool>,
    pub globals_override: Option<bool>,
}

/// Read an optional boolean from a host scope without ever failing.
///
/// Lookup errors, absent attributes, and failed boolean casts all collapse
/// to `None`: an unreadable source places no constraint on the policy.
pub fn read_optional_bool(
    host: &dyn HostRuntime,
    scope: HostScope,
    key: &str,
) -> Option<bool> {
    match host.read_attr(scope, key) {
        Ok(Some(value)) => value.as_bool(),
        Ok(None) => None,
        Err(error) => {
            tracing::debug!(%scope, key, %error, "host attribute probe failed");
            None
        }
    }
}

/// Resolve the install-signal-handler policy against both host scopes.
///
/// The interpreter scope is probed before globals; the result is
/// `default AND overrides`, folding only over the overrides that were
/// present and boolean.
pub fn resolve_install_signal_handler(host: &dyn HostRuntime, default: bool) -> PolicyResolution {
    let interpreter_override =
        read_optional_bool(host, HostScope::Interpreter, INSTALL_SIGNAL_HANDLER_KEY);
    let globals_override = read_optional_bool(host, HostScope::Globals, INSTALL_SIGNAL_HANDLER_KEY);

    let install_signal_handler = [interpreter_override, globals_override]
        .iter()
        .flatten()
        .fold(default, |acc, value| acc && *value);

    PolicyResolution {
        install_signal_handler,
        interpreter_override,
        globals_override,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostValue, NullHost, ScriptedHost};

    #[test]
    fn test_absent_everywhere_keeps_the_default() {
        let host = ScriptedHost::new();
        let resolution = resolve_install_signal_handler(&host, true);

        assert!(resolution.install_signal_handler);
        assert_eq!(resolution.interpreter_override, None);
        assert_eq!(resolution.globals_override, None);
    }

    #[test]
    fn test_globals_false_disables() {
        let host =
            ScriptedHost::new().with_globals(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(false));
        let resolution = resolve_install_signal_handler(&host, true);

        assert!(!resolution.install_signal_handler);
        assert_eq!(resolution.globals_override, Some(false));
    }

    #[test]
    fn test_interpreter_false_disables() {
        let host = ScriptedHost::new()
            .with_interpreter(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(false))
            .with_globals(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(true));
        let resolution = resolve_install_signal_handler(&host, true);

        assert!(!resolution.install_signal_handler);
    }

    #[test]
    fn test_both_true_stays_enabled() {
        let host = ScriptedHost::new()
            .with_interpreter(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(true))
            .with_globals(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(true));
        let resolution = resolve_install_signal_handler(&host, true);

        assert!(resolution.install_signal_handler);
    }

    #[test]
    fn test_non_boolean_override_is_ignored() {
        let host =
            ScriptedHost::new().with_interpreter(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Int(0));
        let resolution = resolve_install_signal_handler(&host, true);

        assert!(resolution.install_signal_handler);
        assert_eq!(resolution.interpreter_override, None);
    }

    #[test]
    fn test_failing_scope_contributes_nothing() {
        let host = ScriptedHost::new()
            .with_failing_scope(HostScope::Interpreter)
            .with_globals(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(false));
        let resolution = resolve_install_signal_handler(&host, true);

        assert_eq!(resolution.interpreter_override, None);
        assert!(!resolution.install_signal_handler);
    }

    #[test]
    fn test_unreachable_host_keeps_the_default() {
        let resolution = resolve_install_signal_handler(&NullHost, true);
        assert!(resolution.install_signal_handler);
    }

    #[test]
    fn test_disabled_default_cannot_be_reenabled() {
        // Overrides only constrain further, AND semantics
        let host = ScriptedHost::new()
            .with_interpreter(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(true))
            .with_globals(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(true));
        let resolution = resolve_install_signal_handler(&host, false);

        assert!(!resolution.install_signal_handler);
    }

    #[test]
    fn read_optional_bool_narrows_string_values() {
        let host = ScriptedHost::new()
            .with_globals(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Str("false".into()));

        assert_eq!(
            read_optional_bool(&host, HostScope::Globals, INSTALL_SIGNAL_HANDLER_KEY),
            None
        );
    }
}
