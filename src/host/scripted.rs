// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::host::{HostAttrError, HostRuntime, HostScope, HostValue};
use std::collections::{HashMap, HashSet};

/// A scripted host implementation for testing and placeholder purposes.
///
/// Attributes are fed in per scope; whole scopes can be marked as failing to
/// exercise the never-throws probing paths.
pub struct ScriptedHost {
    interpreter: HashMap<String, HostValue>,
    globals: HashMap<String, HostValue>,
    failing_scopes: HashSet<HostScope>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self {
            interpreter: HashMap::new(),
            globals: HashMap::new(),
            failing_scopes: HashSet::new(),
        }
    }

    pub fn with_interpreter(mut self, key: &str, value: HostValue) -> Self {
        self.interpreter.insert(key.to_string(), value);
        self
    }

    pub fn with_globals(mut self, key: &str, value: HostValue) -> Self {
        self.globals.insert(key.to_string(), value);
        self
    }

    /// Every read from this scope fails with a lookup error.
    pub fn with_failing_scope(mut self, scope: HostScope) -> Self {
        self.failing_scopes.insert(scope);
        self
    }
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRuntime for ScriptedHost {
    fn read_attr(&self, scope: HostScope, key: &str) -> Result<Option<HostValue>, HostAttrError> {
        if self.failing_scopes.contains(&scope) {
            return Err(HostAttrError::LookupFailed {
                key: key.to_string(),
                reason: "scripted lookup failure".to_string(),
            });
        }

        let attrs = match scope {
            HostScope::Interpreter => &self.interpreter,
            HostScope::Globals => &self.globals,
        };
        Ok(attrs.get(key).cloned())
    }
}
