// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The module namespace being populated during composition.
//!
//! A `ModuleNamespace` models the host-runtime module object handed to the
//! binding layer at import time: a mutable bag of named attributes shared by
//! every binding unit. Plain attributes follow host assignment semantics
//! (last write wins). Type bindings go through a two-phase protocol so a unit
//! can reference a type that a later unit fills in:
//!
//! 1. `declare_type` publishes a stub binding (idempotent over stubs)
//! 2. `define_type` replaces the stub with the full binding
//!
//! A declared-but-never-defined type is how an incomplete composition becomes
//! observable: `undefined_types` lists every stub left behind.

use crate::errors::NamespaceError;
use crate::module::value::{AttrValue, TypeBinding};
use serde::Serialize;
use std::collections::BTreeMap;

/// The target namespace of a module import.
#[derive(Debug, Serialize)]
pub struct ModuleNamespace {
    name: String,
    // BTreeMap keeps diagnostic dumps deterministic
    attrs: BTreeMap<String, AttrValue>,
}

impl ModuleNamespace {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: BTreeMap::new(),
        }
    }

    /// The module name the host runtime imports this namespace under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Publish an attribute, overwriting any previous value.
    pub fn set_attr(&mut self, key: &str, value: AttrValue) {
        self.attrs.insert(key.to_string(), value);
    }

    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    pub fn attr_count(&self) -> usize {
        self.attrs.len()
    }

    /// Forward-declare a type as a stub binding.
    ///
    /// Re-declaring an existing stub is a no-op. Declaring over a fully
    /// defined type is an error, matching the host runtime's rejection of
    /// duplicate type registration.
    pub fn declare_type(&mut self, name: &str) -> Result<(), NamespaceError> {
        match self.attrs.get(name) {
            Some(AttrValue::Type(binding)) if binding.defined => {
                Err(NamespaceError::TypeAlreadyDefined {
                    name: name.to_string(),
                })
            }
            Some(AttrValue::Type(_)) => Ok(()),
            _ => {
                self.attrs
                    .insert(name.to_string(), AttrValue::Type(TypeBinding::stub(name)));
                Ok(())
            }
        }
    }

    /// Define a type binding, replacing its stub if one was declared.
    ///
    /// Defining an undeclared type implicitly declares it first. Defining an
    /// already defined type is an error.
    pub fn define_type(&mut self, name: &str, members: &[&str]) -> Result<(), NamespaceError> {
        if let Some(AttrValue::Type(binding)) = self.attrs.get(name) {
            if binding.defined {
                return Err(NamespaceError::TypeAlreadyDefined {
                    name: name.to_string(),
                });
            }
        }
        self.attrs.insert(
            name.to_string(),
            AttrValue::Type(TypeBinding::defined(name, members)),
        );
        Ok(())
    }

    pub fn has_type(&self, name: &str) -> bool {
        matches!(self.attrs.get(name), Some(AttrValue::Type(_)))
    }

    pub fn type_binding(&self, name: &str) -> Option<&TypeBinding> {
        self.attrs.get(name).and_then(AttrValue::as_type)
    }

    /// Names of types that were declared but never defined.
    ///
    /// Non-empty output means some unit's surface is incomplete.
    pub fn undefined_types(&self) -> Vec<String> {
        self.attrs
            .values()
            .filter_map(AttrValue::as_type)
            .filter(|binding| binding.is_stub())
            .map(|binding| binding.name.clone())
            .collect()
    }
}
