// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod bindings;   // builtin binding units
pub mod build_info; // build-time metadata constants
pub mod compose;    // catalog, scheduler, composer
pub mod config;     // compose configuration
pub mod errors;     // error handling
pub mod host;       // host runtime boundary + policy
pub mod module;     // module namespace being populated
pub mod observability;
pub mod sdk;        // native SDK boundary + init guard
