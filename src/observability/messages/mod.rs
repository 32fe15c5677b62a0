// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Every diagnostic or operational message the lume bindings emit lives
//! here as a struct. Each one implements `Display` for the human-readable
//! line and [`StructuredLog`] for emission with structured fields attached.
//!
//! # Organization
//!
//! Messages are organized by subsystem:
//!
//! * `compose` - Unit catalog validation and registration events
//! * `bootstrap` - Metadata publication, policy resolution, and SDK
//!   initialization events
//!
//! # Usage Pattern
//!
//! ```rust
//! use lume_bindings::observability::messages::compose::CompositionStarted;
//! use lume_bindings::observability::messages::StructuredLog;
//!
//! let msg = CompositionStarted { unit_count: 14 };
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod bootstrap;
pub mod compose;

/// Structured emission for message types.
///
/// `log` emits the message as a tracing event at the level documented on the
/// message type, with its fields attached as structured fields. `span`
/// creates a span carrying the same fields for wrapping related work.
pub trait StructuredLog: Display {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
