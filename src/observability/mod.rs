// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging throughout the lume bindings. Message types follow a
//! struct-based pattern with `Display` trait implementation to:
//!
//! * Keep log wording out of the call sites that emit it
//! * Allow rewording or translating messages without touching code paths
//! * Attach the same structured fields to events and spans consistently
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::compose` - Unit catalog validation and registration events
//! * `messages::bootstrap` - Metadata publication, policy resolution, and
//!   SDK initialization events
//!
//! # Usage
//!
//! ```rust
//! use lume_bindings::observability::messages::compose::UnitRegistered;
//! use lume_bindings::observability::messages::StructuredLog;
//!
//! let msg = UnitRegistered { unit_id: "device" };
//! msg.log();
//! ```

pub mod messages;
