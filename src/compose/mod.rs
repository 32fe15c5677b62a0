// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod catalog;
mod composer;
mod error;
mod scheduler;
mod unit;

mod integration_tests;

pub use catalog::UnitCatalog;
pub use composer::{Composer, ImportPhase, ImportReport};
pub use error::{RegistrationError, RegistrationResult};
pub use scheduler::{RegistrationCtx, Scheduler};
pub use unit::{BindingUnit, FnUnit};
