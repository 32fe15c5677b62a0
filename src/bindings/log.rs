// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// On-device logging surface.
pub struct LogUnit;

impl BindingUnit for LogUnit {
    fn id(&self) -> &'static str {
        "log"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["common"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type(
            "LogLevel",
            &["TRACE", "DEBUG", "INFO", "WARN", "ERR", "CRITICAL", "OFF"],
        )?;
        module.define_type("LogMessage", &["level", "payload", "timestamp"])?;
        Ok(())
    }
}
