// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Transport link states and errors.
pub struct LinkUnit;

impl BindingUnit for LinkUnit {
    fn id(&self) -> &'static str {
        "link"
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
            "LinkState",
            &["UNBOOTED", "BOOTLOADER", "BOOTED", "FLASH_BOOTED"],
        )?;
        module.define_type("LinkError", &["code", "description"])?;
        Ok(())
    }
}
