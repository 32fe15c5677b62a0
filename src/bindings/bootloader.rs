// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Bootloader flashing and query surface.
pub struct BootloaderUnit;

impl BindingUnit for BootloaderUnit {
    fn id(&self) -> &'static str {
        "bootloader"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["link", "version"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("Bootloader", &["version", "memory", "boot_type"])?;
        module.define_type("BootloaderConfig", &["usb_timeout_ms", "network_timeout_ms"])?;
        Ok(())
    }
}
