// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Connected-device surface.
///
/// Defines the `Device` type that the pipeline unit forward-declared,
/// closing the one intentional stub in the builtin roster.
pub struct DeviceUnit;

impl BindingUnit for DeviceUnit {
    fn id(&self) -> &'static str {
        "device"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["pipeline", "link"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        // Device IO hands out data queues.
        ctx.ensure_registered(module, "data_queue")?;

        module.define_type("Device", &["id", "version", "state", "output_queues"])?;
        module.define_type("DeviceInfo", &["name", "state", "platform"])?;
        Ok(())
    }
}
