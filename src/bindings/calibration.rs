// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Camera calibration data surface.
///
/// `CalibrationData.from_device` binds against the full `Device` surface.
/// That sits behind the whole pipeline stack, so instead of a declared
/// requirement this unit pulls the device unit in on demand.
pub struct CalibrationUnit;

impl BindingUnit for CalibrationUnit {
    fn id(&self) -> &'static str {
        "calibration"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["datatypes"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        ctx.ensure_registered(module, "device")?;

        module.define_type(
            "CalibrationData",
            &["intrinsics", "extrinsics", "distortion", "from_device"],
        )?;
        module.define_type("Extrinsics", &["rotation", "translation"])?;
        Ok(())
    }
}
