// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Foundation surface every other subsystem builds on.

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Geometry primitives and board-level enums.
pub struct CommonUnit;

impl BindingUnit for CommonUnit {
    fn id(&self) -> &'static str {
        "common"
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("Point2f", &["x", "y"])?;
        module.define_type("Size2f", &["width", "height"])?;
        module.define_type("Rect", &["x", "y", "width", "height"])?;
        module.define_type("CameraSocket", &["AUTO", "CENTER", "LEFT", "RIGHT"])?;
        Ok(())
    }
}
