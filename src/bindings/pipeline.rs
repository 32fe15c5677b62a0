// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Pipeline construction surface.
///
/// Pipeline methods name `Device` in their signatures, so this unit
/// forward-declares the `Device` stub; the device unit fills it in later.
pub struct PipelineUnit;

impl BindingUnit for PipelineUnit {
    fn id(&self) -> &'static str {
        "pipeline"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["node", "asset_manager"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.declare_type("Device")?;

        module.define_type("Pipeline", &["nodes", "assets", "required_version"])?;
        module.define_type("PipelineSchema", &["nodes", "connections"])?;
        Ok(())
    }
}
