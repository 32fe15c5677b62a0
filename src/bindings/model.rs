// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Neural model artifacts loaded onto devices.
pub struct ModelUnit;

impl BindingUnit for ModelUnit {
    fn id(&self) -> &'static str {
        "model"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["common"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("ModelBlob", &["data", "version"])?;
        module.define_type("ModelDescriptor", &["path", "input_layers", "output_layers"])?;
        Ok(())
    }
}
