// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Message payload types that flow over device links.
pub struct DatatypesUnit;

impl BindingUnit for DatatypesUnit {
    fn id(&self) -> &'static str {
        "datatypes"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["common"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("Buffer", &["data", "timestamp", "sequence_num"])?;
        module.define_type("Frame", &["width", "height", "format", "timestamp"])?;
        module.define_type("Tensor", &["shape", "dtype", "data"])?;
        Ok(())
    }
}
