// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Binary assets shipped alongside a pipeline (model blobs, boot firmware).
pub struct AssetManagerUnit;

impl BindingUnit for AssetManagerUnit {
    fn id(&self) -> &'static str {
        "asset_manager"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["common"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("Asset", &["key", "data", "alignment"])?;
        module.define_type("AssetManager", &["assets"])?;
        Ok(())
    }
}
