// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Pipeline node surface: processing stages and their IO endpoints.
pub struct NodeUnit;

impl BindingUnit for NodeUnit {
    fn id(&self) -> &'static str {
        "node"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["datatypes", "model"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        // Node IO signatures reference the datatype surface directly.
        ctx.ensure_registered(module, "datatypes")?;

        module.define_type("Node", &["id", "name", "inputs", "outputs"])?;
        module.define_type("NodeInput", &["name", "blocking", "queue_size"])?;
        module.define_type("NodeOutput", &["name", "datatype"])?;
        Ok(())
    }
}
