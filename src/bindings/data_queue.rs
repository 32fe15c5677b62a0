// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Host-side queues carrying messages to and from a device.
pub struct DataQueueUnit;

impl BindingUnit for DataQueueUnit {
    fn id(&self) -> &'static str {
        "data_queue"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["datatypes"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("DataOutputQueue", &["name", "max_size", "blocking"])?;
        module.define_type("DataInputQueue", &["name", "max_size", "blocking"])?;
        Ok(())
    }
}
