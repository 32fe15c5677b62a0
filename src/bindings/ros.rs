// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Optional ROS bridge glue, excluded from the roster unless enabled in
/// the compose configuration.
pub struct RosUnit;

impl BindingUnit for RosUnit {
    fn id(&self) -> &'static str {
        "ros"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["device", "pipeline"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("RosBridge", &["topic_prefix", "device"])?;
        module.define_type("RosStreamConfig", &["topic", "qos", "frame_id"])?;
        Ok(())
    }
}
