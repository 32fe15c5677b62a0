use crate::compose::{BindingUnit, RegistrationCtx, RegistrationResult};
use crate::module::ModuleNamespace;

/// Firmware version triple.
pub struct VersionUnit;

impl BindingUnit for VersionUnit {
    fn id(&self) -> &'static str {
        "version"
    }

    fn requires(&self) -> &'static [&'static str] {
        &["common"]
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        _ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        module.define_type("Version", &["major", "minor", "patch"])?;
        Ok(())
    }
}
