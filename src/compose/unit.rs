use crate::compose::error::RegistrationResult;
use crate::compose::scheduler::RegistrationCtx;
use crate::module::ModuleNamespace;

/// One registration unit of the binding layer.
///
/// A unit covers a single SDK subsystem and knows how to publish that
/// subsystem's surface onto the module namespace. Units declare the other
/// units they need registered first via `requires`; a unit may additionally
/// pull in an undeclared requirement mid-registration through
/// [`RegistrationCtx::ensure_registered`].
pub trait BindingUnit: Send + Sync {
    /// Stable identifier used in requirements, scheduling, and diagnostics.
    fn id(&self) -> &'static str;

    /// IDs of units that must be registered before this one runs.
    fn requires(&self) -> &'static [&'static str] {
        &[]
    }

    /// Populate the module namespace with this subsystem's surface.
    fn register(
        &self,
        module: &mut ModuleNamespace,
        ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()>;
}

type RegisterFn =
    dyn Fn(&mut ModuleNamespace, &mut RegistrationCtx<'_>) -> RegistrationResult<()> + Send + Sync;

/// A closure-backed unit for tests and ad-hoc composition.
pub struct FnUnit {
    id: &'static str,
    requires: &'static [&'static str],
    register_fn: Box<RegisterFn>,
}

impl FnUnit {
    pub fn new<F>(id: &'static str, requires: &'static [&'static str], register_fn: F) -> Self
    where
        F: Fn(&mut ModuleNamespace, &mut RegistrationCtx<'_>) -> RegistrationResult<()>
            + Send
            + Sync
            + 'static,
    {
        Self {
            id,
            requires,
            register_fn: Box::new(register_fn),
        }
    }
}

impl BindingUnit for FnUnit {
    fn id(&self) -> &'static str {
        self.id
    }

    fn requires(&self) -> &'static [&'static str] {
        self.requires
    }

    fn register(
        &self,
        module: &mut ModuleNamespace,
        ctx: &mut RegistrationCtx<'_>,
    ) -> RegistrationResult<()> {
        (self.register_fn)(module, ctx)
    }
}
