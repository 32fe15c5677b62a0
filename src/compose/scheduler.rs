// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::compose::catalog::UnitCatalog;
use crate::compose::error::{RegistrationError, RegistrationResult};
use crate::compose::unit::BindingUnit;
use crate::errors::CompositionError;
use crate::module::ModuleNamespace;
use crate::observability::messages::compose::{
    CompositionCompleted, CompositionStarted, DependencyCycleDetected, DuplicateUnitIdDetected,
    OnDemandRegistration, UnitRegistered, UnitRegistrationFailed, UnresolvedRequirementDetected,
};
use crate::observability::messages::StructuredLog;

/// Registration state of a single unit during a scheduler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitState {
    Pending,
    InProgress,
    Registered,
}

/// Dependency-ordered registration driver for a unit catalog.
///
/// The scheduler validates the catalog, computes a topological order over
/// the declared requirements, and drives every unit through registration
/// exactly once. Consuming the scheduler in [`Scheduler::run`] makes a
/// second pass impossible by construction.
///
/// ## Ordering
///
/// Uses Kahn's algorithm over the requirement graph: units with no
/// outstanding requirements are seeded in catalog insertion order and
/// processed FIFO, so the resulting order is deterministic for a given
/// catalog.
///
/// ## Registration States
///
/// Each unit moves through `Pending -> InProgress -> Registered`. The set of
/// pending units only shrinks, and no unit's registration routine runs
/// twice.
///
/// ## On-Demand Registration
///
/// A unit may pull in another unit mid-registration through
/// [`RegistrationCtx::ensure_registered`], covering requirements that only
/// surface while a unit is wiring up its types. Ensuring an already
/// registered unit is a no-op; ensuring a unit that is itself in progress is
/// a genuine mutual-requirement cycle and fails loudly with the cycle path.
pub struct Scheduler {
    catalog: UnitCatalog,
}

impl Scheduler {
    pub fn new(catalog: UnitCatalog) -> Self {
        Self { catalog }
    }

    /// Register every catalogued unit onto the module in requirement order.
    ///
    /// Validation failures and unit registration failures abort the run;
    /// the module namespace keeps whatever was registered up to that point,
    /// which the caller surfaces as an import failure.
    pub fn run(self, module: &mut ModuleNamespace) -> RegistrationResult<()> {
        if let Err(errors) = self.catalog.validate() {
            for error in &errors {
                match error {
                    CompositionError::DependencyCycle { cycle } => {
                        DependencyCycleDetected { cycle }.log();
                    }
                    CompositionError::UnresolvedRequirement {
                        unit_id,
                        missing_requirement,
                    } => {
                        UnresolvedRequirementDetected {
                            unit_id: unit_id.as_str(),
                            missing_requirement: missing_requirement.as_str(),
                        }
                        .log();
                    }
                    CompositionError::DuplicateUnitId { unit_id } => {
                        DuplicateUnitIdDetected {
                            unit_id: unit_id.as_str(),
                        }
                        .log();
                    }
                }
            }
            let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(RegistrationError::CatalogInvalid {
                details: details.join("\n"),
            });
        }

        CompositionStarted {
            unit_count: self.catalog.len(),
        }
        .log();

        let order = self.topological_order()?;

        let mut units: HashMap<&'static str, Arc<dyn BindingUnit>> = HashMap::new();
        let mut states: HashMap<&'static str, UnitState> = HashMap::new();
        for unit in self.catalog.iter() {
            units.insert(unit.id(), Arc::clone(unit));
            states.insert(unit.id(), UnitState::Pending);
        }

        let mut in_progress = Vec::new();
        let mut ctx = RegistrationCtx {
            units: &units,
            states: &mut states,
            in_progress: &mut in_progress,
        };

        for unit_id in order {
            ctx.ensure_registered(module, unit_id)?;
        }

        CompositionCompleted {
            unit_count: self.catalog.len(),
        }
        .log();

        Ok(())
    }

    /// Compute a flat topological order using Kahn's algorithm.
    ///
    /// Requirement-free units are seeded in catalog insertion order; each
    /// processed unit releases its dependents as their in-degree reaches
    /// zero. If not every unit gets ordered the graph holds a cycle, which
    /// validation should already have rejected.
    fn topological_order(&self) -> RegistrationResult<Vec<&'static str>> {
        let mut in_degree: HashMap<&'static str, usize> = HashMap::new();
        let mut dependents: HashMap<&'static str, Vec<&'static str>> = HashMap::new();

        for unit in self.catalog.iter() {
            in_degree.entry(unit.id()).or_insert(0);
        }
        for unit in self.catalog.iter() {
            for &requirement in unit.requires() {
                dependents.entry(requirement).or_default().push(unit.id());
                *in_degree.entry(unit.id()).or_insert(0) += 1;
            }
        }

        let mut queue: VecDeque<&'static str> = self
            .catalog
            .ids()
            .into_iter()
            .filter(|id| in_degree.get(id).copied().unwrap_or(0) == 0)
            .collect();
        let mut processed: HashSet<&'static str> = queue.iter().copied().collect();
        let mut order = Vec::with_capacity(self.catalog.len());

        while let Some(unit_id) = queue.pop_front() {
            order.push(unit_id);

            if let Some(unit_dependents) = dependents.get(unit_id) {
                for &dependent in unit_dependents {
                    if processed.contains(dependent) {
                        continue;
                    }
                    let degree = in_degree.get_mut(dependent).ok_or_else(|| {
                        RegistrationError::CatalogInvalid {
                            details: format!(
                                "internal consistency error: unit '{}' missing from in-degree map during topological ordering",
                                dependent
                            ),
                        }
                    })?;
                    *degree -= 1;

                    if *degree == 0 {
                        queue.push_back(dependent);
                        processed.insert(dependent);
                    }
                }
            }
        }

        if order.len() != self.catalog.len() {
            return Err(RegistrationError::CatalogInvalid {
                details: "requirement graph contains cycles (should have been caught during catalog validation)".to_string(),
            });
        }

        Ok(order)
    }
}

/// Registration context handed to every unit while it runs.
///
/// Carries the unit table and per-unit registration state so a unit can
/// request other units on demand without access to the scheduler itself.
pub struct RegistrationCtx<'a> {
    units: &'a HashMap<&'static str, Arc<dyn BindingUnit>>,
    states: &'a mut HashMap<&'static str, UnitState>,
    in_progress: &'a mut Vec<&'static str>,
}

impl RegistrationCtx<'_> {
    /// Make sure the named unit is registered before returning.
    ///
    /// * Already registered: no-op, any number of repeat calls are safe.
    /// * Pending: its declared requirements are ensured first, then the
    ///   unit registers on the spot.
    /// * In progress: the request closes a mutual-requirement cycle and
    ///   fails with the exact cycle path.
    /// * Unknown: fails with an unresolved-requirement error naming the
    ///   requesting unit.
    pub fn ensure_registered(
        &mut self,
        module: &mut ModuleNamespace,
        unit_id: &str,
    ) -> RegistrationResult<()> {
        let (canonical_id, unit) = match self.units.get_key_value(unit_id) {
            Some((id, unit)) => (*id, Arc::clone(unit)),
            None => {
                let requested_by = self.in_progress.last().copied().unwrap_or("scheduler");
                return Err(CompositionError::UnresolvedRequirement {
                    unit_id: requested_by.to_string(),
                    missing_requirement: unit_id.to_string(),
                }
                .into());
            }
        };

        match self.states.get(canonical_id).copied() {
            Some(UnitState::Registered) => return Ok(()),
            Some(UnitState::InProgress) => {
                let cycle_start = self
                    .in_progress
                    .iter()
                    .position(|id| *id == canonical_id)
                    .unwrap_or(0);
                let mut cycle: Vec<String> = self.in_progress[cycle_start..]
                    .iter()
                    .map(|id| id.to_string())
                    .collect();
                cycle.push(canonical_id.to_string());
                return Err(CompositionError::DependencyCycle { cycle }.into());
            }
            _ => {}
        }

        if let Some(&requested_by) = self.in_progress.last() {
            OnDemandRegistration {
                unit_id: canonical_id,
                requested_by,
            }
            .log();
        }

        self.states.insert(canonical_id, UnitState::InProgress);
        self.in_progress.push(canonical_id);

        for &requirement in unit.requires() {
            self.ensure_registered(module, requirement)?;
        }

        let result = unit.register(module, self);
        self.in_progress.pop();

        match result {
            Ok(()) => {
                self.states.insert(canonical_id, UnitState::Registered);
                UnitRegistered {
                    unit_id: canonical_id,
                }
                .log();
                Ok(())
            }
            Err(error) => {
                UnitRegistrationFailed {
                    unit_id: canonical_id,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    /// Whether the named unit has completed registration.
    pub fn is_registered(&self, unit_id: &str) -> bool {
        matches!(self.states.get(unit_id), Some(UnitState::Registered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::unit::FnUnit;
    use std::sync::Mutex;

    fn recording_unit(
        id: &'static str,
        requires: &'static [&'static str],
        log: Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn BindingUnit> {
        Arc::new(FnUnit::new(id, requires, move |_, _| {
            log.lock().unwrap().push(id.to_string());
            Ok(())
        }))
    }

    #[test]
    fn test_single_unit() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        catalog.add(recording_unit("common", &[], log.clone()));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["common"]);
    }

    #[test]
    fn test_linear_chain_runs_in_requirement_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        // Deliberately inserted in reverse order
        catalog.add(recording_unit("c", &["b"], log.clone()));
        catalog.add(recording_unit("b", &["a"], log.clone()));
        catalog.add(recording_unit("a", &[], log.clone()));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_diamond_requirements() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        catalog.add(recording_unit("a", &[], log.clone()));
        catalog.add(recording_unit("b", &["a"], log.clone()));
        catalog.add(recording_unit("c", &["a"], log.clone()));
        catalog.add(recording_unit("d", &["b", "c"], log.clone()));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        let order = log.lock().unwrap();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], "a");
        assert_eq!(order[3], "d");
    }

    #[test]
    fn test_independent_units_follow_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        catalog.add(recording_unit("c", &[], log.clone()));
        catalog.add(recording_unit("a", &[], log.clone()));
        catalog.add(recording_unit("b", &[], log.clone()));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_on_demand_registration_pulls_pending_unit() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();

        let puller_log = log.clone();
        catalog.add(Arc::new(FnUnit::new("puller", &[], move |module, ctx| {
            // Undeclared requirement resolved mid-registration
            ctx.ensure_registered(module, "pulled")?;
            puller_log.lock().unwrap().push("puller".to_string());
            Ok(())
        })));
        catalog.add(recording_unit("pulled", &[], log.clone()));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["pulled", "puller"]);
    }

    #[test]
    fn test_repeated_ensure_is_idempotent() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        catalog.add(recording_unit("base", &[], log.clone()));

        let late_log = log.clone();
        catalog.add(Arc::new(FnUnit::new("late", &["base"], move |module, ctx| {
            // "base" already registered through the declared requirement
            ctx.ensure_registered(module, "base")?;
            ctx.ensure_registered(module, "base")?;
            assert!(ctx.is_registered("base"));
            late_log.lock().unwrap().push("late".to_string());
            Ok(())
        })));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["base", "late"]);
    }

    #[test]
    fn test_self_ensure_is_a_cycle() {
        let mut catalog = UnitCatalog::new();
        catalog.add(Arc::new(FnUnit::new("selfish", &[], |module, ctx| {
            ctx.ensure_registered(module, "selfish")
        })));

        let mut module = ModuleNamespace::new("lume");
        let error = Scheduler::new(catalog).run(&mut module).unwrap_err();

        match error {
            RegistrationError::Composition(CompositionError::DependencyCycle { cycle }) => {
                assert_eq!(cycle, vec!["selfish", "selfish"]);
            }
            other => panic!("expected DependencyCycle, got {:?}", other),
        }
    }

    #[test]
    fn test_ensure_after_registration_is_noop() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        catalog.add(recording_unit("first", &[], log.clone()));
        catalog.add(recording_unit("second", &[], log.clone()));

        let last_log = log.clone();
        catalog.add(Arc::new(FnUnit::new("last", &[], move |module, ctx| {
            // Catalog is otherwise drained by the time this runs
            ctx.ensure_registered(module, "first")?;
            ctx.ensure_registered(module, "second")?;
            ctx.ensure_registered(module, "first")?;
            last_log.lock().unwrap().push("last".to_string());
            Ok(())
        })));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "last"]);
    }

    #[test]
    fn test_mutual_ensure_cycle_fails_loudly() {
        let mut catalog = UnitCatalog::new();
        catalog.add(Arc::new(FnUnit::new("a", &[], |module, ctx| {
            ctx.ensure_registered(module, "b")
        })));
        catalog.add(Arc::new(FnUnit::new("b", &[], |module, ctx| {
            ctx.ensure_registered(module, "a")
        })));

        let mut module = ModuleNamespace::new("lume");
        let error = Scheduler::new(catalog).run(&mut module).unwrap_err();

        match error {
            RegistrationError::Composition(CompositionError::DependencyCycle { cycle }) => {
                assert_eq!(cycle, vec!["a", "b", "a"]);
            }
            other => panic!("expected DependencyCycle, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_ensure_target_names_the_requester() {
        let mut catalog = UnitCatalog::new();
        catalog.add(Arc::new(FnUnit::new("needy", &[], |module, ctx| {
            ctx.ensure_registered(module, "ghost")
        })));

        let mut module = ModuleNamespace::new("lume");
        let error = Scheduler::new(catalog).run(&mut module).unwrap_err();

        match error {
            RegistrationError::Composition(CompositionError::UnresolvedRequirement {
                unit_id,
                missing_requirement,
            }) => {
                assert_eq!(unit_id, "needy");
                assert_eq!(missing_requirement, "ghost");
            }
            other => panic!("expected UnresolvedRequirement, got {:?}", other),
        }
    }

    #[test]
    fn test_unit_failure_propagates() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        catalog.add(recording_unit("ok", &[], log.clone()));
        catalog.add(Arc::new(FnUnit::new("broken", &["ok"], |_, _| {
            Err(RegistrationError::UnitFailed {
                unit_id: "broken".to_string(),
                reason: "simulated link failure".to_string(),
            })
        })));
        catalog.add(recording_unit("after", &["broken"], log.clone()));

        let mut module = ModuleNamespace::new("lume");
        let error = Scheduler::new(catalog).run(&mut module).unwrap_err();

        assert!(matches!(error, RegistrationError::UnitFailed { .. }));
        // Units past the failure never ran
        assert_eq!(*log.lock().unwrap(), vec!["ok"]);
    }

    #[test]
    fn test_declared_cycle_rejected_before_any_unit_runs() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut catalog = UnitCatalog::new();
        catalog.add(recording_unit("a", &["b"], log.clone()));
        catalog.add(recording_unit("b", &["a"], log.clone()));

        let mut module = ModuleNamespace::new("lume");
        let error = Scheduler::new(catalog).run(&mut module).unwrap_err();

        match error {
            RegistrationError::CatalogInvalid { details } => {
                assert!(details.contains("Dependency cycle detected"));
            }
            other => panic!("expected CatalogInvalid, got {:?}", other),
        }
        assert!(log.lock().unwrap().is_empty());
    }
}
