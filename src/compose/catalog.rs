//! Unit catalog collection and structural validation.
//!
//! The catalog holds every binding unit that should end up on the module,
//! in the order the composer would prefer to run them. Before scheduling,
//! the catalog is validated so that composition fails loudly at import time
//! instead of leaving a partially initialized module behind.
//!
//! # Validation Pipeline
//!
//! Validation runs three checks over the requirement graph:
//!
//! 1. **Uniqueness**: every unit ID appears exactly once
//! 2. **References**: every declared requirement names a catalogued unit
//! 3. **Cycles**: no chain of requirements loops back on itself
//!
//! Cycle detection only runs once the first two checks pass, since it
//! assumes a structurally sound graph.
//!
//! # Algorithms
//!
//! ## Cycle Detection
//! **DFS with an explicit recursion stack**, O(V + E) over units and
//! requirements. The active path is tracked so the error carries the exact
//! cycle instead of just announcing that one exists.
//!
//! ## Reference Checks
//! A **HashSet of known unit IDs**, built once and probed per requirement,
//! O(V + E) overall.
//!
//! # Example
//!
//! ```rust
//! use lume_bindings::compose::{FnUnit, UnitCatalog};
//! use std::sync::Arc;
//!
//! let mut catalog = UnitCatalog::new();
//! catalog.add(Arc::new(FnUnit::new("common", &[], |_, _| Ok(()))));
//! catalog.add(Arc::new(FnUnit::new("device", &["common"], |_, _| Ok(()))));
//!
//! match catalog.validate() {
//!     Ok(()) => println!("catalog is valid"),
//!     Err(errors) => {
//!         for error in errors {
//!             eprintln!("Validation error: {}", error);
//!         }
//!     }
//! }
//! ```

use crate::compose::unit::BindingUnit;
use crate::errors::CompositionError;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Insertion-ordered collection of binding units awaiting registration.
///
/// Insertion order is preserved and used by the scheduler as the
/// deterministic tie-break between units whose requirements are satisfied
/// at the same time.
pub struct UnitCatalog {
    units: Vec<Arc<dyn BindingUnit>>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Append a unit to the catalog.
    pub fn add(&mut self, unit: Arc<dyn BindingUnit>) {
        self.units.push(unit);
    }

    pub fn extend<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = Arc<dyn BindingUnit>>,
    {
        self.units.extend(units);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.units.iter().any(|unit| unit.id() == id)
    }

    /// Unit IDs in insertion order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.units.iter().map(|unit| unit.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn BindingUnit>> {
        self.units.iter()
    }

    /// Validates the catalog's requirement graph for structural integrity.
    ///
    /// Errors are accumulated so callers see every problem at once rather
    /// than fixing them one by one. Cycle detection is skipped while
    /// uniqueness or reference errors are present, since it requires a
    /// structurally valid graph.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Catalog is valid and ready for scheduling
    /// * `Err(Vec<CompositionError>)` - List of all validation errors found
    pub fn validate(&self) -> Result<(), Vec<CompositionError>> {
        let mut errors = Vec::new();

        if let Err(duplicate_errors) = self.validate_unique_unit_ids() {
            errors.extend(duplicate_errors);
        }

        if let Err(unresolved_errors) = self.validate_requirement_references() {
            errors.extend(unresolved_errors);
        }

        // Cycle detection needs a valid graph
        if errors.is_empty() {
            if let Err(cycle_errors) = self.validate_acyclic_graph() {
                errors.extend(cycle_errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_unique_unit_ids(&self) -> Result<(), Vec<CompositionError>> {
        let mut seen_ids = HashSet::new();
        let mut errors = Vec::new();

        for unit in &self.units {
            if !seen_ids.insert(unit.id()) {
                errors.push(CompositionError::DuplicateUnitId {
                    unit_id: unit.id().to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_requirement_references(&self) -> Result<(), Vec<CompositionError>> {
        let unit_ids: HashSet<&str> = self.units.iter().map(|unit| unit.id()).collect();
        let mut errors = Vec::new();

        for unit in &self.units {
            for requirement in unit.requires() {
                if !unit_ids.contains(requirement) {
                    errors.push(CompositionError::UnresolvedRequirement {
                        unit_id: unit.id().to_string(),
                        missing_requirement: requirement.to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates that the requirement graph is acyclic using DFS-based cycle
    /// detection with recursion stack tracking, returning the exact cycle
    /// path when one is found.
    fn validate_acyclic_graph(&self) -> Result<(), Vec<CompositionError>> {
        // Adjacency list with edges requirement -> dependent
        let mut graph: HashMap<&'static str, Vec<&'static str>> = HashMap::new();

        for unit in &self.units {
            graph.entry(unit.id()).or_default();
        }

        for unit in &self.units {
            for requirement in unit.requires() {
                graph.entry(requirement).or_default().push(unit.id());
            }
        }

        let mut visited = HashSet::new();
        let mut rec_stack = HashSet::new();
        let mut path = Vec::new();

        for unit in &self.units {
            if !visited.contains(unit.id()) {
                if let Some(cycle) =
                    dfs_cycle_detection(unit.id(), &graph, &mut visited, &mut rec_stack, &mut path)
                {
                    return Err(vec![CompositionError::DependencyCycle { cycle }]);
                }
            }
        }

        Ok(())
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first walk over the requirement graph that reports the first back
/// edge found as a cycle.
///
/// The current recursion path is tracked so the returned cycle is the exact
/// chain of unit IDs, closed by repeating the entry node.
fn dfs_cycle_detection(
    node: &'static str,
    graph: &HashMap<&'static str, Vec<&'static str>>,
    visited: &mut HashSet<&'static str>,
    rec_stack: &mut HashSet<&'static str>,
    path: &mut Vec<&'static str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = graph.get(node) {
        for &neighbor in neighbors {
            if !visited.contains(neighbor) {
                if let Some(cycle) = dfs_cycle_detection(neighbor, graph, visited, rec_stack, path)
                {
                    return Some(cycle);
                }
            } else if rec_stack.contains(neighbor) {
                // Back edge found - extract the cycle path
                let cycle_start = path.iter().position(|id| *id == neighbor).unwrap_or(0);
                let mut cycle: Vec<String> =
                    path[cycle_start..].iter().map(|id| id.to_string()).collect();
                cycle.push(neighbor.to_string());
                return Some(cycle);
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}
