//! The problem registry: variables, constraints and the index from a variable to the constraints
//! whose scope contains it.
use std::fmt::Display;

use log::warn;

use super::constraint::Constraint;
use super::domain::Domain;
use super::relation::PredicateRelation;
use super::relation::Relation;
use super::relation::TableRelation;
use super::variables::ConstraintId;
use super::variables::VariableId;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::basic_types::ModelError;
use crate::basic_types::Pruning;
use crate::roster_assert_simple;

#[derive(Debug)]
struct Variable {
    name: String,
    domain: Domain,
}

/// A constraint satisfaction problem.
///
/// The structure (variables, their original domains and the constraints) is fixed once search
/// starts. Only the current domains and the assignments change during search: propagators prune
/// values and the search assigns variables and restores the prunings it was given.
#[derive(Debug, Default)]
pub struct Csp {
    name: String,
    variables: Vec<Variable>,
    variables_by_name: HashMap<String, VariableId>,
    constraints: Vec<Constraint>,
    constraints_containing: Vec<Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Display) -> Self {
        Csp {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a variable with the given original domain. The order of `values` is the order in
    /// which the current domain is iterated.
    pub fn add_variable(
        &mut self,
        name: impl Display,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<VariableId, ModelError> {
        let name = name.to_string();
        let values: Vec<i32> = values.into_iter().collect();

        if values.is_empty() {
            return Err(ModelError::EmptyDomain(name));
        }

        let mut seen = HashSet::default();
        if let Some(&value) = values.iter().find(|&&value| !seen.insert(value)) {
            return Err(ModelError::DuplicateDomainValue {
                variable: name,
                value,
            });
        }

        let id = VariableId::new(self.variables.len() as u32);
        let _ = self.variables_by_name.insert(name.clone(), id);
        self.variables.push(Variable {
            name,
            domain: Domain::new(values),
        });
        self.constraints_containing.push(vec![]);

        Ok(id)
    }

    /// Add a constraint backed by an explicit list of satisfying tuples. Every component of a
    /// tuple must come from the original domain of the variable at that position.
    pub fn add_table_constraint(
        &mut self,
        name: impl Display,
        scope: impl Into<Vec<VariableId>>,
        tuples: impl IntoIterator<Item = Vec<i32>>,
    ) -> Result<ConstraintId, ModelError> {
        let name = name.to_string();
        let scope = scope.into();
        self.validate_scope(&name, &scope)?;

        let tuples: Vec<Vec<i32>> = tuples.into_iter().collect();
        for tuple in &tuples {
            if tuple.len() != scope.len() {
                return Err(ModelError::TupleArityMismatch {
                    constraint: name,
                    arity: scope.len(),
                    length: tuple.len(),
                });
            }

            for (&variable, &value) in scope.iter().zip(tuple) {
                if !self.domain(variable).in_original_domain(value) {
                    return Err(ModelError::ValueOutsideDomain {
                        constraint: name,
                        variable: self.variable_name(variable).to_owned(),
                        value,
                    });
                }
            }
        }

        let relation = TableRelation::new(scope.len(), tuples)?;
        if relation.is_empty() {
            warn!("Constraint '{name}' has no satisfying tuples, the problem is unsatisfiable");
        }

        Ok(self.push_constraint(name, scope, Box::new(relation)))
    }

    /// Add a constraint whose satisfying tuples are those accepted by `predicate`.
    pub fn add_predicate_constraint(
        &mut self,
        name: impl Display,
        scope: impl Into<Vec<VariableId>>,
        predicate: impl Fn(&[i32]) -> bool + 'static,
    ) -> Result<ConstraintId, ModelError> {
        self.add_constraint(name, scope, PredicateRelation::new(predicate))
    }

    /// Add a constraint backed by an arbitrary [`Relation`]. If the relation has a fixed arity it
    /// has to match the length of `scope`.
    pub fn add_constraint(
        &mut self,
        name: impl Display,
        scope: impl Into<Vec<VariableId>>,
        relation: impl Relation + 'static,
    ) -> Result<ConstraintId, ModelError> {
        let name = name.to_string();
        let scope = scope.into();
        self.validate_scope(&name, &scope)?;

        if let Some(arity) = relation.arity() {
            if arity != scope.len() {
                return Err(ModelError::RelationArityMismatch {
                    constraint: name,
                    arity,
                    scope: scope.len(),
                });
            }
        }

        Ok(self.push_constraint(name, scope, Box::new(relation)))
    }

    fn validate_scope(&self, name: &str, scope: &[VariableId]) -> Result<(), ModelError> {
        if scope.is_empty() {
            return Err(ModelError::EmptyScope(name.to_owned()));
        }

        let mut seen = HashSet::default();
        for &variable in scope {
            if variable.index() >= self.variables.len() {
                return Err(ModelError::UnknownVariable {
                    constraint: name.to_owned(),
                    index: variable.index(),
                });
            }

            if !seen.insert(variable) {
                return Err(ModelError::DuplicateScopeVariable {
                    constraint: name.to_owned(),
                    variable: self.variable_name(variable).to_owned(),
                });
            }
        }

        Ok(())
    }

    fn push_constraint(
        &mut self,
        name: String,
        scope: Vec<VariableId>,
        relation: Box<dyn Relation>,
    ) -> ConstraintId {
        let id = ConstraintId::new(self.constraints.len() as u32);
        for &variable in &scope {
            self.constraints_containing[variable.index()].push(id);
        }
        self.constraints
            .push(Constraint::new(name, scope.into_boxed_slice(), relation));

        id
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn all_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.variables.len()).map(|index| VariableId::new(index as u32))
    }

    pub fn all_constraints(&self) -> impl Iterator<Item = ConstraintId> + '_ {
        (0..self.constraints.len()).map(|index| ConstraintId::new(index as u32))
    }

    /// The constraints whose scope contains `variable`, in the order they were added.
    pub fn constraints_containing(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_containing[variable.index()]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint.index()]
    }

    pub fn variable_name(&self, variable: VariableId) -> &str {
        &self.variables[variable.index()].name
    }

    pub fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variables_by_name.get(name).copied()
    }

    pub fn domain(&self, variable: VariableId) -> &Domain {
        &self.variables[variable.index()].domain
    }

    fn domain_mut(&mut self, variable: VariableId) -> &mut Domain {
        &mut self.variables[variable.index()].domain
    }

    /// The current domain of `variable`, in the order of its original domain.
    pub fn current_domain(&self, variable: VariableId) -> impl Iterator<Item = i32> + '_ {
        self.domain(variable).iter()
    }

    pub fn current_domain_size(&self, variable: VariableId) -> usize {
        self.domain(variable).size()
    }

    pub fn assigned_value(&self, variable: VariableId) -> Option<i32> {
        self.domain(variable).assigned_value()
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.domain(variable).is_assigned()
    }

    /// Remove `value` from the current domain of `variable`. The value has to be present.
    pub fn prune_value(&mut self, variable: VariableId, value: i32) {
        self.domain_mut(variable).prune(value)
    }

    /// Re-insert a value which was previously reported as pruned.
    pub fn restore_value(&mut self, variable: VariableId, value: i32) {
        self.domain_mut(variable).restore(value)
    }

    /// Undo a list of prunings, most recent first.
    pub fn restore_prunings(&mut self, prunings: &[Pruning]) {
        for pruning in prunings.iter().rev() {
            self.restore_value(pruning.variable, pruning.value);
        }
    }

    pub fn restore_full_domain(&mut self, variable: VariableId) {
        self.domain_mut(variable).restore_full_domain()
    }

    pub fn assign(&mut self, variable: VariableId, value: i32) {
        self.domain_mut(variable).assign(value)
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.domain_mut(variable).unassign()
    }

    /// Bring every variable back to its original domain and clear all assignments. Only meant to
    /// be used between searches; during search prunings are undone through
    /// [`Csp::restore_prunings`].
    pub fn reset(&mut self) {
        for variable in &mut self.variables {
            variable.domain.restore_full_domain();
            variable.domain.unassign();
        }
    }

    /// The number of variables in the scope of `constraint` which are not assigned.
    pub fn unassigned_count(&self, constraint: ConstraintId) -> usize {
        self.unassigned_vars(constraint).count()
    }

    pub fn unassigned_vars(&self, constraint: ConstraintId) -> impl Iterator<Item = VariableId> + '_ {
        self.constraint(constraint)
            .scope()
            .iter()
            .copied()
            .filter(|&variable| !self.is_assigned(variable))
    }

    /// The assigned values of the scope of `constraint`, or `None` if any of them is unassigned.
    pub fn assigned_tuple(&self, constraint: ConstraintId) -> Option<Vec<i32>> {
        self.constraint(constraint)
            .scope()
            .iter()
            .map(|&variable| self.assigned_value(variable))
            .collect()
    }

    /// Whether `value` for `variable` has a support in `constraint` with respect to the current
    /// domains of the other variables in its scope.
    ///
    /// Panics if an assigned variable in the scope no longer has its assigned value in its current
    /// domain, since the answer would then be meaningless.
    pub fn has_support(&self, constraint: ConstraintId, variable: VariableId, value: i32) -> bool {
        let constraint = self.constraint(constraint);
        let position = constraint
            .position_of(variable)
            .unwrap_or_else(|| panic!("{variable} is not in the scope of '{}'", constraint.name()));

        let domains: Vec<&Domain> = constraint
            .scope()
            .iter()
            .map(|&other| self.domain(other))
            .collect();

        roster_assert_simple!(
            domains.iter().all(|domain| domain
                .assigned_value()
                .map_or(true, |assigned| domain.contains(assigned))),
            "an assigned variable in the scope of '{}' lost its assigned value",
            constraint.name()
        );

        constraint.relation().has_support(&domains, position, value)
    }
}
