//! The representation of the set of tuples a constraint allows.
//!
//! Propagation only needs to test a complete tuple and to ask whether a single variable-value pair
//! is supported by the current domains, so any [`Relation`] can back a constraint.
use std::fmt::Debug;
use std::fmt::Formatter;

use super::domain::Domain;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::basic_types::ModelError;

/// The capability a constraint needs from its relation.
pub trait Relation: Debug {
    /// Whether `tuple` (one value per scope position) satisfies the relation.
    fn check(&self, tuple: &[i32]) -> bool;

    /// The number of positions the relation is defined over, if it is fixed. A relation with a
    /// fixed arity can only be posted on a scope of exactly that length.
    fn arity(&self) -> Option<usize> {
        None
    }

    /// Whether `value` at `position` is supported, i.e. whether there is a satisfying tuple with
    /// `value` at `position` where every other component is drawn from the current domain of the
    /// variable at that position. `domains` are the domains of the scope, in scope order.
    ///
    /// The default implementation enumerates the cartesian product of the current domains of the
    /// other positions.
    fn has_support(&self, domains: &[&Domain], position: usize, value: i32) -> bool {
        let candidates: Vec<Vec<i32>> = domains
            .iter()
            .enumerate()
            .map(|(index, domain)| {
                if index == position {
                    vec![value]
                } else {
                    domain.iter().collect()
                }
            })
            .collect();

        if candidates.iter().any(|values| values.is_empty()) {
            return false;
        }

        // Odometer over the candidate values of every position.
        let mut indices = vec![0_usize; candidates.len()];
        let mut tuple: Vec<i32> = candidates.iter().map(|values| values[0]).collect();
        loop {
            if self.check(&tuple) {
                return true;
            }

            let mut digit = 0;
            loop {
                if digit == indices.len() {
                    return false;
                }

                indices[digit] += 1;
                if indices[digit] < candidates[digit].len() {
                    tuple[digit] = candidates[digit][indices[digit]];
                    break;
                }

                indices[digit] = 0;
                tuple[digit] = candidates[digit][0];
                digit += 1;
            }
        }
    }
}

/// A relation given by an explicit list of satisfying tuples.
#[derive(Clone, Debug)]
pub struct TableRelation {
    arity: usize,
    tuples: Vec<Box<[i32]>>,
    allowed: HashSet<Box<[i32]>>,
    /// For every position and value, the indices of the tuples with that value at that position.
    tuples_with: Vec<HashMap<i32, Vec<usize>>>,
}

impl TableRelation {
    /// Create the relation from tuples of length `arity`. Duplicate tuples are ignored.
    pub fn new(
        arity: usize,
        tuples: impl IntoIterator<Item = Vec<i32>>,
    ) -> Result<Self, ModelError> {
        let mut relation = TableRelation {
            arity,
            tuples: vec![],
            allowed: HashSet::default(),
            tuples_with: vec![HashMap::default(); arity],
        };

        for tuple in tuples {
            if tuple.len() != arity {
                return Err(ModelError::RaggedTable {
                    arity,
                    length: tuple.len(),
                });
            }

            let tuple = tuple.into_boxed_slice();

            if !relation.allowed.insert(tuple.clone()) {
                continue;
            }

            let index = relation.tuples.len();
            for (position, &value) in tuple.iter().enumerate() {
                relation.tuples_with[position]
                    .entry(value)
                    .or_default()
                    .push(index);
            }
            relation.tuples.push(tuple);
        }

        Ok(relation)
    }

    /// The number of distinct tuples.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

impl Relation for TableRelation {
    fn check(&self, tuple: &[i32]) -> bool {
        self.allowed.contains(tuple)
    }

    fn arity(&self) -> Option<usize> {
        Some(self.arity)
    }

    fn has_support(&self, domains: &[&Domain], position: usize, value: i32) -> bool {
        let Some(candidates) = self.tuples_with[position].get(&value) else {
            return false;
        };

        candidates.iter().any(|&index| {
            self.tuples[index]
                .iter()
                .zip(domains)
                .enumerate()
                .all(|(other, (&component, domain))| other == position || domain.contains(component))
        })
    }
}

/// A relation given by a predicate over the value tuple.
pub struct PredicateRelation<F> {
    predicate: F,
}

impl<F: Fn(&[i32]) -> bool> PredicateRelation<F> {
    pub fn new(predicate: F) -> Self {
        PredicateRelation { predicate }
    }
}

impl<F> Debug for PredicateRelation<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateRelation").finish_non_exhaustive()
    }
}

impl<F: Fn(&[i32]) -> bool> Relation for PredicateRelation<F> {
    fn check(&self, tuple: &[i32]) -> bool {
        (self.predicate)(tuple)
    }
}
