//! The domain store: the current domain of a variable layered over its original domain.
//!
//! The original values are fixed when the variable is created. Pruning only flips a presence flag,
//! so iterating the current domain always yields values in their original order and restoring a
//! value puts it back where it was.
use crate::basic_types::HashMap;
use crate::roster_assert_simple;

#[derive(Clone, Debug)]
pub struct Domain {
    /// The original domain in insertion order.
    values: Box<[i32]>,
    /// `present[i]` tells whether `values[i]` is in the current domain.
    present: Box<[bool]>,
    positions: HashMap<i32, usize>,
    size: usize,
    assigned: Option<i32>,
}

impl Domain {
    /// Create a domain from distinct values. Callers are responsible for rejecting duplicates.
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let positions: HashMap<i32, usize> = values
            .iter()
            .enumerate()
            .map(|(position, &value)| (value, position))
            .collect();
        roster_assert_simple!(
            positions.len() == values.len(),
            "the original domain may not contain duplicates"
        );

        let size = values.len();
        Domain {
            present: vec![true; size].into_boxed_slice(),
            values: values.into_boxed_slice(),
            positions,
            size,
            assigned: None,
        }
    }

    /// The original domain, including values which are currently pruned.
    pub fn original_values(&self) -> &[i32] {
        &self.values
    }

    /// The values of the current domain, in the order of the original domain.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values
            .iter()
            .zip(self.present.iter())
            .filter(|(_, &present)| present)
            .map(|(&value, _)| value)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, value: i32) -> bool {
        self.positions
            .get(&value)
            .is_some_and(|&position| self.present[position])
    }

    pub fn in_original_domain(&self, value: i32) -> bool {
        self.positions.contains_key(&value)
    }

    /// Remove `value` from the current domain.
    ///
    /// Pruning a value which is not present means the pruning bookkeeping is broken, which is
    /// reported by panicking.
    pub(crate) fn prune(&mut self, value: i32) {
        let position = self.position_of(value);
        roster_assert_simple!(
            self.present[position],
            "value {value} was pruned while absent from the current domain"
        );

        self.present[position] = false;
        self.size -= 1;
    }

    /// Put a previously pruned `value` back into the current domain.
    pub(crate) fn restore(&mut self, value: i32) {
        let position = self.position_of(value);
        roster_assert_simple!(
            !self.present[position],
            "value {value} was restored while already in the current domain"
        );

        self.present[position] = true;
        self.size += 1;
    }

    /// Reset the current domain to the original domain.
    pub(crate) fn restore_full_domain(&mut self) {
        self.present.iter_mut().for_each(|present| *present = true);
        self.size = self.values.len();
    }

    pub fn assigned_value(&self) -> Option<i32> {
        self.assigned
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    /// Set the assigned value. The current domain is left untouched.
    pub(crate) fn assign(&mut self, value: i32) {
        roster_assert_simple!(
            self.in_original_domain(value),
            "cannot assign {value}, it is not part of the original domain"
        );
        self.assigned = Some(value);
    }

    pub(crate) fn unassign(&mut self) {
        self.assigned = None;
    }

    fn position_of(&self, value: i32) -> usize {
        match self.positions.get(&value) {
            Some(&position) => position,
            None => panic!("value {value} is not part of the original domain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Domain;

    #[test]
    fn pruning_keeps_original_order() {
        let mut domain = Domain::new(vec![4, 1, 3, 2]);

        domain.prune(1);
        domain.prune(2);

        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![4, 3]);
        assert_eq!(domain.size(), 2);
        assert!(!domain.contains(1));
        assert!(domain.contains(3));
        assert!(domain.in_original_domain(1));
    }

    #[test]
    fn restore_reinserts_at_original_position() {
        let mut domain = Domain::new(vec![1, 2, 3]);

        domain.prune(2);
        domain.restore(2);

        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(domain.size(), 3);
    }

    #[test]
    fn restore_full_domain_undoes_all_pruning() {
        let mut domain = Domain::new(vec![1, 2, 3]);

        domain.prune(1);
        domain.prune(3);
        domain.restore_full_domain();

        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn assignment_does_not_touch_current_domain() {
        let mut domain = Domain::new(vec![1, 2, 3]);

        domain.assign(2);
        assert_eq!(domain.assigned_value(), Some(2));
        assert_eq!(domain.size(), 3);

        domain.unassign();
        assert_eq!(domain.assigned_value(), None);
    }

    #[test]
    #[should_panic(expected = "pruned while absent")]
    fn pruning_an_absent_value_panics() {
        let mut domain = Domain::new(vec![1, 2]);

        domain.prune(1);
        domain.prune(1);
    }

    #[test]
    #[should_panic(expected = "already in the current domain")]
    fn restoring_a_present_value_panics() {
        let mut domain = Domain::new(vec![1, 2]);

        domain.restore(1);
    }

    #[test]
    #[should_panic(expected = "not part of the original domain")]
    fn pruning_a_foreign_value_panics() {
        let mut domain = Domain::new(vec![1, 2]);

        domain.prune(7);
    }
}
