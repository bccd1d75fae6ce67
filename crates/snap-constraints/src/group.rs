use std::slice;

use tracing::debug;

use crate::handle::ConstraintRef;

/// Ordered members of a [`crate::CompositeConstraint`]. Iteration follows
/// insertion order, which the composite tie-break rules rely on.
#[derive(Debug, Default)]
pub struct ConstraintGroup {
    members: Vec<ConstraintRef>,
}

impl ConstraintGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, constraint: impl Into<ConstraintRef>) {
        let constraint = constraint.into();
        debug!(
            index = self.members.len(),
            auto_delete = constraint.auto_delete(),
            "constraint added to group"
        );
        self.members.push(constraint);
    }

    /// Insert at `index`, clamped to the end of the group.
    pub fn insert(&mut self, index: usize, constraint: impl Into<ConstraintRef>) {
        let index = index.min(self.members.len());
        let constraint = constraint.into();
        debug!(index, auto_delete = constraint.auto_delete(), "constraint inserted into group");
        self.members.insert(index, constraint);
    }

    /// Take a member out of the group, handing it back to the caller.
    pub fn remove(&mut self, index: usize) -> Option<ConstraintRef> {
        if index >= self.members.len() {
            return None;
        }
        debug!(index, "constraint removed from group");
        Some(self.members.remove(index))
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConstraintRef> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ConstraintRef> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, ConstraintRef> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, ConstraintRef> {
        self.members.iter_mut()
    }
}

impl<'a> IntoIterator for &'a ConstraintGroup {
    type Item = &'a ConstraintRef;
    type IntoIter = slice::Iter<'a, ConstraintRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ConstraintGroup {
    type Item = &'a mut ConstraintRef;
    type IntoIter = slice::IterMut<'a, ConstraintRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<C: Into<ConstraintRef>> FromIterator<C> for ConstraintGroup {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut group = Self::new();
        for constraint in iter {
            group.push(constraint);
        }
        group
    }
}
