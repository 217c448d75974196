//! The set of disks currently marked failed.

use std::collections::BTreeSet;

/// FailureSet is an ordered set of failed disk indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureSet(BTreeSet<usize>);

impl FailureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, disk: usize) -> bool {
        self.0.insert(disk)
    }

    #[must_use]
    pub fn contains(&self, disk: usize) -> bool {
        self.0.contains(&disk)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failed indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for FailureSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
