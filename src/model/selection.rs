//! Row and column selection
//!
//! Selections are immutable snapshots: every operation builds a new
//! [`SelectionSet`] and replaces the old one, so change detection is a plain
//! equality check.

use std::collections::BTreeSet;

/// An ordered set of selected indices (rows or columns)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(index: usize) -> Self {
        Self {
            indices: BTreeSet::from([index]),
        }
    }

    /// Every index in `0..count`
    pub fn all(count: usize) -> Self {
        Self {
            indices: (0..count).collect(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn min(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    pub fn max(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    pub fn as_set(&self) -> &BTreeSet<usize> {
        &self.indices
    }

    /// Apply a click to the selection, returning the new snapshot
    ///
    /// - `range` with a non-empty set adds every index between the current
    ///   maximum and `index`, keeping everything already selected
    /// - `multi` flips `index` alone
    /// - otherwise the selection becomes just `index`
    pub fn toggled(&self, index: usize, multi: bool, range: bool) -> Self {
        if range {
            if let Some(anchor) = self.max() {
                let (lo, hi) = if anchor <= index {
                    (anchor, index)
                } else {
                    (index, anchor)
                };
                let mut indices = self.indices.clone();
                indices.extend(lo..=hi);
                return Self { indices };
            }
        }

        if multi {
            let mut indices = self.indices.clone();
            if !indices.remove(&index) {
                indices.insert(index);
            }
            return Self { indices };
        }

        Self::single(index)
    }

    /// Apply a click made on a reordered view
    ///
    /// `order[p]` is the stored index shown at position `p`. A range click
    /// fills the positions between `position` and the lowest selected entry on
    /// screen, so the added indices are the ones adjacent in the view.
    /// Positions past the view leave the selection unchanged.
    pub fn toggled_in_view(
        &self,
        order: &[usize],
        position: usize,
        multi: bool,
        range: bool,
    ) -> Self {
        let Some(&index) = order.get(position) else {
            return self.clone();
        };

        if range {
            if let Some(anchor) = order.iter().rposition(|&i| self.contains(i)) {
                let (lo, hi) = (anchor.min(position), anchor.max(position));
                let mut indices = self.indices.clone();
                indices.extend(order[lo..=hi].iter().copied());
                return Self { indices };
            }
        }

        self.toggled(index, multi, range)
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

/// Current row and column selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub rows: SelectionSet,
    pub columns: SelectionSet,
}

impl Selection {
    pub fn clear(&mut self) {
        self.rows = SelectionSet::new();
        self.columns = SelectionSet::new();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}
