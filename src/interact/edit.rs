//! In-place text editing.
//!
//! Editing itself is the host's job (for the DOM, `contenteditable`); this
//! controller only decides which cells get the flag.

use tracing::debug;

use super::CellPredicate;
use crate::grid::GridIndex;
use crate::host::GridHost;

pub struct EditController<C> {
    filter: Option<CellPredicate<C>>,
}

impl<C> std::fmt::Debug for EditController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditController")
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

impl<C: Clone + PartialEq> EditController<C> {
    /// `filter` limits editing to the cells it accepts; `None` accepts all.
    pub fn new(filter: Option<CellPredicate<C>>) -> Self {
        Self { filter }
    }

    pub fn accepts(&self, cell: &C) -> bool {
        self.filter.as_ref().map_or(true, |f| f(cell))
    }

    /// Mark every accepted cell editable. Returns how many were marked.
    pub fn apply<H: GridHost<Cell = C>>(&self, host: &mut H, index: &GridIndex<C>) -> usize {
        let count = self.set_all(host, index, true);
        debug!(cells = count, "cells made editable");
        count
    }

    /// Clear the editable flag on every accepted cell.
    pub fn clear<H: GridHost<Cell = C>>(&self, host: &mut H, index: &GridIndex<C>) -> usize {
        self.set_all(host, index, false)
    }

    fn set_all<H: GridHost<Cell = C>>(&self, host: &mut H, index: &GridIndex<C>, editable: bool) -> usize {
        let mut count = 0;
        for (_, cell, _) in index.iter().filter(|(_, cell, _)| self.accepts(cell)) {
            host.set_editable(cell, editable);
            count += 1;
        }
        count
    }
}
