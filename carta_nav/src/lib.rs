// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carta Nav: the drill-down selection state machine.
//!
//! [`Navigator`] tracks which region chain the user has clicked into as a
//! stack of child indices. An empty stack is the root level, where every
//! top-level country is a candidate. Each stack entry selects a child of the
//! level above it, so the stack always names a valid chain through the tree.
//!
//! Transitions mirror the click gestures:
//! - A click that hits a candidate **pushes** its index. Leaves push too;
//!   their candidate set is empty, so any further click inside them is a miss.
//! - A click that hits nothing **resets** the stack to the root level.
//!
//! The navigator stores only indices; candidate and selection lookups borrow
//! from the [`MapData`] the indices came from. A revision counter bumps on
//! every change so frame loops can cheaply notice stale derived state.
//!
//! ## Minimal example
//!
//! ```rust
//! use carta_nav::{ClickTransition, Navigator};
//!
//! let mut nav = Navigator::new();
//! assert!(nav.is_root());
//!
//! // Hit on candidate 2 at the root level.
//! assert_eq!(nav.click(Some(2)), ClickTransition::Descended(2));
//! assert_eq!(nav.path(), &[2]);
//!
//! // A miss anywhere returns to the root.
//! assert_eq!(nav.click(None), ClickTransition::Reset);
//! assert!(nav.is_root());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use smallvec::SmallVec;

use carta_region::{MapData, Region};

/// What a click did to the navigation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTransition {
    /// The click hit the candidate at this index; it was pushed.
    Descended(usize),
    /// The click missed; the stack was cleared to the root level.
    Reset,
}

/// Stack of drill-down selections, empty at the root level.
///
/// Indices are relative: entry `n` indexes into the child list of the region
/// selected by entries `0..n` (or the top-level countries for entry 0). All
/// indices must come from hit tests over [`Navigator::candidates`] of the same
/// map.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    path: SmallVec<[usize; 4]>,
    revision: u64,
}

impl Navigator {
    /// Creates a navigator at the root level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no selection is active (root level).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the drill-down depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns the index chain from the root to the current selection.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Returns a counter that bumps on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a click outcome: push on a hit, reset on a miss.
    pub fn click(&mut self, hit: Option<usize>) -> ClickTransition {
        match hit {
            Some(index) => {
                self.descend(index);
                ClickTransition::Descended(index)
            }
            None => {
                self.reset_to_root();
                ClickTransition::Reset
            }
        }
    }

    /// Pushes a selection at the current level.
    pub fn descend(&mut self, index: usize) {
        self.path.push(index);
        self.revision += 1;
    }

    /// Clears the stack back to the root level.
    pub fn reset_to_root(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.path.clear();
        self.revision += 1;
    }

    /// Returns the candidate set for the current level.
    ///
    /// Root level: all top-level countries. Otherwise: the children of the
    /// deepest selection, which is empty when a leaf is selected.
    #[must_use]
    pub fn candidates<'m>(&self, map: &'m MapData) -> &'m [Region] {
        let mut level = map.countries();
        for &index in &self.path {
            let Some(region) = level.get(index) else {
                debug_assert!(false, "navigation index out of range for this map");
                return &[];
            };
            level = region.children();
        }
        level
    }

    /// Returns the deepest selected region, or `None` at the root level.
    #[must_use]
    pub fn selected<'m>(&self, map: &'m MapData) -> Option<&'m Region> {
        let (&last, rest) = self.path.split_last()?;
        let mut level = map.countries();
        for &index in rest {
            level = level.get(index)?.children();
        }
        level.get(last)
    }
}
