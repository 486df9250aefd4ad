//! One-shot reveal state for scroll-animated sections.
//!
//! Each registered element starts [`RevealState::Pending`] and moves to
//! [`RevealState::Revealed`] on its first intersection. Later intersections
//! never fire again, whether or not the observer has already let go of it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feed one intersection report. Returns `true` only on the transition.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && *self == Self::Pending {
            *self = Self::Revealed;
            return true;
        }
        false
    }
}

/// Reveal states for every element handed to the observer, by registration index.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element and return its index.
    pub fn register(&mut self) -> usize {
        self.states.push(RevealState::Pending);
        self.states.len() - 1
    }

    /// Feed an intersection report for `index`. Unknown indices never fire.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        self.states
            .get_mut(index)
            .is_some_and(|state| state.observe(is_intersecting))
    }

    /// Mark everything revealed at once and return the indices that changed.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        (0..self.states.len())
            .filter(|&i| self.observe(i, true))
            .collect()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.states.get(index) == Some(&RevealState::Revealed)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Pending).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
