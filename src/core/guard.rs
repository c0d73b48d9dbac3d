//! Guard predicates for gating affordances.
//!
//! Guards are pure boolean functions over a model. A guard decides whether
//! an affordance (a button, a menu entry, a named command) is available; it
//! never vetoes a message that is dispatched directly.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate over a model.
///
/// # Example
///
/// ```rust
/// use single_counter::core::Guard;
/// use single_counter::counter::{self, Msg};
///
/// let can_reset = Guard::new(counter::can_reset);
///
/// let model = counter::init();
/// assert!(!can_reset.check(&model));
///
/// let model = counter::update(Msg::Increment, model);
/// assert!(can_reset.check(&model));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard admits this model.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
