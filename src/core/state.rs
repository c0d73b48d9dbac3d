//! Core State trait for models.
//!
//! Every model driven by a [`Program`](crate::shell::Program) implements this
//! trait, which provides pure methods for inspecting the model without side
//! effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for models.
///
/// All methods are pure - no side effects. A model is an immutable value
/// that is replaced wholesale on every update, never mutated in place.
///
/// # Required Traits
///
/// - `Clone`: the shell hands a copy of the current model to `update`
/// - `PartialEq`: models are compared structurally (e.g. "is this the initial model?")
/// - `Debug`: models are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: models can be snapshotted by a caller
///
/// # Example
///
/// ```rust
/// use single_counter::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Toggle {
///     on: bool,
/// }
///
/// impl State for Toggle {
///     fn name(&self) -> &str {
///         if self.on { "On" } else { "Off" }
///     }
/// }
///
/// assert_eq!(Toggle { on: true }.name(), "On");
/// assert!(!Toggle { on: true }.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`: a model normally lives for as
    /// long as its host session and is torn down by the host.
    fn is_final(&self) -> bool {
        false
    }
}
