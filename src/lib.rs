//! Single Counter: an Elm-style counter with a pure core.
//!
//! The crate follows the "pure core, imperative shell" split. The core is a
//! model, a closed set of messages and a pure update function. The shell owns
//! the one live model on behalf of whatever drives it (a UI toolkit, a test
//! harness) and replaces it wholesale on every dispatched message.
//!
//! # Core Concepts
//!
//! - **Model**: the immutable snapshot of the counter (`count`, `step_size`)
//! - **Msg**: the closed set of user intents
//! - **Update**: the pure function mapping `(Msg, Model)` to a new `Model`
//! - **Projections**: read-only values derived from the model for display
//!
//! # Example
//!
//! ```rust
//! use single_counter::counter::{self, Model, Msg};
//!
//! let model = counter::init();
//! let model = counter::update(Msg::Increment, model);
//! let model = counter::update(Msg::SetStepSize(5), model);
//! let model = counter::update(Msg::Increment, model);
//!
//! assert_eq!(model, Model { count: 6, step_size: 5 });
//! assert!(counter::can_reset(&model));
//! assert_eq!(counter::update(Msg::Reset, model), counter::init());
//! ```

pub mod core;
pub mod counter;
pub mod logging;
pub mod shell;

pub use self::core::{Guard, MessageError, State};
pub use counter::{Model, Msg};
pub use shell::{BuildError, Command, Program, ProgramBuilder};
