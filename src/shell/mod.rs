//! The imperative shell around a pure model.
//!
//! A [`Program`] owns the single live model, feeds each dispatched message
//! through the pure update function, and keeps the result. It does not run
//! an event loop: the caller delivers messages one at a time and reads the
//! model back between calls.
//!
//! # Key Concepts
//!
//! - **Program**: current model + update function + named commands
//! - **Command**: a named affordance producing a message, optionally guarded
//! - **ProgramBuilder**: fluent construction with validation

mod builder;
mod command;
mod error;
mod program;

pub use builder::ProgramBuilder;
pub use command::{Command, MessageFactory};
pub use error::BuildError;
pub use program::{Program, UpdateFn};

/// Log target for model updates.
pub const UPDATE_TARGET: &str = "single_counter::update";
/// Log target for command lookup and guard decisions.
pub const BINDINGS_TARGET: &str = "single_counter::bindings";
/// Log target for update timings.
pub const PERFORMANCE_TARGET: &str = "single_counter::performance";
