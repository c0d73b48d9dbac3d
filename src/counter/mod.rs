//! The counter: model, messages, update and read projections.
//!
//! Everything in this module is pure. [`update`] is total over [`Msg`] and
//! returns a freshly built [`Model`]; the previous one is simply dropped by
//! the caller. [`program`] wires the pieces into a [`Program`] for callers
//! that want the shell to own the live model.
//!
//! # Integer policy
//!
//! `count` and `step_size` are `i32`. Increment and decrement wrap on
//! overflow (two's complement), so no reachable input panics. Step sizes of
//! zero and below are accepted verbatim: zero freezes the count, a negative
//! step inverts increment and decrement.

mod commands;
mod model;
mod msg;
mod projections;
mod update;

pub use commands::{commands, DECREMENT, INCREMENT, RESET};
pub use model::{can_reset, init, Model};
pub use msg::Msg;
pub use projections::{can_reset_value, counter_value, step_size_from_display, step_size_value};
pub use update::update;

use crate::shell::{BuildError, Program, ProgramBuilder};

/// Build a [`Program`] running the counter, starting from [`init`], with the
/// counter's named commands installed.
pub fn program() -> Result<Program<Model, Msg>, BuildError> {
    ProgramBuilder::new()
        .init(init())
        .update(update)
        .commands(commands())
        .build()
}
