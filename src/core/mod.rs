//! Core types shared by every model.
//!
//! This module contains the framework-free building blocks:
//! - State definitions via the `State` trait
//! - Guard predicates that gate affordances
//! - The error raised when a message outside a closed set shows up
//!
//! All logic in this module is pure (no side effects).

mod error;
mod guard;
mod state;

pub use error::MessageError;
pub use guard::Guard;
pub use state::State;
