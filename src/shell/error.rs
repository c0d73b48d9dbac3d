//! Build errors for programs.

use thiserror::Error;

/// Errors that can occur when building a program.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial model not specified. Call .init(model) before .build()")]
    MissingInitialState,

    #[error("Update function not specified. Call .update(f) before .build()")]
    MissingUpdate,

    #[error("Command '{name}' is defined more than once")]
    DuplicateCommand { name: String },
}
