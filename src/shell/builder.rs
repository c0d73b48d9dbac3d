//! Builder for constructing programs.

use super::command::Command;
use super::error::BuildError;
use super::program::{Program, UpdateFn};
use crate::core::State;
use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;

/// Builder for constructing programs with a fluent API.
///
/// # Example
///
/// ```rust
/// use single_counter::counter::{self, Msg};
/// use single_counter::ProgramBuilder;
///
/// let mut program = ProgramBuilder::new()
///     .init(counter::init())
///     .update(counter::update)
///     .commands(counter::commands())
///     .build()
///     .unwrap();
///
/// program.dispatch(Msg::Increment);
/// assert_eq!(program.model().count, 1);
/// ```
pub struct ProgramBuilder<M: State, Msg> {
    initial: Option<M>,
    update: Option<UpdateFn<M, Msg>>,
    commands: Vec<Command<M, Msg>>,
}

impl<M: State, Msg: Debug> ProgramBuilder<M, Msg> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            update: None,
            commands: Vec::new(),
        }
    }

    /// Set the initial model (required).
    pub fn init(mut self, model: M) -> Self {
        self.initial = Some(model);
        self
    }

    /// Set the update function (required).
    pub fn update<F>(mut self, update: F) -> Self
    where
        F: Fn(Msg, M) -> M + Send + Sync + 'static,
    {
        self.update = Some(Arc::new(update));
        self
    }

    /// Add a named command.
    pub fn command(mut self, command: Command<M, Msg>) -> Self {
        self.commands.push(command);
        self
    }

    /// Add multiple commands at once.
    pub fn commands(mut self, commands: Vec<Command<M, Msg>>) -> Self {
        self.commands.extend(commands);
        self
    }

    /// Build the program.
    /// Returns an error if required fields are missing or a command name repeats.
    pub fn build(self) -> Result<Program<M, Msg>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let update = self.update.ok_or(BuildError::MissingUpdate)?;

        let mut seen = HashSet::new();
        for command in &self.commands {
            if !seen.insert(command.name.as_str()) {
                return Err(BuildError::DuplicateCommand {
                    name: command.name.clone(),
                });
            }
        }

        Ok(Program::new(initial, update, self.commands))
    }
}

impl<M: State, Msg: Debug> Default for ProgramBuilder<M, Msg> {
    fn default() -> Self {
        Self::new()
    }
}
