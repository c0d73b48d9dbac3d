//! Named commands with optional guards.

use crate::core::{Guard, State};
use std::fmt;
use std::sync::Arc;

/// Produces the message a command dispatches, given the current model.
pub type MessageFactory<M, Msg> = Arc<dyn Fn(&M) -> Msg + Send + Sync>;

/// A named affordance that turns the current model into a message.
///
/// The guard only decides whether the command is available; the message it
/// produces goes through the same update as any other.
pub struct Command<M: State, Msg> {
    pub name: String,
    pub factory: MessageFactory<M, Msg>,
    pub guard: Option<Guard<M>>,
}

impl<M: State, Msg> Command<M, Msg> {
    /// An always-available command.
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&M) -> Msg + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
            guard: None,
        }
    }

    /// A command available only while `guard` admits the current model.
    pub fn guarded<F>(name: impl Into<String>, factory: F, guard: Guard<M>) -> Self
    where
        F: Fn(&M) -> Msg + Send + Sync + 'static,
    {
        Self {
            guard: Some(guard),
            ..Self::new(name, factory)
        }
    }

    /// Check if this command is available for the current model (pure)
    pub fn can_execute(&self, current: &M) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    pub fn message(&self, current: &M) -> Msg {
        (self.factory)(current)
    }
}

impl<M: State, Msg> Clone for Command<M, Msg> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            factory: Arc::clone(&self.factory),
            guard: self.guard.clone(),
        }
    }
}

impl<M: State, Msg> fmt::Debug for Command<M, Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
