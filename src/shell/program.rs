//! Program that owns the live model and feeds messages through `update`.

use super::command::Command;
use super::{BINDINGS_TARGET, PERFORMANCE_TARGET, UPDATE_TARGET};
use crate::core::{MessageError, State};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Pure update function: `(message, current model) -> next model`.
pub type UpdateFn<M, Msg> = Arc<dyn Fn(Msg, M) -> M + Send + Sync>;

/// Holds exactly one live model and replaces it on every message.
///
/// Messages are handled one at a time, synchronously; there is no queue and
/// no history. Build one with [`ProgramBuilder`](super::ProgramBuilder).
pub struct Program<M: State, Msg> {
    current: M,
    update: UpdateFn<M, Msg>,
    commands: Vec<Command<M, Msg>>,
    transitions: usize,
}

impl<M: State, Msg: Debug> Program<M, Msg> {
    pub(crate) fn new(
        initial: M,
        update: UpdateFn<M, Msg>,
        commands: Vec<Command<M, Msg>>,
    ) -> Self {
        Self {
            current: initial,
            update,
            commands,
            transitions: 0,
        }
    }

    /// Get the current model (pure)
    pub fn model(&self) -> &M {
        &self.current
    }

    /// Number of messages dispatched so far.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    pub fn commands(&self) -> &[Command<M, Msg>] {
        &self.commands
    }

    /// Run `msg` through the update function and keep the result as the new
    /// current model.
    pub fn dispatch(&mut self, msg: Msg) -> &M {
        debug!(target: UPDATE_TARGET, state = self.current.name(), ?msg, "dispatching message");

        let started = Instant::now();
        let next = (self.update)(msg, self.current.clone());
        trace!(target: PERFORMANCE_TARGET, elapsed = ?started.elapsed(), "update finished");

        debug!(target: UPDATE_TARGET, model = ?next, "model updated");
        self.current = next;
        self.transitions += 1;
        &self.current
    }

    /// Dispatch the message produced by the command called `name`.
    ///
    /// Returns `Ok(false)` without touching the model when the command's
    /// guard rejects the current model, and
    /// [`MessageError::UnhandledMessageKind`] when no command has that name.
    pub fn dispatch_command(&mut self, name: &str) -> Result<bool, MessageError> {
        let msg = {
            let Some(command) = self.find_command(name) else {
                warn!(target: BINDINGS_TARGET, command = name, "no command with this name");
                return Err(MessageError::unhandled(name));
            };

            if !command.can_execute(&self.current) {
                trace!(target: BINDINGS_TARGET, command = name, "command disabled by guard");
                return Ok(false);
            }

            command.message(&self.current)
        };

        self.dispatch(msg);
        Ok(true)
    }

    /// Whether the command called `name` exists and is available now.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.find_command(name)
            .is_some_and(|command| command.can_execute(&self.current))
    }

    fn find_command(&self, name: &str) -> Option<&Command<M, Msg>> {
        self.commands.iter().find(|command| command.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Tally(u32);

    impl State for Tally {
        fn name(&self) -> &str {
            "Tally"
        }
    }

    #[derive(Debug)]
    enum TallyMsg {
        Bump,
        Clear,
    }

    fn tally_update(msg: TallyMsg, model: Tally) -> Tally {
        match msg {
            TallyMsg::Bump => Tally(model.0 + 1),
            TallyMsg::Clear => Tally(0),
        }
    }

    fn program() -> Program<Tally, TallyMsg> {
        Program::new(
            Tally(0),
            Arc::new(tally_update),
            vec![
                Command::new("Bump", |_: &Tally| TallyMsg::Bump),
                Command::guarded(
                    "Clear",
                    |_: &Tally| TallyMsg::Clear,
                    Guard::new(|t: &Tally| t.0 > 0),
                ),
            ],
        )
    }

    #[test]
    fn dispatch_replaces_model() {
        let mut program = program();

        assert_eq!(program.dispatch(TallyMsg::Bump), &Tally(1));
        assert_eq!(program.dispatch(TallyMsg::Bump), &Tally(2));
        assert_eq!(program.model(), &Tally(2));
        assert_eq!(program.transitions(), 2);
    }

    #[test]
    fn dispatch_bypasses_guards() {
        let mut program = program();

        assert!(!program.is_enabled("Clear"));
        assert_eq!(program.dispatch(TallyMsg::Clear), &Tally(0));
        assert_eq!(program.transitions(), 1);
    }

    #[test]
    fn dispatch_command_runs_named_command() {
        let mut program = program();

        assert_eq!(program.dispatch_command("Bump"), Ok(true));
        assert_eq!(program.model(), &Tally(1));
    }

    #[test]
    fn dispatch_command_skips_when_guard_rejects() {
        let mut program = program();

        assert_eq!(program.dispatch_command("Clear"), Ok(false));
        assert_eq!(program.model(), &Tally(0));
        assert_eq!(program.transitions(), 0);

        program.dispatch_command("Bump").unwrap();
        assert!(program.is_enabled("Clear"));
        assert_eq!(program.dispatch_command("Clear"), Ok(true));
        assert_eq!(program.model(), &Tally(0));
    }

    #[test]
    fn dispatch_command_rejects_unknown_name() {
        let mut program = program();

        assert_eq!(
            program.dispatch_command("Explode"),
            Err(MessageError::unhandled("Explode"))
        );
        assert!(!program.is_enabled("Explode"));
        assert_eq!(program.transitions(), 0);
    }
}
