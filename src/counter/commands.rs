//! Named commands a host can bind UI affordances to.

use super::model::{can_reset, Model};
use super::msg::Msg;
use crate::core::Guard;
use crate::shell::Command;

pub const INCREMENT: &str = "Increment";
pub const DECREMENT: &str = "Decrement";
pub const RESET: &str = "Reset";

/// The counter's command table.
///
/// `Increment` and `Decrement` are always available; `Reset` is available
/// only while [`can_reset`] holds. The step size has no command.
pub fn commands() -> Vec<Command<Model, Msg>> {
    vec![
        Command::new(INCREMENT, |_: &Model| Msg::Increment),
        Command::new(DECREMENT, |_: &Model| Msg::Decrement),
        Command::guarded(RESET, |_: &Model| Msg::Reset, Guard::new(can_reset)),
    ]
}
