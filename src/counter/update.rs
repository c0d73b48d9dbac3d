use super::model::{init, Model};
use super::msg::Msg;

/// Map a message and the current model to the next model.
///
/// Pure and total: every [`Msg`] is handled, nothing is mutated, and the
/// result depends on the two inputs alone.
pub fn update(msg: Msg, model: Model) -> Model {
    match msg {
        Msg::Increment => Model {
            count: model.count.wrapping_add(model.step_size),
            ..model
        },
        Msg::Decrement => Model {
            count: model.count.wrapping_sub(model.step_size),
            ..model
        },
        Msg::SetStepSize(step_size) => Model { step_size, ..model },
        Msg::Reset => init(),
    }
}
