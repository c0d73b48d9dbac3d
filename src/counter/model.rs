use crate::core::State;
use serde::{Deserialize, Serialize};

/// Complete snapshot of the counter.
///
/// Neither field is bounded: `step_size` may be zero or negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub count: i32,
    pub step_size: i32,
}

impl Default for Model {
    fn default() -> Self {
        init()
    }
}

impl State for Model {
    fn name(&self) -> &str {
        "Running"
    }
}

/// The model a session starts from: `{ count: 0, step_size: 1 }`.
pub fn init() -> Model {
    Model {
        count: 0,
        step_size: 1,
    }
}

/// True iff `model` differs from [`init`] in either field.
///
/// Only gates the reset affordance; [`Msg::Reset`](super::Msg::Reset) itself
/// is accepted from any model.
pub fn can_reset(model: &Model) -> bool {
    *model != init()
}
