use super::projections::step_size_from_display;
use crate::core::MessageError;
use serde::{Deserialize, Serialize};

/// The closed set of counter messages.
///
/// Encoded adjacently tagged: `{"kind":"Increment"}`,
/// `{"kind":"SetStepSize","value":5}`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Msg {
    Increment,
    Decrement,
    /// New step size, taken verbatim.
    SetStepSize(i32),
    Reset,
}

impl Msg {
    /// Every message kind, in declaration order.
    pub const KINDS: [&'static str; 4] = ["Increment", "Decrement", "SetStepSize", "Reset"];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
            Self::SetStepSize(_) => "SetStepSize",
            Self::Reset => "Reset",
        }
    }

    /// Build a message from a kind name and an optional numeric argument, as
    /// handed over by a host that routes UI events by name.
    ///
    /// The argument is read through [`step_size_from_display`] for
    /// `SetStepSize` and ignored for every other kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use single_counter::{MessageError, Msg};
    ///
    /// assert_eq!(Msg::from_command("Increment", None), Ok(Msg::Increment));
    /// assert_eq!(Msg::from_command("SetStepSize", Some(4.0)), Ok(Msg::SetStepSize(4)));
    /// assert_eq!(
    ///     Msg::from_command("Multiply", None),
    ///     Err(MessageError::unhandled("Multiply"))
    /// );
    /// ```
    pub fn from_command(kind: &str, arg: Option<f64>) -> Result<Self, MessageError> {
        match kind {
            "Increment" => Ok(Self::Increment),
            "Decrement" => Ok(Self::Decrement),
            "Reset" => Ok(Self::Reset),
            "SetStepSize" => arg
                .map(step_size_from_display)
                .ok_or_else(|| MessageError::MissingArgument {
                    kind: kind.to_string(),
                }),
            other => Err(MessageError::unhandled(other)),
        }
    }

    /// Decode a JSON-encoded message.
    ///
    /// A `kind` outside [`Msg::KINDS`] yields
    /// [`MessageError::UnhandledMessageKind`]. A `SetStepSize` without
    /// `value` yields [`MessageError::MissingArgument`]; a numeric `value` is
    /// read through [`step_size_from_display`], so both entry points agree.
    /// Anything else that fails to parse yields [`MessageError::Malformed`].
    pub fn decode(json: &str) -> Result<Self, MessageError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| MessageError::Malformed(e.to_string()))?;

        let kind = value
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| MessageError::Malformed("missing string field `kind`".to_string()))?;

        if !Self::KINDS.contains(&kind) {
            return Err(MessageError::unhandled(kind));
        }

        if kind == "SetStepSize" {
            let step = value
                .get("value")
                .ok_or_else(|| MessageError::MissingArgument {
                    kind: kind.to_string(),
                })?;
            let step = step.as_f64().ok_or_else(|| {
                MessageError::Malformed(format!("step size must be a number, got {step}"))
            })?;
            return Ok(step_size_from_display(step));
        }

        serde_json::from_value(value).map_err(|e| MessageError::Malformed(e.to_string()))
    }

    pub fn encode(&self) -> Result<String, MessageError> {
        serde_json::to_string(self).map_err(|e| MessageError::Malformed(e.to_string()))
    }
}
