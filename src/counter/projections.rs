//! Read projections consumed by a binding layer.

use super::model::{can_reset, Model};
use super::msg::Msg;

pub fn counter_value(model: &Model) -> i32 {
    model.count
}

/// Step size widened for display controls that work in floating point.
pub fn step_size_value(model: &Model) -> f64 {
    f64::from(model.step_size)
}

pub fn can_reset_value(model: &Model) -> bool {
    can_reset(model)
}

/// Write path of [`step_size_value`]: truncates toward zero, saturates at the
/// `i32` range and maps NaN to zero.
///
/// No command in [`commands`](super::commands) produces this message; a host
/// that wants an editable step size has to call it explicitly.
pub fn step_size_from_display(value: f64) -> Msg {
    Msg::SetStepSize(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::init;

    #[test]
    fn projections_read_model() {
        let model = Model {
            count: -4,
            step_size: 3,
        };
        assert_eq!(counter_value(&model), -4);
        assert_eq!(step_size_value(&model), 3.0);
        assert!(can_reset_value(&model));
        assert!(!can_reset_value(&init()));
    }

    #[test]
    fn step_size_value_is_exact_for_extremes() {
        let model = Model {
            count: 0,
            step_size: i32::MIN,
        };
        assert_eq!(step_size_value(&model), -2_147_483_648.0);
    }

    #[test]
    fn display_write_truncates_toward_zero() {
        assert_eq!(step_size_from_display(2.9), Msg::SetStepSize(2));
        assert_eq!(step_size_from_display(-2.9), Msg::SetStepSize(-2));
    }

    #[test]
    fn display_write_saturates_and_maps_nan() {
        assert_eq!(step_size_from_display(1e12), Msg::SetStepSize(i32::MAX));
        assert_eq!(step_size_from_display(-1e12), Msg::SetStepSize(i32::MIN));
        assert_eq!(step_size_from_display(f64::NAN), Msg::SetStepSize(0));
    }
}
