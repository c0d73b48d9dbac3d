//! Property-based tests for the counter core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use single_counter::core::{Guard, State};
use single_counter::counter::{self, can_reset, init, update, Model, Msg};

prop_compose! {
    fn arbitrary_model()(count in any::<i32>(), step_size in any::<i32>()) -> Model {
        Model { count, step_size }
    }
}

fn arbitrary_msg() -> impl Strategy<Value = Msg> {
    prop_oneof![
        Just(Msg::Increment),
        Just(Msg::Decrement),
        any::<i32>().prop_map(Msg::SetStepSize),
        Just(Msg::Reset),
    ]
}

proptest! {
    #[test]
    fn set_step_size_sets_step_and_keeps_count(model in arbitrary_model(), k in any::<i32>()) {
        let next = update(Msg::SetStepSize(k), model);
        prop_assert_eq!(next.step_size, k);
        prop_assert_eq!(next.count, model.count);
    }

    #[test]
    fn increment_adds_step_size(model in arbitrary_model()) {
        let next = update(Msg::Increment, model);
        prop_assert_eq!(next.count, model.count.wrapping_add(model.step_size));
        prop_assert_eq!(next.step_size, model.step_size);
    }

    #[test]
    fn decrement_subtracts_step_size(model in arbitrary_model()) {
        let next = update(Msg::Decrement, model);
        prop_assert_eq!(next.count, model.count.wrapping_sub(model.step_size));
        prop_assert_eq!(next.step_size, model.step_size);
    }

    #[test]
    fn increment_then_decrement_is_identity(model in arbitrary_model()) {
        let there_and_back = update(Msg::Decrement, update(Msg::Increment, model));
        prop_assert_eq!(there_and_back, model);
    }

    #[test]
    fn reset_always_returns_init(model in arbitrary_model()) {
        prop_assert_eq!(update(Msg::Reset, model), init());
    }

    #[test]
    fn can_reset_iff_not_init(model in arbitrary_model()) {
        prop_assert_eq!(can_reset(&model), model != init());
    }

    #[test]
    fn update_is_deterministic(msg in arbitrary_msg(), model in arbitrary_model()) {
        prop_assert_eq!(update(msg, model), update(msg, model));
    }

    #[test]
    fn reset_guard_agrees_with_projection(model in arbitrary_model()) {
        let guard = Guard::new(can_reset);
        prop_assert_eq!(guard.check(&model), counter::can_reset_value(&model));
    }

    #[test]
    fn model_is_never_final(msgs in prop::collection::vec(arbitrary_msg(), 0..20)) {
        let model = msgs.into_iter().fold(init(), |model, msg| update(msg, model));
        prop_assert!(!model.is_final());
    }

    #[test]
    fn step_size_projection_is_lossless(model in arbitrary_model()) {
        let displayed = counter::step_size_value(&model);
        prop_assert_eq!(
            counter::step_size_from_display(displayed),
            Msg::SetStepSize(model.step_size)
        );
    }

    #[test]
    fn decode_accepts_every_encoded_message(msg in arbitrary_msg()) {
        let json = msg.encode().unwrap();
        prop_assert_eq!(Msg::decode(&json), Ok(msg));
    }

    #[test]
    fn program_matches_folded_update(msgs in prop::collection::vec(arbitrary_msg(), 0..20)) {
        let mut program = counter::program().unwrap();
        let expected = msgs.iter().fold(init(), |model, msg| update(*msg, model));

        for msg in &msgs {
            program.dispatch(*msg);
        }

        prop_assert_eq!(program.model(), &expected);
        prop_assert_eq!(program.transitions(), msgs.len());
    }
}
