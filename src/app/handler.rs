//! Input handling: maps abstract inputs to selector state transitions.

use super::event::Input;
use super::state::{SelectorState, Status};

/// What the host loop should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Repaint and read the next event.
    Continue,
    /// The selection is over; return the state.
    Stop,
}

/// Apply one input to the selector.
///
/// Confirmed and cancelled states absorb every further input.
pub fn handle_input(state: &mut SelectorState, input: Input) -> Directive {
    if state.is_terminated() {
        return Directive::Stop;
    }

    match input {
        Input::Cancel => {
            state.finish(Status::Cancelled);
            Directive::Stop
        }
        Input::Confirm => {
            state.finish(Status::Confirmed);
            Directive::Stop
        }
        Input::MoveUp => {
            state.move_up();
            Directive::Continue
        }
        Input::MoveDown => {
            state.move_down();
            Directive::Continue
        }
        Input::Other => Directive::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Outcome;
    use proptest::prelude::*;

    fn board_clock() -> SelectorState {
        SelectorState::new("Select the Integration Type:", ["Board", "Clock"]).unwrap()
    }

    fn feed(state: &mut SelectorState, inputs: &[Input]) -> Vec<Directive> {
        inputs.iter().map(|&i| handle_input(state, i)).collect()
    }

    #[test]
    fn test_down_down_confirm_wraps_to_first() {
        let mut state = board_clock();

        assert_eq!(handle_input(&mut state, Input::MoveDown), Directive::Continue);
        assert_eq!(state.cursor(), 1);
        assert_eq!(handle_input(&mut state, Input::MoveDown), Directive::Continue);
        assert_eq!(state.cursor(), 0);
        assert_eq!(handle_input(&mut state, Input::Confirm), Directive::Stop);

        let outcome = state.outcome().unwrap();
        assert_eq!(outcome.selected_index(), Some(0));
        assert!(!outcome.is_cancelled());
    }

    #[test]
    fn test_cancel_from_initial_state() {
        let mut state = board_clock();
        assert_eq!(handle_input(&mut state, Input::Cancel), Directive::Stop);
        assert_eq!(state.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn test_up_from_first_wraps_to_last() {
        let mut state = SelectorState::new("t", ["a", "b", "c"]).unwrap();
        handle_input(&mut state, Input::MoveUp);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_other_is_noop() {
        let mut state = board_clock();
        handle_input(&mut state, Input::MoveDown);
        let before = state.clone();
        assert_eq!(handle_input(&mut state, Input::Other), Directive::Continue);
        assert_eq!(state, before);
    }

    #[test]
    fn test_single_option_moves_stay_put() {
        let mut state = SelectorState::new("t", ["only"]).unwrap();
        assert_eq!(
            feed(&mut state, &[Input::MoveUp, Input::MoveDown, Input::MoveUp]),
            vec![Directive::Continue; 3]
        );
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_terminal_states_absorb_input() {
        for finish in [Input::Confirm, Input::Cancel] {
            let mut state = board_clock();
            handle_input(&mut state, Input::MoveDown);
            handle_input(&mut state, finish);
            let done = state.clone();

            let directives = feed(
                &mut state,
                &[Input::MoveDown, Input::MoveUp, Input::Confirm, Input::Cancel, Input::Other],
            );
            assert!(directives.iter().all(|d| *d == Directive::Stop));
            assert_eq!(state, done);
        }
    }

    fn any_input() -> impl Strategy<Value = Input> {
        prop_oneof![
            Just(Input::MoveUp),
            Just(Input::MoveDown),
            Just(Input::Other),
        ]
    }

    proptest! {
        #[test]
        fn property_n_moves_return_to_start(n in 1usize..32) {
            let options: Vec<String> = (0..n).map(|i| format!("opt{i}")).collect();

            let mut up = SelectorState::new("t", options.clone()).unwrap();
            for _ in 0..n {
                handle_input(&mut up, Input::MoveUp);
            }
            prop_assert_eq!(up.cursor(), 0);

            let mut down = SelectorState::new("t", options).unwrap();
            for _ in 0..n {
                handle_input(&mut down, Input::MoveDown);
            }
            prop_assert_eq!(down.cursor(), 0);
        }

        #[test]
        fn property_cursor_stays_in_range_and_confirm_keeps_it(
            n in 1usize..16,
            inputs in proptest::collection::vec(any_input(), 0..64),
        ) {
            let options: Vec<String> = (0..n).map(|i| format!("opt{i}")).collect();
            let mut state = SelectorState::new("t", options).unwrap();
            for input in inputs {
                handle_input(&mut state, input);
                prop_assert!(state.cursor() < n);
            }

            let cursor = state.cursor();
            let mut confirmed = state.clone();
            prop_assert_eq!(handle_input(&mut confirmed, Input::Confirm), Directive::Stop);
            prop_assert_eq!(confirmed.outcome().and_then(|o| o.selected_index()), Some(cursor));

            prop_assert_eq!(handle_input(&mut state, Input::Cancel), Directive::Stop);
            prop_assert_eq!(state.outcome(), Some(Outcome::Cancelled));
        }
    }
}
