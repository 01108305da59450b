use pomo_clock::state::{Phase, TimerState};
use proptest::prelude::*;

fn phase_strategy() -> impl Strategy<Value = Phase> {
    prop_oneof![Just(Phase::Session), Just(Phase::Break)]
}

fn stopped_with(length: u32, target: Phase, shown: Phase) -> TimerState {
    let mut state = TimerState {
        phase: shown,
        ..TimerState::new()
    };
    match target {
        Phase::Session => state.session_length = length,
        Phase::Break => state.break_length = length,
    }
    state
}

proptest! {
    /// Up then down returns to the start, except +1 at 60 which is refused
    #[test]
    fn increment_then_decrement(length in 1u32..=60, target in phase_strategy(), shown in phase_strategy()) {
        let mut state = stopped_with(length, target, shown);

        let grew = state.adjust_length(1, target);
        prop_assert_eq!(grew, length < 60);
        if !grew {
            prop_assert_eq!(state.length_of(target), 60);
            return Ok(());
        }

        prop_assert!(state.adjust_length(-1, target));
        prop_assert_eq!(state.length_of(target), length);
    }

    /// Down then up returns to the start, except -1 at 1 which is refused
    #[test]
    fn decrement_then_increment(length in 1u32..=60, target in phase_strategy(), shown in phase_strategy()) {
        let mut state = stopped_with(length, target, shown);

        let shrank = state.adjust_length(-1, target);
        prop_assert_eq!(shrank, length > 1);
        if !shrank {
            prop_assert_eq!(state.length_of(target), 1);
            return Ok(());
        }

        prop_assert!(state.adjust_length(1, target));
        prop_assert_eq!(state.length_of(target), length);
        if shown == target {
            prop_assert_eq!(state.remaining_seconds, length * 60);
        }
    }

    /// Nothing moves while the clock runs
    #[test]
    fn running_clock_ignores_adjustments(delta in -3i32..=3, target in phase_strategy(), remaining in 0u32..=3600) {
        let mut state = TimerState {
            running: true,
            remaining_seconds: remaining,
            ..TimerState::new()
        };
        let before = state.clone();
        prop_assert!(!state.adjust_length(delta, target));
        prop_assert_eq!(state, before);
    }
}
