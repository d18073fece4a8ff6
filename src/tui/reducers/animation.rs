use tracing::trace;

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::{AppState, TransitionState, ANIMATION_FRAMES};

/// Advance the content transition and reset the direction hint when it ends
///
/// The last tick emits a single AnimationFinished; ticks with no transition
/// running do nothing.
pub fn reduce_animation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Tick => Ok(tick(state)),
        Action::AnimationFinished => {
            let mut new_state = state;
            trace!("ANIMATION: finished, direction reset");
            new_state.ui.transition = TransitionState::default();
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

fn tick(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let transition = &mut new_state.ui.transition;
    if !transition.is_running() || transition.frame >= ANIMATION_FRAMES {
        return (new_state, Effect::None);
    }

    transition.frame += 1;
    let effect = if transition.frame == ANIMATION_FRAMES {
        Effect::Action(Action::AnimationFinished)
    } else {
        Effect::None
    };
    (new_state, effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Direction;

    fn run(state: AppState, action: Action) -> (AppState, Effect) {
        reduce_animation(state, &action).unwrap_or_else(|_| panic!("{:?} should be handled", action))
    }

    #[test]
    fn test_tick_without_transition_is_noop() {
        let (state, effect) = run(AppState::default(), Action::Tick);
        assert_eq!(state.ui.transition, TransitionState::default());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_animation_finishes_exactly_once() {
        let mut state = AppState::default();
        state.ui.transition = TransitionState::start(Direction::Left);

        let mut finished = 0;
        for _ in 0..ANIMATION_FRAMES + 3 {
            let (next, effect) = run(state, Action::Tick);
            if effect == Effect::Action(Action::AnimationFinished) {
                finished += 1;
            }
            state = next;
        }
        assert_eq!(finished, 1);
        assert_eq!(state.ui.transition.frame, ANIMATION_FRAMES);

        let (state, _) = run(state, Action::AnimationFinished);
        assert_eq!(state.ui.transition.direction, Direction::Neutral);
        assert!(!state.ui.transition.is_running());
    }

    #[test]
    fn test_other_actions_pass_through() {
        assert!(reduce_animation(AppState::default(), &Action::NextTab).is_err());
    }
}
