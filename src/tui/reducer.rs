use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_animation, reduce_content, reduce_tabs};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; follow-up work is returned as an `Effect` for the
/// runtime to execute.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Tab controller operations
    let state = match reduce_tabs(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Focus and content pane interaction
    let state = match reduce_content(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Transition animation
    match reduce_animation(state, &action) {
        Ok(result) => result,
        // Quit is handled by the main loop
        Err(state) => (state, Effect::None),
    }
}
