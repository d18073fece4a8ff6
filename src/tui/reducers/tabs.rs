use tracing::{debug, warn};

use crate::tabs::{TabResult, Transition};
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::{AppState, TransitionState};

/// Handle tab controller actions
///
/// Returns Ok((state, effect)) if the action was a tab operation, or
/// Err(state) to hand ownership back to the next reducer.
pub fn reduce_tabs(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    if !action.is_tab_operation() {
        return Err(state);
    }

    let mut new_state = state;
    let result = apply(&mut new_state, action);

    match result {
        Ok(Some(transition)) => {
            debug!("TABS: {:?} -> active={} direction={:?}", action, transition.active, transition.direction);
            new_state.ui.transition = TransitionState::start(transition.direction);
            new_state.system.reset_status_message();
        }
        Ok(None) => {
            debug!("TABS: {:?} ignored at the edge of the strip", action);
        }
        Err(e) => {
            warn!("TABS: {:?} rejected: {}", action, e);
            new_state.system.set_status_error_message(e.to_string());
        }
    }

    Ok((new_state, Effect::None))
}

/// Run the controller operation for `action`
///
/// Ok(None) means there was nothing to do (stepping past either end).
fn apply(state: &mut AppState, action: &Action) -> TabResult<Option<Transition>> {
    let tabs = &mut state.tabs;
    match action {
        Action::SelectTab(id) => tabs.select(*id).map(Some),
        Action::SelectTabLeft => {
            let index = tabs.active_index();
            if index == 0 {
                return Ok(None);
            }
            let id = tabs.tabs()[index - 1].id;
            tabs.select(id).map(Some)
        }
        Action::SelectTabRight => {
            let index = tabs.active_index();
            match tabs.tabs().get(index + 1).map(|t| t.id) {
                Some(id) => tabs.select(id).map(Some),
                None => Ok(None),
            }
        }
        Action::AddTab(kind) => Ok(Some(tabs.add(*kind))),
        Action::CloseTab(id) => tabs.close(*id).map(Some),
        Action::CloseActiveTab => {
            let id = tabs.active_id();
            tabs.close(id).map(Some)
        }
        Action::NextTab => Ok(Some(tabs.cycle_next())),
        Action::PreviousTab => Ok(Some(tabs.cycle_previous())),
        _ => Ok(None),
    }
}
