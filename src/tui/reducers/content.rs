use tracing::debug;

use crate::tabs::TabKind;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::{AppState, Focus};

const GOOGLE_HINT: &str = "Type to search | Enter: Google Search | Esc: back to tabs";
const CHAT_HINT: &str = "Enter: start a new chat | Esc: back to tabs";
const BLANK_HINT: &str = "Esc: back to tabs";

/// Handle focus changes and content pane interaction
pub fn reduce_content(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::FocusContent => Ok((enter_content_focus(state), Effect::None)),
        Action::FocusTabStrip => Ok((exit_content_focus(state), Effect::None)),
        Action::SearchInput(c) => Ok((edit_query(state, |q| q.push(*c)), Effect::None)),
        Action::SearchBackspace => Ok((
            edit_query(state, |q| {
                q.pop();
            }),
            Effect::None,
        )),
        Action::SearchAction(button) => {
            let mut new_state = state;
            debug!("CONTENT: {:?} pressed with query {:?}", button, new_state.ui.search_query);
            new_state
                .system
                .set_status_message(format!("{} is not available offline", button.label()));
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

fn enter_content_focus(state: AppState) -> AppState {
    debug!("FOCUS: Entering content focus");
    let mut new_state = state;
    new_state.ui.focus = Focus::Content;
    let hint = match new_state.tabs.active_tab().kind {
        TabKind::Google => GOOGLE_HINT,
        TabKind::Chat => CHAT_HINT,
        TabKind::Blank => BLANK_HINT,
    };
    new_state.system.set_status_message(hint.to_string());
    new_state
}

fn exit_content_focus(state: AppState) -> AppState {
    debug!("FOCUS: Returning focus to tab strip");
    let mut new_state = state;
    new_state.ui.focus = Focus::TabStrip;
    new_state.system.reset_status_message();
    new_state
}

/// Apply `edit` to the search query, but only while a Google tab is showing
fn edit_query(state: AppState, edit: impl FnOnce(&mut String)) -> AppState {
    let mut new_state = state;
    if new_state.tabs.active_tab().kind == TabKind::Google {
        edit(&mut new_state.ui.search_query);
    }
    new_state
}
