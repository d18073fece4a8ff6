/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the chrome.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, trace};

use super::action::{Action, SearchButton};
use super::state::{AppState, Focus};
use crate::tabs::TabKind;

/// Handle keys that work regardless of focus
///
/// Tab cycling is consumed here so it never reaches the search box.
fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::PageDown if ctrl => Some(Action::NextTab),
        KeyCode::PageUp if ctrl => Some(Action::PreviousTab),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Char('t') | KeyCode::Char('T') if ctrl => Some(Action::AddTab(TabKind::Google)),
        KeyCode::Char('w') | KeyCode::Char('W') if ctrl => Some(Action::CloseActiveTab),
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(Action::Quit),
        _ => None,
    }
}

/// Tab strip focused: neighbour selection and tab management
fn handle_tab_strip_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::SelectTabLeft),
        KeyCode::Right => Some(Action::SelectTabRight),
        KeyCode::Char('n') | KeyCode::Char('+') => Some(Action::AddTab(TabKind::Google)),
        KeyCode::Char('c') => Some(Action::AddTab(TabKind::Chat)),
        KeyCode::Char('x') => Some(Action::CloseActiveTab),
        KeyCode::Down | KeyCode::Enter => Some(Action::FocusContent),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Content focused: keys go to whichever pane the active tab shows
fn handle_content_keys(key: KeyEvent, kind: TabKind) -> Option<Action> {
    if matches!(key.code, KeyCode::Esc | KeyCode::Up) {
        debug!("KEY: {:?} pressed in content - returning to tab strip", key.code);
        return Some(Action::FocusTabStrip);
    }

    match kind {
        TabKind::Google => match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::SearchInput(c))
            }
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Enter => Some(Action::SearchAction(SearchButton::Search)),
            _ => None,
        },
        TabKind::Chat => match key.code {
            KeyCode::Enter => Some(Action::AddTab(TabKind::Chat)),
            _ => None,
        },
        TabKind::Blank => None,
    }
}

/// Convert a KeyEvent into an Action based on current application state
///
/// Order of precedence:
/// 1. Global keys (tab cycling, Ctrl shortcuts)
/// 2. Tab strip keys when the strip has focus
/// 3. Pane-specific keys when the content has focus
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Release and repeat events are reported on some platforms
    if key.kind != KeyEventKind::Press {
        return None;
    }

    trace!(
        "KEY: {:?} {:?} (focus={:?}, active={})",
        key.code,
        key.modifiers,
        state.ui.focus,
        state.tabs.active_id()
    );

    if let Some(action) = handle_global_keys(key) {
        return Some(action);
    }

    match state.ui.focus {
        Focus::TabStrip => handle_tab_strip_keys(key.code),
        Focus::Content => handle_content_keys(key, state.tabs.active_tab().kind),
    }
}
