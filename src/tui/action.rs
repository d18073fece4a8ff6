use crate::tabs::{TabId, TabKind};

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key and mouse events)
/// - The main loop's animation tick
/// - Effects returned by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Tab controller
    SelectTab(TabId),
    /// Select the neighbour to the left, without wrapping
    SelectTabLeft,
    /// Select the neighbour to the right, without wrapping
    SelectTabRight,
    AddTab(TabKind),
    CloseTab(TabId),
    CloseActiveTab,
    NextTab,
    PreviousTab,

    // Focus
    FocusContent,
    FocusTabStrip,

    // Content pane
    SearchInput(char),
    SearchBackspace,
    SearchAction(SearchButton),

    // Transition animation
    Tick,
    AnimationFinished,

    // System actions
    Quit,
}

/// The two action buttons under the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchButton {
    Search,
    Lucky,
}

impl SearchButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Search => "Google Search",
            Self::Lucky => "I'm Feeling Lucky",
        }
    }
}

impl Action {
    /// Returns true for the actions the tab controller handles
    pub fn is_tab_operation(&self) -> bool {
        matches!(
            self,
            Self::SelectTab(_)
                | Self::SelectTabLeft
                | Self::SelectTabRight
                | Self::AddTab(_)
                | Self::CloseTab(_)
                | Self::CloseActiveTab
                | Self::NextTab
                | Self::PreviousTab
        )
    }
}
