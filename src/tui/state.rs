use crate::config::Config;
use crate::tabs::{Direction, TabStore};

/// Number of ticks a content transition takes
pub const ANIMATION_FRAMES: u16 = 6;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The tab store, owned here and mutated only by the tab reducer
    pub tabs: TabStore,

    /// Transient UI state
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    /// Initial state for a session started with `config`
    pub fn from_config(config: Config) -> Self {
        let mut state = Self {
            tabs: TabStore::with_tabs(&config.seed_tabs),
            ..Self::default()
        };
        state.system.config = config;
        state.system.reset_status_message();
        state
    }
}

/// Which part of the chrome receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TabStrip,
    Content,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Text typed into the search box; shared by every Google tab, never stored on a tab
    pub search_query: String,
    pub transition: TransitionState,
}

/// Content slide animation driven by the direction hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionState {
    pub direction: Direction,
    pub frame: u16,
}

impl TransitionState {
    pub fn start(direction: Direction) -> Self {
        Self { direction, frame: 0 }
    }

    pub fn is_running(&self) -> bool {
        self.direction != Direction::Neutral
    }

    /// Horizontal offset of the content pane for a pane `width` columns wide
    ///
    /// Sliding left the pane enters from the right (positive offset); sliding
    /// right it enters from the left. Neutral is always 0.
    pub fn offset(&self, width: u16) -> i32 {
        let remaining = ANIMATION_FRAMES.saturating_sub(self.frame) as i32;
        let shift = width as i32 * remaining / ANIMATION_FRAMES as i32;
        match self.direction {
            Direction::Left => shift,
            Direction::Right => -shift,
            Direction::Neutral => 0,
        }
    }
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Tab/Shift+Tab switch | Ctrl+T new | Ctrl+W close | ↓ content | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
