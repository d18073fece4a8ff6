use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - owns the state and processes actions in order
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Dispatching actions through the reducer
/// - Queuing actions produced by effects
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for actions produced by effects
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            action_tx,
            action_rx,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                trace!("EFFECT: Queueing {:?}", action);
                // The receiver lives in self, so the channel is never closed here
                let _ = self.action_tx.send(action);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        if count > 0 {
            debug!("RUNTIME: processed {} queued actions", count);
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state)
    }
}
