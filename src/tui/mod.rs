// Module declarations
pub mod widgets;
pub mod components;

// Core modules
pub mod action;
pub mod component;
pub mod keys;
pub mod layout;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;


pub use action::{Action, SearchButton};
pub use component::{Component, Effect, Element};
pub use hit_test::mouse_to_action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::time::{Duration, Instant};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    Terminal,
};
use crate::config::Config;

/// Main entry point for TUI mode
pub async fn run(config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let mut runtime = Runtime::new(AppState::from_config(config));
    let renderer = Renderer::new();

    // Area of the last drawn frame, used to resolve mouse clicks
    let mut frame_area = Rect::default();
    let mut last_tick = Instant::now();

    // Main loop
    loop {
        // Process any actions queued by effects before drawing
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        // Render
        terminal.draw(|f| {
            let area = f.area();
            frame_area = area;

            // Build virtual tree from current state
            let element = runtime.build();

            // Render virtual tree to ratatui buffer
            let config = &runtime.state().system.config.display;
            renderer.render(&element, area, f.buffer_mut(), config);
        })?;

        // Poll for input until the next animation tick is due
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => key_to_action(key, runtime.state()),
                Event::Mouse(mouse) => mouse_to_action(
                    mouse,
                    frame_area,
                    runtime.state(),
                    &runtime.state().system.config.display,
                ),
                _ => None,
            };

            if let Some(act) = action {
                if act == Action::Quit {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
                runtime.dispatch(act);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            runtime.dispatch(Action::Tick);
            last_tick = Instant::now();
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
