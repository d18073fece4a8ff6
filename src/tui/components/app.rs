use crate::tui::component::{vertical, Component, Element};
use crate::tui::layout::CHROME_CONSTRAINTS;
use crate::tui::state::{AppState, Focus};
use crate::tui::widgets::{TabStrip, TitleBar, Toolbar};

use super::{Content, ContentProps, StatusBar};

pub const WINDOW_TITLE: &str = "Chrome";

/// Root App component
///
/// This is the top-level component that renders the entire application.
/// It uses the global AppState as props and delegates rendering to child components.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        let active = props.tabs.active_tab();
        tracing::trace!("APP: view with {} tabs, active={}", props.tabs.len(), active.id);

        let content = Content.view(&ContentProps {
            kind: active.kind,
            search_query: props.ui.search_query.clone(),
            focused: props.ui.focus == Focus::Content,
            transition: props.ui.transition,
        });

        vertical(
            CHROME_CONSTRAINTS,
            vec![
                Element::widget(TitleBar::new(WINDOW_TITLE)),
                Element::widget(TabStrip::new(
                    props.tabs.tabs(),
                    active.id,
                    props.ui.focus == Focus::TabStrip,
                )),
                Element::widget(Toolbar::new(active.kind.address())),
                content,
                StatusBar.view(&props.system),
            ],
        )
    }
}
