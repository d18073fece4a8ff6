use crate::tabs::TabKind;
use crate::tui::component::{Component, Element};
use crate::tui::state::TransitionState;
use crate::tui::widgets::{BlankPane, ChatPane, GooglePane};

/// Props for the content pane
#[derive(Debug, Clone)]
pub struct ContentProps {
    pub kind: TabKind,
    pub search_query: String,
    pub focused: bool,
    pub transition: TransitionState,
}

/// Content pane - maps the active tab's kind to what is displayed
///
/// Unknown kinds fall through to the blank pane. While a transition is
/// running the pane is wrapped so it slides in from the hinted side.
pub struct Content;

impl Component for Content {
    type Props = ContentProps;

    fn view(&self, props: &Self::Props) -> Element {
        let pane = pane_for(props);
        if props.transition.is_running() {
            Element::Slide {
                child: Box::new(pane),
                transition: props.transition,
            }
        } else {
            pane
        }
    }
}

fn pane_for(props: &ContentProps) -> Element {
    match props.kind {
        TabKind::Google => Element::widget(GooglePane {
            query: props.search_query.clone(),
            focused: props.focused,
        }),
        TabKind::Chat => Element::widget(ChatPane { focused: props.focused }),
        TabKind::Blank => Element::widget(BlankPane),
    }
}
