use chrono::{DateTime, Local};
use std::fmt::Write;

use crate::tui::component::{Component, Element};
use crate::tui::state::SystemState;
use crate::tui::widgets::StatusBar as StatusBarWidget;

const FALLBACK_TIME_FORMAT: &str = "%H:%M:%S";

/// StatusBar component - status or error message and the wall clock
pub struct StatusBar;

impl Component for StatusBar {
    type Props = SystemState;

    fn view(&self, props: &Self::Props) -> Element {
        let clock = format_clock(Local::now(), &props.config.time_format);
        Element::widget(
            StatusBarWidget::new(clock).with_message(props.status_message.clone(), props.status_is_error),
        )
    }
}

/// Format `now` with a user supplied strftime string
///
/// chrono reports a bad format only when it is displayed, so fall back to
/// the default instead of letting `to_string` panic.
fn format_clock(now: DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        tracing::warn!("Invalid time_format {:?}, using {}", format, FALLBACK_TIME_FORMAT);
        out.clear();
        let _ = write!(out, "{}", now.format(FALLBACK_TIME_FORMAT));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 12, 5, 7).unwrap()
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(noon(), "%H:%M:%S"), "12:05:07");
        assert_eq!(format_clock(noon(), "%H:%M"), "12:05");
    }

    #[test]
    fn test_format_clock_invalid_format_falls_back() {
        assert_eq!(format_clock(noon(), "%Q"), "12:05:07");
    }

    #[test]
    fn test_view_builds_widget() {
        let element = StatusBar.view(&SystemState::default());
        assert!(matches!(element, Element::Widget(_)));
    }
}
