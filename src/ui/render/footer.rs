use super::Frame;
use crate::pages::Page;
use crate::state::{State, SubmissionPhase};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Return the key hints for the current state.
///
pub fn hints(state: &State) -> &'static str {
    if state.navigation().is_menu_open() {
        return " 1-8: go to page  Esc: close menu  Ctrl+c: quit";
    }
    match state.page() {
        Page::Portfolio(page) | Page::Journal(page) if page.selection().is_open() => {
            " x: close  Esc: back  Ctrl+c: quit"
        }
        Page::Portfolio(_) | Page::Journal(_) => {
            " j/k: move  f: filter  Enter: open  m: menu  Ctrl+n/p: next/prev page  F2: log"
        }
        Page::Contact(page) => match page.form().phase() {
            SubmissionPhase::Submitted => " Enter: send another  F1: menu  Ctrl+n/p: next/prev page",
            SubmissionPhase::Submitting => " Sending...  F1: menu  Ctrl+c: quit",
            SubmissionPhase::Idle => {
                " Tab: next field  Left/Right: choose  Ctrl+s: send  F1: menu  Ctrl+n/p: next/prev page"
            }
        },
        Page::Static(_) => " j/k: scroll  m: menu  Ctrl+n/p: next/prev page  F2: log  Ctrl+c: quit",
    }
}

/// Render the footer line.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let paragraph = Paragraph::new(Span::styled(hints(state), styling::muted_text_style(theme)));
    frame.render_widget(paragraph, size);
}
