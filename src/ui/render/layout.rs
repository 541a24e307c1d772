use super::{catalog, contact, footer, log, navigation, static_page, Frame};
use crate::pages::Page;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Render the whole frame: navigation bar, mounted page, footer and the
/// disclosure menu on top.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    state.set_terminal_size(size);

    let background = Block::default().style(styling::normal_text_style(state.get_theme()));
    frame.render_widget(background, size);

    let mut constraints = vec![
        Constraint::Length(3), // Navigation bar
        Constraint::Min(1),    // Page
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(1)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    navigation::nav_bar(frame, chunks[0], state);

    let body = chunks[1];
    match state.page() {
        Page::Static(route) => static_page::static_page(frame, body, *route, state),
        Page::Portfolio(page) | Page::Journal(page) => {
            catalog::catalog(frame, body, page, state.get_theme())
        }
        Page::Contact(page) => contact::contact(frame, body, page, state.get_theme()),
    }

    if state.is_log_visible() {
        log::log(frame, chunks[2], state);
    }
    footer::footer(frame, chunks[chunks.len() - 1], state);

    if state.navigation().is_menu_open() {
        navigation::menu(frame, body, state);
    }
}
