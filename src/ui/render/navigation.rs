use super::Frame;
use crate::state::{Route, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

const BRAND: &str = "ROSAGNA HERNANDEZ";

/// Render the navigation bar. Its background follows the scroll threshold.
///
pub fn nav_bar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let bar = state.navigation().bar_style();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styling::normal_block_border_style(theme))
        .style(styling::nav_bar_style(theme, bar));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BRAND.len() as u16 + 4), Constraint::Min(1)])
        .split(inner);

    let brand = Paragraph::new(Span::styled(BRAND, styling::banner_style(theme)));
    frame.render_widget(brand, columns[0]);

    let current = state.current_route();
    let mut spans = vec![];
    for route in Route::all() {
        let style = if route == current {
            styling::active_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::styled(route.label(), style));
        spans.push(Span::raw("   "));
    }
    let marker = if state.navigation().is_menu_open() { "[x]" } else { "[=]" };
    spans.push(Span::styled(marker, styling::muted_text_style(theme)));
    frame.render_widget(Paragraph::new(Line::from(spans)), columns[1]);
}

/// Render the disclosed menu over the top of the page.
///
pub fn menu(frame: &mut Frame, body: Rect, state: &State) {
    let theme = state.get_theme();
    let height = (Route::all().len() as u16 + 2).min(body.height);
    let area = Rect::new(body.x, body.y, body.width.min(32), height);
    frame.render_widget(Clear, area);

    let current = state.current_route();
    let items: Vec<ListItem> = Route::all()
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let style = if *route == current {
                styling::active_item_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", index + 1), styling::muted_text_style(theme)),
                Span::styled(route.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title("Menu")
            .style(styling::nav_bar_style(theme, crate::state::NavBarStyle::Opaque)),
    );
    frame.render_widget(list, area);
}
