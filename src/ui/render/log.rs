use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the log panel with the most recent entries at the bottom.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log (F2: hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = size.height.saturating_sub(2) as usize;
    let entries = state.get_log_entries();
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries
        .into_iter()
        .skip(skip)
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry,
                styling::muted_text_style(theme),
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
