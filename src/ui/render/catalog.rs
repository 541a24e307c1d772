use super::Frame;
use crate::pages::CatalogPage;
use crate::state::{category_badge, paragraphs, CatalogItem};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
};

/// Render a catalog page: filter bar, listing and, when an item is open,
/// the detail overlay.
///
pub fn catalog(frame: &mut Frame, size: Rect, page: &CatalogPage, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(size);

    filter_bar(frame, chunks[0], page, theme);
    listing(frame, chunks[1], page, theme);

    if let Some(item) = page.selection().selected() {
        overlay(frame, size, item, theme);
    }
}

fn filter_bar(frame: &mut Frame, size: Rect, page: &CatalogPage, theme: &Theme) {
    let mut spans = vec![];
    for category in page.categories() {
        let style = if page.filter().is_active(category.key) {
            styling::active_item_style(theme)
        } else {
            styling::muted_text_style(theme)
        };
        spans.push(Span::styled(category.label, style));
        spans.push(Span::raw("    "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}

fn listing(frame: &mut Frame, size: Rect, page: &CatalogPage, theme: &Theme) {
    let items = page.filtered_items();
    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "Nothing in this category yet.",
            styling::muted_text_style(theme),
        ));
        frame.render_widget(empty, size);
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| match item {
            CatalogItem::Portfolio(piece) => ListItem::new(vec![
                Line::from(Span::styled(piece.title.clone(), styling::normal_text_style(theme))),
                Line::from(Span::styled(piece.year.clone(), styling::muted_text_style(theme))),
            ]),
            CatalogItem::Journal(post) => ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}  {}", post.category, post.date),
                    styling::muted_text_style(theme),
                )),
                Line::from(Span::styled(post.title.clone(), styling::normal_text_style(theme))),
                Line::from(Span::styled(post.excerpt.clone(), styling::muted_text_style(theme))),
            ]),
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .highlight_style(styling::active_item_style(theme))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(page.cursor()));
    frame.render_stateful_widget(list, size, &mut list_state);
}

/// Render the detail overlay for the open item.
///
fn overlay(frame: &mut Frame, size: Rect, item: &CatalogItem, theme: &Theme) {
    let area = styling::centered_rect(80, 80, size);
    frame.render_widget(Clear, area);

    let mut lines = vec![];
    match item {
        CatalogItem::Portfolio(piece) => {
            lines.push(Line::from(vec![
                Span::styled(category_badge(&piece.category), styling::active_item_style(theme)),
                Span::raw("    "),
                Span::styled(piece.year.clone(), styling::muted_text_style(theme)),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                piece.description.clone(),
                styling::normal_text_style(theme),
            )));
        }
        CatalogItem::Journal(post) => {
            lines.push(Line::from(vec![
                Span::styled(post.category.clone(), styling::active_item_style(theme)),
                Span::raw("    "),
                Span::styled(post.date.clone(), styling::muted_text_style(theme)),
            ]));
            lines.push(Line::from(""));
            for paragraph in paragraphs(&post.full_content) {
                lines.push(Line::from(Span::styled(
                    paragraph.to_string(),
                    styling::normal_text_style(theme),
                )));
                lines.push(Line::from(""));
            }
        }
    }

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme))
                .title(item.title().to_string())
                .title(Title::from("x: close  Esc: back").position(Position::Bottom)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, area);
}
