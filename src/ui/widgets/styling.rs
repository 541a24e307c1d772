use crate::state::NavBarStyle;
use crate::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the border style for blocks holding a validation error.
///
pub fn error_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for the active route, filter or list item.
///
pub fn active_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for the brand banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the navigation bar background for the given scroll treatment.
///
pub fn nav_bar_style(theme: &Theme, bar: NavBarStyle) -> Style {
    match bar {
        NavBarStyle::Transparent => Style::default(),
        NavBarStyle::Opaque => Style::default().bg(theme.surface.to_color()),
    }
}

/// Return the style of the submit button.
///
pub fn button_style(theme: &Theme, disabled: bool) -> Style {
    if disabled {
        Style::default()
            .fg(theme.surface.to_color())
            .bg(theme.disabled.to_color())
    } else {
        Style::default()
            .fg(theme.background.to_color())
            .bg(theme.banner.to_color())
            .add_modifier(Modifier::BOLD)
    }
}

/// Return a rectangle centered in `area` taking the given percentages.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
