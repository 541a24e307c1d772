use super::Frame;
use crate::state::{Route, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Return the heading and copy of an informational page.
///
fn copy(route: Route) -> (&'static str, &'static [&'static str]) {
    match route {
        Route::Home => (
            "Precision-crafted garments for the discerning woman",
            &[
                "Made-to-measure excellence in the heart of New York City.",
                "Every exceptional garment begins with a conversation.",
            ],
        ),
        Route::About => (
            "About",
            &[
                "A studio built on the traditions of couture and the needs of the contemporary woman.",
                "Every piece is cut, fitted and finished by hand.",
            ],
        ),
        Route::Bridal => (
            "Bridal",
            &[
                "Gowns designed around the woman who will wear them, from first sketch to final fitting.",
                "Heirloom fabrics and family lace are welcome in every commission.",
            ],
        ),
        Route::MadeToMeasure => (
            "Made-to-Measure",
            &[
                "Tailoring drafted from your measurements, refined over a series of fittings.",
                "Suits, separates and eveningwear, built to move with you.",
            ],
        ),
        Route::Studio => (
            "Studio",
            &[
                "New York City. By appointment only.",
                "hello@rosagnahernandez.com",
            ],
        ),
        Route::Portfolio | Route::Journal | Route::Contact => ("", &[]),
    }
}

/// Render an informational page, scrolled by the current offset.
///
pub fn static_page(frame: &mut Frame, size: Rect, route: Route, state: &State) {
    let theme = state.get_theme();
    let (heading, body) = copy(route);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(heading, styling::banner_style(theme))),
        Line::from(""),
    ];
    for paragraph in body {
        lines.push(Line::from(Span::styled(*paragraph, styling::normal_text_style(theme))));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true })
        .scroll((state.scroll_offset() / 10, 0));
    frame.render_widget(paragraph, size);
}
