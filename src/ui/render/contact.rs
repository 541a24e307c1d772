use super::Frame;
use crate::pages::ContactPage;
use crate::state::{FormField, FormState, SubmissionPhase};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the contact page: the inquiry form, or the thank-you screen once
/// the inquiry went through.
///
pub fn contact(frame: &mut Frame, size: Rect, page: &ContactPage, theme: &Theme) {
    if page.form().phase() == SubmissionPhase::Submitted {
        thank_you(frame, size, theme);
    } else {
        form(frame, size, page, theme);
    }
}

fn thank_you(frame: &mut Frame, size: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Thank You", styling::banner_style(theme))),
        Line::from(""),
        Line::from(Span::styled(
            "Your message has been received. We will be in touch within 24 hours to discuss \
             your vision and schedule your consultation.",
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Send Another Message",
            styling::active_item_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, styling::centered_rect(70, 60, size));
}

/// Return the text shown for a field: the option label for selects, the raw
/// value otherwise, or a placeholder when empty.
///
fn display_value(form: &FormState, field: FormField) -> String {
    let value = form.fields().get(field);
    match field.options() {
        Some(options) => options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.to_string())
            .unwrap_or_else(|| placeholder(field).to_string()),
        None => value.to_string(),
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Budget => "Select range (optional)",
        FormField::Timeline => "Select timeline (optional)",
        _ => "Select an option",
    }
}

fn form(frame: &mut Frame, size: Rect, page: &ContactPage, theme: &Theme) {
    let fields = FormField::all();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|field| match field {
            FormField::Message => Constraint::Length(6),
            _ => Constraint::Length(3),
        })
        .collect();
    constraints.push(Constraint::Length(1)); // Submission error
    constraints.push(Constraint::Length(1)); // Submit button
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(2)
        .split(size);

    let form = page.form();
    for (index, field) in fields.iter().enumerate() {
        let focused = *field == page.focused_field();
        let error = form.error(*field);

        let border_style = if error.is_some() {
            styling::error_block_border_style(theme)
        } else if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        };

        let mut title = vec![Span::styled(field.label(), styling::normal_text_style(theme))];
        if field.is_required() {
            title.push(Span::styled(" *", styling::active_item_style(theme)));
        }
        if let Some(message) = error {
            title.push(Span::styled(format!("  {}", message), styling::error_text_style(theme)));
        }

        let value = display_value(form, *field);
        let value_style = if form.fields().get(*field).is_empty() {
            styling::muted_text_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        let widget = Paragraph::new(Span::styled(value, value_style))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(Line::from(title)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, chunks[index]);
    }

    let submission_error = form
        .submission_error()
        .map(|reason| Span::styled(reason.to_string(), styling::error_text_style(theme)))
        .unwrap_or_else(|| Span::styled("", Style::default()));
    frame.render_widget(Paragraph::new(submission_error), chunks[fields.len()]);

    let button = Paragraph::new(form.submit_label())
        .alignment(Alignment::Center)
        .style(styling::button_style(theme, form.is_submit_disabled()));
    frame.render_widget(button, chunks[fields.len() + 1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_fields_show_option_labels() {
        let mut form = FormState::default();
        assert_eq!(display_value(&form, FormField::InquiryType), "Select an option");
        assert_eq!(display_value(&form, FormField::Budget), "Select range (optional)");
        form.edit_field(FormField::InquiryType, "studio-rental".to_string());
        assert_eq!(display_value(&form, FormField::InquiryType), "Studio Rental");
        form.edit_field(FormField::Name, "Jane".to_string());
        assert_eq!(display_value(&form, FormField::Name), "Jane");
    }
}
