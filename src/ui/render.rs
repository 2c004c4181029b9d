use crate::form::{Field, FormState};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FORM_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK, TEXT,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const FORM_WIDTH: u16 = 52;

/// Placeholder shown by the type selector when nothing is chosen.
const TYPE_PLACEHOLDER: &str = "type";

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new(app.endpoint()).widget(), header);
    frame.render_widget(Clear, body);
    frame.render_widget(Footer::new().widget(footer), footer);

    let lines = form_lines(app);
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(body, FORM_WIDTH, height);

    let block = Block::default()
        .title(Span::styled(" Create Product ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FORM_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn form_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.form_state();
    let mut lines = Vec::new();

    for field in Field::ALL {
        let focused = app.focus() == Focus::Field(field);
        lines.push(Line::from(""));
        lines.push(label_line(field, focused));
        lines.push(value_line(field, state, focused));
        if let Some(message) = state.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(submit_line(app));

    if let Some(notice) = state.notice {
        let color = if notice.is_error() {
            STATUS_ERROR
        } else {
            STATUS_OK
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", notice.message()),
            Style::default().fg(color),
        )));
    }

    lines
}

fn label_line(field: Field, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Line::from(Span::styled(format!("  {}", field.label()), style))
}

fn value_line(field: Field, state: &FormState, focused: bool) -> Line<'static> {
    let value = state.fields.get(field);
    let mut style = Style::default().fg(TEXT);
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT);
    }

    let text = match field {
        Field::Type => {
            let shown = if value.is_empty() {
                TYPE_PLACEHOLDER
            } else {
                value
            };
            format!("‹ {shown} ›")
        }
        Field::Name | Field::Size if focused => format!("{value}▏"),
        Field::Name | Field::Size => value.to_string(),
    };

    let text_style = if field == Field::Type && value.is_empty() {
        style.fg(MUTED_TEXT)
    } else {
        style
    };

    Line::from(vec![Span::raw("  "), Span::styled(text, text_style)])
}

fn submit_line(app: &App) -> Line<'static> {
    let state = app.form_state();
    let focused = app.focus() == Focus::Submit;

    let button_style = if !state.is_trigger_enabled() {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    } else if focused {
        Style::default()
            .fg(TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };

    let mut spans = vec![Span::raw("  "), Span::styled("[ Submit ]", button_style)];
    if state.is_sending() {
        let spinner = SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("  {spinner} Sending..."),
            Style::default().fg(STATUS_OK),
        ));
    }
    Line::from(spans)
}
