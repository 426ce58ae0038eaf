use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{FormField, FormState},
    ui::{
        components::{centered_box, hints},
        theme::Theme,
    },
};

const LABEL_WIDTH: usize = 16;

pub fn render(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let theme = Theme::default();
    let popup = centered_box(60, 12, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", form.kind.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FormField::ALL.len() as u16),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Tip or error
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .margin(1)
        .split(inner);

    let fields = FormField::ALL
        .iter()
        .map(|field| field_line(form, *field, &theme))
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(fields), rows[0]);

    let message = match &form.error {
        Some(err) => Span::styled(err.as_str(), Style::default().fg(theme.error)),
        None => Span::styled(
            "Tip: Use common categories or create your own",
            Style::default().fg(theme.dim),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(message)), rows[2]);

    frame.render_widget(
        Paragraph::new(Line::from(hints::hints_to_spans(&hints::form(), &theme))),
        rows[4],
    );
}

fn field_line<'a>(form: &'a FormState, field: FormField, theme: &Theme) -> Line<'a> {
    let focused = form.focus == field;
    let label = format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH);
    let (value_style, cursor) = if focused {
        (
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            "│",
        )
    } else {
        (Style::default().fg(theme.text), "")
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(theme.dim)),
        Span::styled(form.value(field), value_style),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ])
}
