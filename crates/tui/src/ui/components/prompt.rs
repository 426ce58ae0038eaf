use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::PromptState,
    ui::{
        components::{centered_box, hints},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, prompt: &PromptState) {
    let theme = Theme::default();
    let popup = centered_box(64, 5, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", prompt.kind.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    let lines = vec![
        Line::from(vec![
            Span::styled(prompt.input.as_str(), Style::default().fg(theme.text)),
            Span::styled("│", Style::default().fg(theme.accent)),
        ]),
        Line::from(""),
        Line::from(hints::hints_to_spans(&hints::prompt(), &theme)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
