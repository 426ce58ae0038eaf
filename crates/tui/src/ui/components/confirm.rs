use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::ConfirmKind,
    ui::{
        components::{centered_box, hints},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, kind: ConfirmKind) {
    let theme = Theme::default();
    let popup = centered_box(56, 6, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", kind.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.warning));

    let lines = vec![
        Line::from(kind.question()),
        Line::from(""),
        Line::from(hints::hints_to_spans(&hints::confirm(), &theme)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
