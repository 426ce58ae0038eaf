use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use ledger::{ExpenseRecord, RecordAmount};

use crate::{app::AppState, ui::theme::Theme};

const COLUMNS: [&str; 4] = ["Category", "Expense Amount", "Date", "Description"];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let store = state.session.store();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" {} rows ", store.len()));

    if store.is_empty() {
        let hint = Paragraph::new(Line::from("No expenses yet. Press a to add one."))
            .style(Style::default().fg(theme.dim))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().enumerate().map(|(i, title)| {
        let line = Line::from(*title);
        Cell::from(if i == 1 { line.alignment(Alignment::Right) } else { line })
    }))
    .style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows = store.iter().map(|record| record_row(record, &theme));

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(18),
        Constraint::Percentage(16),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol("» ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected.min(store.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn record_row<'a>(record: &'a ExpenseRecord, theme: &Theme) -> Row<'a> {
    let amount_style = match record.amount {
        RecordAmount::Money(_) => Style::default().fg(theme.text),
        RecordAmount::Unparsed(_) => Style::default().fg(theme.warning),
    };
    let amount = Line::from(record.amount.to_string())
        .alignment(Alignment::Right)
        .style(amount_style);

    Row::new(vec![
        Cell::from(record.category.as_str()),
        Cell::from(amount),
        Cell::from(record.date.as_str()),
        Cell::from(record.description.as_str()),
    ])
}
