pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Mode};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Main layout: title, total, table, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, layout[0], state, &theme);
    render_total(frame, layout[1], state, &theme);
    screens::table::render(frame, layout[2], state);
    render_bottom_bar(frame, layout[3], state, &theme);

    match &state.mode {
        Mode::Table => {}
        Mode::Form(form) => components::form::render(frame, area, form),
        Mode::Confirm(kind) => components::confirm::render(frame, area, *kind),
        Mode::Prompt(prompt) => components::prompt::render(frame, area, prompt),
    }
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_title(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let file = state
        .session
        .path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unsaved".to_string());
    let modified = if state.is_modified() { " *" } else { "" };

    let line = Line::from(vec![
        Span::styled(
            "Budget Categories & Expenses",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{file}{modified}]"), Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_total(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(Span::styled(
        format!("Total Expenses: {}", state.total()),
        Style::default().fg(theme.total).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match state.mode {
        Mode::Table => components::hints::table(),
        Mode::Form(_) => components::hints::form(),
        Mode::Confirm(_) => components::hints::confirm(),
        Mode::Prompt(_) => components::hints::prompt(),
    };
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{app::App, settings::AppConfig, ui::keymap::AppAction};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, &app.state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(AppConfig {
            load_on_start: false,
            ..AppConfig::default()
        })
    }

    #[test]
    fn empty_table_shows_zero_total() {
        let text = screen_text(&app());
        assert!(text.contains("Budget Categories & Expenses"));
        assert!(text.contains("Total Expenses: $0.00"));
        assert!(text.contains("No expenses yet"));
    }

    #[test]
    fn rows_and_total_are_rendered() {
        let mut app = app();
        app.handle_action(AppAction::Input('a'));
        for ch in "Food".chars() {
            app.handle_action(AppAction::Input(ch));
        }
        app.handle_action(AppAction::NextField);
        for _ in 0..4 {
            app.handle_action(AppAction::Backspace);
        }
        for ch in "1234.5".chars() {
            app.handle_action(AppAction::Input(ch));
        }
        app.handle_action(AppAction::Submit);

        let text = screen_text(&app);
        assert!(text.contains("Expense Amount"));
        assert!(text.contains("Food"));
        assert!(text.contains("$1,234.50"));
        assert!(text.contains("Total Expenses: $1,234.50"));
    }

    #[test]
    fn form_dialog_is_drawn() {
        let mut app = app();
        app.handle_action(AppAction::Input('a'));
        let text = screen_text(&app);
        assert!(text.contains("Add New Expense"));
        assert!(text.contains("Expense Amount:"));
        assert!(text.contains("0.00"));
    }
}
