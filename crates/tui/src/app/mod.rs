mod form;

use std::{
    cell::Cell,
    path::PathBuf,
    rc::Rc,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ledger::{Intent, LedgerError, Money, Outcome, Session};

use crate::{
    error::{AppError, Result},
    settings::AppConfig,
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use form::{FormField, FormKind, FormState};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Delete(usize),
    Clear,
}

impl ConfirmKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Delete(_) => "Confirm Delete",
            Self::Clear => "Confirm Clear",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::Delete(_) => "Are you sure you want to delete the selected row?",
            Self::Clear => "Are you sure you want to clear all data?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Save,
    Load,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Save => "Save to",
            Self::Load => "Load from",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
}

#[derive(Debug, Clone)]
pub enum Mode {
    Table,
    Form(FormState),
    Confirm(ConfirmKind),
    Prompt(PromptState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub selected: usize,
    pub mode: Mode,
    pub toast: Option<ToastState>,
    pub data_file: String,
    modified: Rc<Cell<bool>>,
}

impl AppState {
    pub fn total(&self) -> Money {
        self.session.store().total()
    }

    /// `true` when the table changed since the last save or load.
    pub fn is_modified(&self) -> bool {
        self.modified.get()
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
        }
    }

    fn select_next(&mut self) {
        let len = self.session.store().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.session.store().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let modified = Rc::new(Cell::new(false));
        let mut session = Session::builder().build();
        let flag = Rc::clone(&modified);
        session.store_mut().subscribe(move |_| flag.set(true));

        let mut app = Self {
            state: AppState {
                session,
                selected: 0,
                mode: Mode::Table,
                toast: None,
                data_file: config.data_file.clone(),
                modified,
            },
            should_quit: false,
        };

        let path = PathBuf::from(&config.data_file);
        if config.load_on_start {
            if path.exists() {
                app.apply_file_intent(Intent::Load(path));
            } else {
                app.state.toast(
                    ToastLevel::Info,
                    format!("{} not found, starting empty", path.display()),
                );
            }
        }

        app
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            self.state.expire_toast(Instant::now());
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }
        }

        tracing::info!("quit requested");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.handle_action(map_key(key));
    }

    pub fn handle_action(&mut self, action: AppAction) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        // Each handler gets the mode by value and puts back the next one.
        let mode = std::mem::replace(&mut self.state.mode, Mode::Table);
        self.state.mode = match mode {
            Mode::Table => self.handle_table(action),
            Mode::Form(form) => self.handle_form(form, action),
            Mode::Confirm(kind) => self.handle_confirm(kind, action),
            Mode::Prompt(prompt) => self.handle_prompt(prompt, action),
        };
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn handle_table(&mut self, action: AppAction) -> Mode {
        match action {
            AppAction::Up | AppAction::Input('k') => self.state.select_prev(),
            AppAction::Down | AppAction::Input('j') => self.state.select_next(),
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('a') => return Mode::Form(FormState::add()),
            AppAction::Submit | AppAction::Input('e') => {
                let selected = self.state.selected;
                if let Some(record) = self.state.session.store().get(selected) {
                    return Mode::Form(FormState::edit(selected, record));
                }
                self.warn_no_selection("edit");
            }
            AppAction::Input('d') => {
                if self.state.selected < self.state.session.store().len() {
                    return Mode::Confirm(ConfirmKind::Delete(self.state.selected));
                }
                self.warn_no_selection("delete");
            }
            AppAction::Input('c') => return Mode::Confirm(ConfirmKind::Clear),
            AppAction::Input('s') => return Mode::Prompt(self.prompt(PromptKind::Save)),
            AppAction::Input('l') => return Mode::Prompt(self.prompt(PromptKind::Load)),
            _ => {}
        }
        Mode::Table
    }

    fn handle_form(&mut self, mut form: FormState, action: AppAction) -> Mode {
        match action {
            AppAction::Cancel => return Mode::Table,
            AppAction::NextField => form.next_field(),
            AppAction::PrevField => form.prev_field(),
            AppAction::Up => form.cycle_category(false),
            AppAction::Down => form.cycle_category(true),
            AppAction::Backspace => form.pop(),
            AppAction::Input(ch) => form.push(ch),
            AppAction::Submit => {
                let intent = match form.kind {
                    FormKind::Add => Intent::AddRow(form.draft.clone()),
                    FormKind::Edit(index) => Intent::EditRow(index, form.draft.clone()),
                };
                match self.state.session.apply(intent) {
                    Ok(Outcome::Added { index } | Outcome::Edited { index }) => {
                        self.state.selected = index;
                        return Mode::Table;
                    }
                    Ok(_) => return Mode::Table,
                    Err(LedgerError::InvalidAmount(message)) => form.reject_amount(message),
                    Err(err) => {
                        self.state.toast(ToastLevel::Error, err.to_string());
                        return Mode::Table;
                    }
                }
            }
            AppAction::Quit | AppAction::None => {}
        }
        Mode::Form(form)
    }

    fn handle_confirm(&mut self, kind: ConfirmKind, action: AppAction) -> Mode {
        match action {
            AppAction::Submit | AppAction::Input('y' | 'Y') => {
                let intent = match kind {
                    ConfirmKind::Delete(index) => Intent::DeleteRow(index),
                    ConfirmKind::Clear => Intent::ClearAll,
                };
                if let Err(err) = self.state.session.apply(intent) {
                    self.state.toast(ToastLevel::Error, err.to_string());
                }
                self.state.clamp_selection();
                Mode::Table
            }
            AppAction::Cancel | AppAction::Input('n' | 'N') => Mode::Table,
            _ => Mode::Confirm(kind),
        }
    }

    fn handle_prompt(&mut self, mut prompt: PromptState, action: AppAction) -> Mode {
        match action {
            AppAction::Cancel => return Mode::Table,
            AppAction::Backspace => {
                prompt.input.pop();
            }
            AppAction::Input(ch) => prompt.input.push(ch),
            AppAction::Submit => {
                let raw = prompt.input.trim();
                if raw.is_empty() {
                    self.state
                        .toast(ToastLevel::Warning, "Please enter a file name.");
                    return Mode::Prompt(prompt);
                }
                let path = PathBuf::from(raw);
                let intent = match prompt.kind {
                    PromptKind::Save => Intent::Save(path),
                    PromptKind::Load => Intent::Load(path),
                };
                self.apply_file_intent(intent);
                return Mode::Table;
            }
            _ => {}
        }
        Mode::Prompt(prompt)
    }

    fn apply_file_intent(&mut self, intent: Intent) {
        let verb = match intent {
            Intent::Save(_) => "save",
            _ => "load",
        };
        match self.state.session.apply(intent) {
            Ok(Outcome::Saved { path, .. }) => {
                self.state.modified.set(false);
                self.state.toast(
                    ToastLevel::Success,
                    format!("Data saved to {}", path.display()),
                );
            }
            Ok(Outcome::Loaded { path, .. }) => {
                self.state.modified.set(false);
                self.state.selected = 0;
                self.state.toast(
                    ToastLevel::Success,
                    format!("Data loaded from {}", path.display()),
                );
            }
            Ok(_) => {}
            Err(err) => {
                self.state
                    .toast(ToastLevel::Error, format!("Failed to {verb}: {err}"));
            }
        }
    }

    fn prompt(&self, kind: PromptKind) -> PromptState {
        let input = self
            .state
            .session
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| self.state.data_file.clone());
        PromptState { kind, input }
    }

    fn warn_no_selection(&mut self, verb: &str) {
        self.state.toast(
            ToastLevel::Warning,
            format!("No Selection: please select a row to {verb}."),
        );
    }
}
