use ledger::{COMMON_CATEGORIES, ExpenseDraft, ExpenseRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit(usize),
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => "Add New Expense",
            Self::Edit(_) => "Edit Expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Amount,
    Date,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Category,
        FormField::Amount,
        FormField::Date,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Amount => "Expense Amount",
            Self::Date => "Date",
            Self::Description => "Description",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Category,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Category => Self::Description,
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
        }
    }
}

/// State of the add/edit dialog.
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    pub draft: ExpenseDraft,
    pub focus: FormField,
    pub error: Option<String>,
    suggestion: Option<usize>,
}

impl FormState {
    pub fn add() -> Self {
        Self::with_draft(FormKind::Add, ExpenseDraft::blank())
    }

    pub fn edit(index: usize, record: &ExpenseRecord) -> Self {
        Self::with_draft(FormKind::Edit(index), record.edit_draft())
    }

    fn with_draft(kind: FormKind, draft: ExpenseDraft) -> Self {
        let suggestion = COMMON_CATEGORIES
            .iter()
            .position(|c| *c == draft.category);
        Self {
            kind,
            draft,
            focus: FormField::Category,
            error: None,
            suggestion,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Category => &self.draft.category,
            FormField::Amount => &self.draft.amount,
            FormField::Date => &self.draft.date,
            FormField::Description => &self.draft.description,
        }
    }

    fn active_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Category => &mut self.draft.category,
            FormField::Amount => &mut self.draft.amount,
            FormField::Date => &mut self.draft.date,
            FormField::Description => &mut self.draft.description,
        }
    }

    pub fn push(&mut self, ch: char) {
        self.active_mut().push(ch);
        self.error = None;
    }

    pub fn pop(&mut self) {
        self.active_mut().pop();
        self.error = None;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Moves through the common categories when the category field is focused.
    pub fn cycle_category(&mut self, forward: bool) {
        if self.focus != FormField::Category {
            return;
        }
        let len = COMMON_CATEGORIES.len();
        let next = match (self.suggestion, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.suggestion = Some(next);
        self.draft.category = COMMON_CATEGORIES[next].to_string();
    }

    /// Marks the amount as rejected and moves focus there.
    pub fn reject_amount(&mut self, message: String) {
        self.error = Some(message);
        self.focus = FormField::Amount;
    }
}
