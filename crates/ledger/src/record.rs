//! The module contains the `ExpenseRecord` type, one row of budget data.
use core::fmt;

use chrono::Local;

use crate::{LedgerError, Money, ResultLedger, format, validate};

/// Categories offered as suggestions by the entry form. Free text is allowed too.
pub const COMMON_CATEGORIES: [&str; 10] = [
    "Food",
    "Transportation",
    "Housing",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Education",
    "Insurance",
    "Other",
];

/// Amount held by a record.
///
/// Records created through the store always hold [`RecordAmount::Money`].
/// [`RecordAmount::Unparsed`] only comes from a loaded document whose amount
/// text is not a number; it is kept verbatim and ignored by totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordAmount {
    Money(Money),
    Unparsed(String),
}

impl RecordAmount {
    /// Returns the numeric value, if any.
    #[must_use]
    pub fn money(&self) -> Option<Money> {
        match self {
            Self::Money(money) => Some(*money),
            Self::Unparsed(_) => None,
        }
    }

    /// Text used to pre-fill the amount field when editing.
    #[must_use]
    pub fn edit_text(&self) -> String {
        match self {
            Self::Money(money) => format::edit_text(*money),
            Self::Unparsed(raw) if format::has_symbol_prefix(raw) => format::strip_display(raw),
            Self::Unparsed(raw) => raw.clone(),
        }
    }
}

impl From<Money> for RecordAmount {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl fmt::Display for RecordAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Money(money) => write!(f, "{money}"),
            Self::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// Raw contents of the four entry fields, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl ExpenseDraft {
    /// Draft shown when adding a row: amount `0.00`, today's date.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            category: String::new(),
            amount: "0.00".to_string(),
            date: today(),
            description: String::new(),
        }
    }
}

/// One budget expense row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub category: String,
    pub amount: RecordAmount,
    pub date: String,
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(
        category: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            amount: RecordAmount::Money(amount),
            date: date.into(),
            description: description.into(),
        }
    }

    /// Validates a draft and builds the record.
    ///
    /// A blank date is replaced with today's date (`YYYY-MM-DD`).
    pub fn from_draft(draft: &ExpenseDraft) -> ResultLedger<Self> {
        let amount = validate(&draft.amount)?;
        let date = if draft.date.trim().is_empty() {
            today()
        } else {
            draft.date.clone()
        };
        Ok(Self {
            category: draft.category.clone(),
            amount: RecordAmount::Money(amount),
            date,
            description: draft.description.clone(),
        })
    }

    /// Draft used to pre-fill the edit form.
    #[must_use]
    pub fn edit_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            category: self.category.clone(),
            amount: self.amount.edit_text(),
            date: self.date.clone(),
            description: self.description.clone(),
        }
    }

    /// Returns the amount if it may enter the store: numeric and non-negative.
    pub(crate) fn checked_amount(&self) -> ResultLedger<Money> {
        match &self.amount {
            RecordAmount::Money(money) if money.is_negative() => Err(
                LedgerError::InvalidAmount(crate::validation::NEGATIVE_AMOUNT.to_string()),
            ),
            RecordAmount::Money(money) => Ok(*money),
            RecordAmount::Unparsed(_) => Err(LedgerError::InvalidAmount(
                crate::validation::NOT_A_NUMBER.to_string(),
            )),
        }
    }
}

/// Today's local date as `YYYY-MM-DD`.
#[must_use]
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_validates_amount() {
        let draft = ExpenseDraft {
            category: "Food".to_string(),
            amount: "$1,200.50".to_string(),
            date: "2024-03-01".to_string(),
            description: "groceries".to_string(),
        };
        let record = ExpenseRecord::from_draft(&draft).unwrap();
        assert_eq!(record.amount, RecordAmount::Money(Money::new(120_050)));
        assert_eq!(record.date, "2024-03-01");

        let bad = ExpenseDraft {
            amount: "-5".to_string(),
            ..draft
        };
        assert!(matches!(
            ExpenseRecord::from_draft(&bad),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn from_draft_fills_blank_date() {
        let draft = ExpenseDraft {
            amount: "3".to_string(),
            date: "  ".to_string(),
            ..ExpenseDraft::default()
        };
        let record = ExpenseRecord::from_draft(&draft).unwrap();
        assert_eq!(record.date.len(), 10);
        assert_eq!(record.date, today());
    }

    #[test]
    fn edit_draft_shows_plain_amount() {
        let record = ExpenseRecord::new("Housing", Money::new(123_450), "2024-01-01", "rent");
        let draft = record.edit_draft();
        assert_eq!(draft.amount, "1234.50");
        assert_eq!(draft.category, "Housing");

        let loaded = ExpenseRecord {
            amount: RecordAmount::Unparsed("$abc".to_string()),
            ..record
        };
        assert_eq!(loaded.edit_draft().amount, "abc");
    }

    #[test]
    fn blank_draft_defaults() {
        let draft = ExpenseDraft::blank();
        assert_eq!(draft.amount, "0.00");
        assert_eq!(draft.date, today());
    }
}
