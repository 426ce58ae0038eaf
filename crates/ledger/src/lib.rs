//! Budget expense ledger.
//!
//! Holds the rows of a budget grid in a [`RowStore`], validates and formats
//! amounts, and reads/writes the JSON document format. Views drive it through
//! [`Session::apply`].
pub use error::LedgerError;
pub use format::{CURRENCY_SYMBOL, format, parse_display};
pub use money::Money;
pub use record::{COMMON_CATEGORIES, ExpenseDraft, ExpenseRecord, RecordAmount, today};
pub use session::{Intent, Outcome, Session, SessionBuilder};
pub use store::{RowStore, StoreEvent};
pub use validation::validate;

pub mod format;
pub mod persist;

mod error;
mod money;
mod record;
mod session;
mod store;
mod validation;

pub type ResultLedger<T> = Result<T, LedgerError>;
