use crate::{LedgerError, Money, ResultLedger, format};

pub(crate) const NEGATIVE_AMOUNT: &str = "Expense amount cannot be negative.";
pub(crate) const NOT_A_NUMBER: &str = "Please enter a valid number for the expense amount.";

/// Checks a user-typed amount and returns its canonical value.
///
/// The currency symbol and grouping separators are stripped, whitespace is
/// trimmed and the rest must parse as a non-negative decimal number. The
/// value is kept exactly and rounded half away from zero to the cent.
///
/// ```rust
/// use ledger::{Money, validate};
///
/// assert_eq!(validate("$1,200.50").unwrap(), Money::new(120_050));
/// assert!(validate("-5").is_err());
/// assert!(validate("abc").is_err());
/// ```
pub fn validate(input: &str) -> ResultLedger<Money> {
    let cleaned = format::strip_display(input);
    let amount = format::parse_decimal(&cleaned)
        .ok_or_else(|| LedgerError::InvalidAmount(NOT_A_NUMBER.to_string()))?;

    if amount.negative && amount.nonzero {
        return Err(LedgerError::InvalidAmount(NEGATIVE_AMOUNT.to_string()));
    }

    Ok(Money::new(amount.cents))
}
