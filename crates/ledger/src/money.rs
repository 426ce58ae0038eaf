use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use crate::{LedgerError, format};

/// Largest magnitude (in cents) accepted from user input or documents.
pub(crate) const MAX_CENTS: i64 = 9_000_000_000_000_000;

/// Money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the ledger (record amounts,
/// totals) to avoid floating-point drift.
///
/// The value is signed only so that leniently loaded documents can be
/// represented; amounts entered through the store are always `>= 0`.
///
/// # Examples
///
/// ```rust
/// use ledger::Money;
///
/// let amount = Money::new(123_450);
/// assert_eq!(amount.cents(), 123450);
/// assert_eq!(amount.to_string(), "$1,234.50");
/// ```
///
/// Parsing accepts the display form as well as plain numbers:
///
/// ```rust
/// use ledger::Money;
///
/// assert_eq!("$1,200.50".parse::<Money>().unwrap().cents(), 120050);
/// assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
/// assert!("abc".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Addition clamped to the `i64` range.
    ///
    /// Totals over many large rows stay at the bound instead of wrapping.
    #[must_use]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format(*self))
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = LedgerError;

    /// Parses a display string (`$1,234.50`) or a plain number into cents.
    ///
    /// Negative values are accepted here; use [`crate::validate`] for user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse_display(s)
    }
}
