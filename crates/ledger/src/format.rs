//! Conversions between [`Money`] and its display text.
//!
//! The display form is `$1,234.50`: currency symbol, thousands grouping and
//! exactly two fraction digits. The stored form is always the cents value.

use crate::{LedgerError, Money, ResultLedger, money::MAX_CENTS};

/// Symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: char = '$';

const GROUP_SEPARATOR: char = ',';

/// Renders an amount for display, e.g. `123450` cents → `"$1,234.50"`.
///
/// Negative amounts put the sign before the symbol: `"-$5.00"`.
#[must_use]
pub fn format(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.cents().unsigned_abs();
    let whole = group_thousands(abs / 100);
    let cents = abs % 100;
    format!("{sign}{CURRENCY_SYMBOL}{whole}.{cents:02}")
}

/// Renders an amount the way it is typed into a form: no symbol, no grouping.
#[must_use]
pub fn edit_text(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.cents().unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Removes every currency symbol and grouping separator, then trims.
#[must_use]
pub fn strip_display(text: &str) -> String {
    text.chars()
        .filter(|c| *c != CURRENCY_SYMBOL && *c != GROUP_SEPARATOR)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Returns `true` if the text already carries the display prefix.
#[must_use]
pub fn has_symbol_prefix(text: &str) -> bool {
    text.starts_with(CURRENCY_SYMBOL)
}

/// Inverse of [`format`]: strips symbol and separators and parses the number.
///
/// Accepts anything [`format`] produces plus plain numbers (`"1234.5"`,
/// `"1e3"`). Rounds half away from zero to the nearest cent.
pub fn parse_display(text: &str) -> ResultLedger<Money> {
    let cleaned = strip_display(text);
    if cleaned.is_empty() {
        return Err(LedgerError::InvalidAmount("empty amount".to_string()));
    }

    parse_decimal(&cleaned)
        .map(DecimalAmount::money)
        .ok_or_else(|| LedgerError::InvalidAmount(format!("not a number: {text}")))
}

/// A decimal literal reduced to whole cents, sign kept apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DecimalAmount {
    pub(crate) negative: bool,
    /// Any non-zero digit was present before rounding.
    pub(crate) nonzero: bool,
    pub(crate) cents: i64,
}

impl DecimalAmount {
    pub(crate) fn money(self) -> Money {
        if self.negative {
            Money::new(-self.cents)
        } else {
            Money::new(self.cents)
        }
    }
}

/// Parses `[+-]digits[.digits][e[+-]digits]` exactly into cents.
///
/// Digits past the second fraction place only decide rounding. Returns
/// `None` for anything else or for magnitudes above [`MAX_CENTS`].
pub(crate) fn parse_decimal(text: &str) -> Option<DecimalAmount> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits: Vec<i64> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b.is_ascii_digit().then(|| i64::from(b - b'0')))
        .collect::<Option<_>>()?;
    if digits.is_empty() {
        return None;
    }

    let Some(first) = digits.iter().position(|d| *d != 0) else {
        return Some(DecimalAmount {
            negative,
            nonzero: false,
            cents: 0,
        });
    };

    // Index of the first digit past the cents place.
    let cut = i64::try_from(int_part.len()).ok()?.checked_add(exponent)?.checked_add(2)?;
    let digit_at = |index: i64| {
        usize::try_from(index)
            .ok()
            .and_then(|i| digits.get(i).copied())
            .unwrap_or(0)
    };

    let mut cents: i64 = 0;
    let mut index = i64::try_from(first).ok()?;
    while index < cut {
        cents = cents.checked_mul(10)?.checked_add(digit_at(index))?;
        if cents > MAX_CENTS {
            return None;
        }
        index += 1;
    }
    if digit_at(cut) >= 5 {
        cents += 1;
    }
    if cents > MAX_CENTS {
        return None;
    }

    Some(DecimalAmount {
        negative,
        nonzero: true,
        cents,
    })
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format(Money::new(0)), "$0.00");
        assert_eq!(format(Money::new(5)), "$0.05");
        assert_eq!(format(Money::new(99_999)), "$999.99");
        assert_eq!(format(Money::new(123_450)), "$1,234.50");
        assert_eq!(format(Money::new(123_456_789_00)), "$123,456,789.00");
        assert_eq!(format(Money::new(-500)), "-$5.00");
    }

    #[test]
    fn edit_text_drops_symbol_and_grouping() {
        assert_eq!(edit_text(Money::new(123_450)), "1234.50");
        assert_eq!(edit_text(Money::new(7)), "0.07");
    }

    #[test]
    fn parse_display_accepts_formatted_and_plain() {
        assert_eq!(parse_display("$1,234.50").unwrap(), Money::new(123_450));
        assert_eq!(parse_display(" 1234.5 ").unwrap(), Money::new(123_450));
        assert_eq!(parse_display("-$5.00").unwrap(), Money::new(-500));
        assert_eq!(parse_display("1e3").unwrap(), Money::new(100_000));
    }

    #[test]
    fn parse_display_rejects_garbage() {
        assert!(parse_display("").is_err());
        assert!(parse_display("$").is_err());
        assert!(parse_display("abc").is_err());
        assert!(parse_display("inf").is_err());
        assert!(parse_display("1.2.3").is_err());
        assert!(parse_display("--5").is_err());
        assert!(parse_display("e5").is_err());
    }

    #[test]
    fn parse_decimal_rounds_half_away_from_zero() {
        assert_eq!(parse_display("12.345").unwrap(), Money::new(1_235));
        assert_eq!(parse_display("12.3449").unwrap(), Money::new(1_234));
        assert_eq!(parse_display("0.004").unwrap(), Money::ZERO);
        assert_eq!(parse_display("-0.005").unwrap(), Money::new(-1));
        assert_eq!(parse_display(".5").unwrap(), Money::new(50));
        assert_eq!(parse_display("5.").unwrap(), Money::new(500));
        assert_eq!(parse_display("1.5e-2").unwrap(), Money::new(2));
        assert_eq!(parse_display("0.01E+3").unwrap(), Money::new(1_000));
    }

    #[test]
    fn parse_decimal_is_exact_up_to_the_cap() {
        for cents in [
            MAX_CENTS,
            MAX_CENTS - 1,
            8_999_999_999_999_985,
            8_999_999_999_999_943,
            9_007_199_254_740,
        ] {
            let amount = Money::new(cents);
            assert_eq!(parse_display(&format(amount)).unwrap(), amount);
            assert_eq!(parse_display(&edit_text(amount)).unwrap(), amount);
        }
        assert_eq!(
            parse_display("89999999999999.99").unwrap(),
            Money::new(8_999_999_999_999_999)
        );
    }

    #[test]
    fn parse_decimal_rejects_above_the_cap() {
        assert!(parse_display("90000000000000.01").is_err());
        assert_eq!(
            parse_display("89999999999999.995").unwrap(),
            Money::new(MAX_CENTS)
        );
        assert!(parse_display("1e20").is_err());
        assert!(parse_display("1e99999999999999999999").is_err());
        assert_eq!(parse_display("1e-400").unwrap(), Money::ZERO);
    }

    #[test]
    fn display_round_trip_is_stable() {
        for cents in [0, 1, 10, 99, 100, 1_050, 99_999, 100_000, 123_456_789] {
            let amount = Money::new(cents);
            let shown = format(amount);
            let parsed = parse_display(&shown).unwrap();
            assert_eq!(parsed, amount);
            assert_eq!(format(parsed), shown);
        }
    }
}
