//! Read-only currency display formatting and parsing.
//!
//! One-directional: values rendered here are for dashboards, tables, and
//! summaries. Live-typing fields use [`apply_currency_mask`] instead, and
//! nothing rendered here feeds back into a mask.
//!
//! [`apply_currency_mask`]: super::apply_currency_mask

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cents::group_digits;

/// Error returned when [`parse_amount`] rejects an input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    /// The input contains no digits at all.
    #[error("no digits in input")]
    Empty,

    /// A character outside digits, separators, sign, and symbol prefix.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    /// Separators are arranged in a way that has no single reading.
    #[error("malformed amount '{0}'")]
    Malformed(String),
}

/// Display options for [`format_currency`].
///
/// Defaults to Brazilian Real conventions: `R$` symbol, 2 decimals, `.`
/// thousands separator, `,` decimal separator.
///
/// # Example
///
/// ```
/// use mascara::{CurrencyFormat, format_currency};
/// use rust_decimal_macros::dec;
///
/// let plain = CurrencyFormat::default().without_symbol();
/// assert_eq!(format_currency(dec!(1234.56), &plain), "1.234,56");
///
/// let usd = CurrencyFormat::default()
///     .with_symbol("US$")
///     .with_separators(',', '.');
/// assert_eq!(format_currency(dec!(1234.56), &usd), "US$ 1,234.56");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Emit the currency symbol before the amount.
    pub show_symbol: bool,
    /// Symbol string, e.g. "R$".
    pub symbol: String,
    /// Digit count after the decimal separator.
    pub decimals: u32,
    /// Separator between three-digit groups of the integer portion.
    pub thousands_separator: char,
    /// Separator before the fraction digits.
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            show_symbol: true,
            symbol: "R$".into(),
            decimals: 2,
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// Set the symbol and enable it.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self.show_symbol = true;
        self
    }

    /// Disable the symbol.
    pub fn without_symbol(mut self) -> Self {
        self.show_symbol = false;
        self
    }

    /// Set the digit count after the decimal separator.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the thousands and decimal separators.
    pub fn with_separators(mut self, thousands: char, decimal: char) -> Self {
        self.thousands_separator = thousands;
        self.decimal_separator = decimal;
        self
    }
}

/// Render `amount` per `format`. Rounds to `format.decimals` places.
///
/// ```
/// use mascara::{CurrencyFormat, format_currency};
/// use rust_decimal_macros::dec;
///
/// let brl = CurrencyFormat::default();
/// assert_eq!(format_currency(dec!(0), &brl), "R$ 0,00");
/// assert_eq!(format_currency(dec!(1500), &brl), "R$ 1.500,00");
/// assert_eq!(format_currency(dec!(-9.9), &brl), "-R$ 9,90");
/// ```
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let rounded = amount.round_dp(format.decimals);
    let fixed = format!("{:.prec$}", rounded.abs(), prec = format.decimals as usize);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + format.symbol.len() + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    if format.show_symbol {
        out.push_str(&format.symbol);
        out.push(' ');
    }
    out.push_str(&group_digits(integer, format.thousands_separator));
    if let Some(f) = fraction {
        out.push(format.decimal_separator);
        out.push_str(f);
    }
    out
}

/// Strictly parse a currency input string into a [`Decimal`].
///
/// Accepts an optional `R$` prefix, an optional `-` before or after it, and
/// digits with Brazilian (`1.234,56`) or plain (`1234.56`) separators. When
/// only dots are present, the last dot is the decimal separator iff one or
/// two digits follow it; otherwise all dots group thousands (`"1.500"` is
/// 1500).
pub fn parse_amount(text: &str) -> Result<Decimal, ParseAmountError> {
    let mut body = text.trim();
    let mut negative = false;
    if let Some(rest) = body.strip_prefix('-') {
        negative = true;
        body = rest.trim_start();
    }
    if let Some(rest) = body.strip_prefix("R$") {
        body = rest.trim_start();
    }
    if !negative {
        if let Some(rest) = body.strip_prefix('-') {
            negative = true;
            body = rest.trim_start();
        }
    }

    if let Some(c) = body
        .chars()
        .find(|c| !c.is_ascii_digit() && *c != '.' && *c != ',')
    {
        return Err(ParseAmountError::UnexpectedChar(c));
    }
    if !body.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseAmountError::Empty);
    }

    let normalized = normalize_separators(body)?;
    let value: Decimal = normalized
        .parse()
        .map_err(|_| ParseAmountError::Malformed(text.trim().to_string()))?;
    Ok(if negative { -value } else { value })
}

/// Total parsing for UI call sites: malformed input degrades to zero.
///
/// ```
/// use mascara::parse_currency_input;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_currency_input("R$ 1.500,00"), dec!(1500.00));
/// assert_eq!(parse_currency_input("1500.00"), dec!(1500.00));
/// assert_eq!(parse_currency_input("abc"), dec!(0));
/// ```
pub fn parse_currency_input(text: &str) -> Decimal {
    parse_amount(text).unwrap_or(Decimal::ZERO)
}

/// Rewrite `body` (digits plus `.`/`,` separators) into `Decimal` syntax.
fn normalize_separators(body: &str) -> Result<String, ParseAmountError> {
    if let Some(comma) = body.rfind(',') {
        let (integer, fraction) = (&body[..comma], &body[comma + 1..]);
        if integer.contains(',') || fraction.contains(',') || fraction.contains('.') {
            return Err(ParseAmountError::Malformed(body.to_string()));
        }
        return Ok(join_parts(
            integer.chars().filter(|c| *c != '.').collect(),
            fraction,
        ));
    }

    if let Some(dot) = body.rfind('.') {
        let fraction = &body[dot + 1..];
        if (1..=2).contains(&fraction.len()) {
            return Ok(join_parts(
                body[..dot].chars().filter(|c| *c != '.').collect(),
                fraction,
            ));
        }
        return Ok(body.chars().filter(|c| *c != '.').collect());
    }

    Ok(body.to_string())
}

fn join_parts(integer: String, fraction: &str) -> String {
    let integer = if integer.is_empty() {
        "0".to_string()
    } else {
        integer
    };
    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}
