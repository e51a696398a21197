use std::fmt;

use super::decimal_len;

/// Amounts are plain decimal numbers with no currency attached.
/// Full precision is kept; rounding to cents only happens on display.
pub type Amount = f64;

/// Format an amount with exactly two decimal places.
/// Example: 42.5 -> "42.50", -3.0 -> "-3.00", 0.005 -> "0.01"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse the decimal number at the start of `input` into an amount.
/// Leading whitespace is skipped and anything after the number is ignored.
/// Example: "42.50" -> 42.5, "-3" -> -3.0, ".5" -> 0.5, "12 euros" -> 12.0
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim_start();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let end = decimal_len(input);
    if end == 0 {
        return Err(ParseAmountError::InvalidFormat);
    }

    let amount: Amount = input[..end]
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    // Exponents past the f64 range parse as infinity
    if !amount.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }

    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "no amount given"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
