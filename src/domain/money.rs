use std::fmt;

/// Money is integer cents. 1 unit = 100 cents, so a deposit of "50.00" is
/// 5000 cents; floating point never enters the ledger.
pub type Cents = i64;

/// Format cents as a decimal string: 5000 -> "50.00", -1234 -> "-12.34".
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Parse a free-form amount string into cents.
///
/// The accepted grammar is an optional leading minus, then digits with at
/// most one dot and at most two decimal digits: "50", "50.5", "-0.25".
/// Everything else is rejected, including embedded signs ("--5", "1.-5"),
/// non-digit characters, and values that do not fit in an i64 cents count.
/// Negative input parses fine; the ledger rejects it later so the caller
/// sees a validation error rather than a parse error.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, decimal_str) = match unsigned.split_once('.') {
        Some((units, decimal)) => (units, decimal),
        None => (unsigned, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    // i64::parse would accept a second sign here; only bare digits may pass
    if !all_ascii_digits(units_str) || !all_ascii_digits(decimal_str) {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?
    };

    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        // one decimal digit means tens of cents: "12.5" is 12 units 50 cents
        1 => decimal_str.parse::<i64>().unwrap_or(0) * 10,
        2 => decimal_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
        _ => return Err(ParseCentsError::InvalidFormat),
    };

    // Both parts are non-negative here, so only the upper bound can trip
    let cents = units
        .checked_mul(100)
        .and_then(|scaled| scaled.checked_add(decimal_cents))
        .ok_or(ParseCentsError::InvalidFormat)?;
    Ok(if negative { -cents } else { cents })
}

fn all_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
