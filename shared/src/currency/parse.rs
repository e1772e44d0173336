//! Currency string parsing
//!
//! Deliberately naive: `R`, `p`, `$`, `,`, `.` and whitespace are removed and
//! the remainder is read as a base-10 integer. Decimal separators are
//! dropped together with thousands separators, so `"$1,234.00"` reads as
//! `123400`. Callers depend on this; do not change it quietly.

use serde_json::Value;

/// Characters removed before the integer is read
fn is_stripped(ch: char) -> bool {
    matches!(ch, 'R' | 'p' | '$' | ',' | '.') || is_blank(ch)
}

/// Regex `\s` whitespace. Unlike [`char::is_whitespace`] this includes the
/// byte order mark and excludes U+0085.
fn is_blank(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

/// Parse a currency display string into an integer amount.
///
/// Reads an optional sign followed by the leading run of digits of the
/// stripped text; trailing garbage is ignored. No digits → `0`.
/// Values beyond the `i64` range saturate.
///
/// ```
/// use shared::parse_currency;
///
/// assert_eq!(parse_currency("Rp 1.234"), 1234);
/// assert_eq!(parse_currency("$1,234.00"), 123400);
/// assert_eq!(parse_currency("not a number"), 0);
/// ```
pub fn parse_currency(currency_string: &str) -> i64 {
    let cleaned: String = currency_string.chars().filter(|c| !is_stripped(*c)).collect();

    let (negative, digits) = match cleaned.as_bytes().first() {
        Some(b'-') => (true, &cleaned[1..]),
        Some(b'+') => (false, &cleaned[1..]),
        _ => (false, cleaned.as_str()),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    if !seen_digit {
        tracing::debug!(input = %currency_string, "Currency string has no digits, reading as 0");
    }
    value
}

/// Parse a dynamically typed value; anything but a JSON string reads as `0`
pub fn parse_currency_value(value: &Value) -> i64 {
    match value {
        Value::String(s) => parse_currency(s),
        _ => 0,
    }
}
