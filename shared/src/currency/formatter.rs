//! Formatting capability
//!
//! The normalizer does not care how digits are produced. A primary
//! [`CurrencyFormatter`] (normally [`LocaleFormatter`](super::LocaleFormatter))
//! is tried first; on error the [`ManualFormatter`](super::ManualFormatter)
//! takes over.

use std::fmt;

use super::options::FormatOptions;
use crate::error::FormatError;

/// A number/currency formatting capability
pub trait CurrencyFormatter: fmt::Debug + Send + Sync {
    /// Format a finite amount with fully resolved options
    fn format(&self, amount: f64, options: &FormatOptions) -> Result<String, FormatError>;

    /// Format a finite amount in compact notation
    fn format_compact(&self, amount: f64) -> Result<String, FormatError>;
}

/// Insert `sep` between every group of three digits, counting from the right
pub(crate) fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Split a plain `123.4500` rendering into integer and fraction parts and
/// trim trailing fraction zeros down to `min_fraction` digits
pub(crate) fn split_fraction(text: &str, min_fraction: usize) -> (&str, String) {
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text, ""));
    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_fraction {
        frac.push('0');
    }
    (int_part, frac)
}
