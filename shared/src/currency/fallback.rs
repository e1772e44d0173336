//! Manual fallback formatter
//!
//! Used when the locale formatter rejects its input. Output is built by hand:
//! `"Rp "` + digits grouped with `.`, up to three fraction digits after `,`.
//! Options are ignored. Exact halves round away from zero, like the locale
//! formatter.

use rust_decimal::prelude::*;

use super::formatter::{CurrencyFormatter, group_digits, split_fraction};
use super::options::FormatOptions;
use crate::error::FormatError;

const PREFIX: &str = "Rp ";

/// Hand-built Rupiah strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualFormatter;

impl ManualFormatter {
    /// `Rp ` + id-ID grouped digits
    pub fn format_plain(&self, amount: f64) -> String {
        format!("{PREFIX}{}", to_grouped_string(amount))
    }

    /// Compact form for amounts of at least one thousand.
    ///
    /// Billions keep the `M` suffix, there is no separate billion tier here.
    /// Returns `None` below one thousand (negatives included) so the caller
    /// can fall back to the plain currency form.
    pub fn compact_tier(&self, amount: f64) -> Option<String> {
        let (scaled, suffix) = if amount >= 1_000_000_000.0 {
            (amount / 1_000_000_000.0, "M")
        } else if amount >= 1_000_000.0 {
            (amount / 1_000_000.0, "M")
        } else if amount >= 1_000.0 {
            (amount / 1_000.0, "K")
        } else {
            return None;
        };
        Some(format!("{PREFIX}{}{suffix}", one_decimal(scaled)))
    }
}

impl CurrencyFormatter for ManualFormatter {
    fn format(&self, amount: f64, _options: &FormatOptions) -> Result<String, FormatError> {
        Ok(self.format_plain(amount))
    }

    fn format_compact(&self, amount: f64) -> Result<String, FormatError> {
        Ok(self
            .compact_tier(amount)
            .unwrap_or_else(|| self.format_plain(amount)))
    }
}

/// Exactly one fraction digit, `.` separated, from the exact binary value
fn one_decimal(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => format!(
            "{:.1}",
            d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{value:.1}"),
    }
}

/// Digits grouped with `.`, at most three fraction digits after `,`
fn to_grouped_string(amount: f64) -> String {
    let text = match Decimal::from_f64(amount.abs()) {
        Some(d) => d
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        // Beyond the decimal range
        None => format!("{:.3}", amount.abs()),
    };
    let (int_part, frac) = split_fraction(&text, 0);
    let grouped = group_digits(int_part, '.');
    let sign = if amount < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac}")
    }
}
