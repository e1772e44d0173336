//! Locale-aware formatter
//!
//! Rounds through `rust_decimal` (half away from zero, the way locale
//! number formatting rounds) and lays the digits out with the locale's
//! separators. `id-ID` is built in:
//!
//! | amount | default | compact |
//! |---|---|---|
//! | 1000000 | `Rp 1.000.000` | `Rp 1M` |
//! | 1500 | `Rp 1.500` | `Rp 1,5K` |
//! | -2500 | `-Rp 2.500` | `-Rp 2,5K` |
//!
//! The space after the symbol is U+00A0 (no-break space).

use rust_decimal::prelude::*;

use super::formatter::{CurrencyFormatter, group_digits, split_fraction};
use super::options::{DEFAULT_CURRENCY, FormatOptions, MAX_FRACTION_DIGITS, Style};
use crate::error::FormatError;

/// Separators, symbols and compact suffixes of one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Between symbol and digits
    pub symbol_spacing: &'static str,
    /// ISO code → display symbol. Codes not listed display as themselves.
    pub symbols: &'static [(&'static str, &'static str)],
    /// Suffix for 10^3, 10^6, 10^9, ...
    pub compact_suffixes: &'static [&'static str],
}

/// Indonesian locale
pub const ID_ID: LocaleData = LocaleData {
    tag: "id-ID",
    group_separator: '.',
    decimal_separator: ',',
    symbol_spacing: "\u{a0}",
    symbols: &[("IDR", "Rp"), ("USD", "US$"), ("EUR", "€"), ("SGD", "SGD")],
    compact_suffixes: &["K", "M", "B", "T"],
};

impl LocaleData {
    /// Display symbol for an upper-case ISO code
    pub fn symbol_for<'a>(&self, code: &'a str) -> &'a str {
        self.symbols
            .iter()
            .find(|(iso, _)| *iso == code)
            .map(|(_, symbol)| *symbol)
            .unwrap_or(code)
    }
}

/// Primary formatter backed by a [`LocaleData`] table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormatter {
    locale: LocaleData,
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::id_id()
    }
}

impl LocaleFormatter {
    pub const fn new(locale: LocaleData) -> Self {
        Self { locale }
    }

    pub const fn id_id() -> Self {
        Self::new(ID_ID)
    }

    pub fn locale(&self) -> &LocaleData {
        &self.locale
    }

    fn validate(options: &FormatOptions) -> Result<(), FormatError> {
        let (min, max) = (
            options.minimum_fraction_digits,
            options.maximum_fraction_digits,
        );
        if min > MAX_FRACTION_DIGITS || max > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidOptions(format!(
                "fraction digits must be within 0..={MAX_FRACTION_DIGITS}"
            )));
        }
        if min > max {
            return Err(FormatError::InvalidOptions(format!(
                "minimumFractionDigits {min} exceeds maximumFractionDigits {max}"
            )));
        }
        if options.style == Style::Currency && !is_currency_code(&options.currency) {
            return Err(FormatError::UnsupportedCurrency(options.currency.clone()));
        }
        Ok(())
    }

    /// Lay out an already rounded non-negative decimal
    fn layout(&self, rounded: Decimal, min_fraction: u8, grouping: bool) -> String {
        let text = rounded.to_string();
        let (int_part, frac) = split_fraction(&text, min_fraction as usize);
        let mut out = if grouping {
            group_digits(int_part, self.locale.group_separator)
        } else {
            int_part.to_string()
        };
        if !frac.is_empty() {
            out.push(self.locale.decimal_separator);
            out.push_str(&frac);
        }
        out
    }

    fn currency_prefix(&self, code: &str) -> String {
        let code = code.to_ascii_uppercase();
        format!("{}{}", self.locale.symbol_for(&code), self.locale.symbol_spacing)
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, amount: f64, options: &FormatOptions) -> Result<String, FormatError> {
        Self::validate(options)?;

        let value = match options.style {
            Style::Percent => amount * 100.0,
            Style::Currency | Style::Decimal => amount,
        };
        let rounded = to_decimal(value.abs())?.round_dp_with_strategy(
            options.maximum_fraction_digits as u32,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let number = self.layout(rounded, options.minimum_fraction_digits, options.use_grouping);
        // A negative value that rounds to zero prints as plain zero
        let sign = if value < 0.0 && !rounded.is_zero() { "-" } else { "" };

        Ok(match options.style {
            Style::Currency => format!("{sign}{}{number}", self.currency_prefix(&options.currency)),
            Style::Decimal => format!("{sign}{number}"),
            Style::Percent => format!("{sign}{number}%"),
        })
    }

    fn format_compact(&self, amount: f64) -> Result<String, FormatError> {
        let options = FormatOptions::compact();
        let magnitude = amount.abs();
        let suffixes = self.locale.compact_suffixes;
        let thousand = Decimal::from(1000);

        let mut tier = 0usize;
        let mut scale = 1.0_f64;
        while tier < suffixes.len() && magnitude >= scale * 1000.0 {
            tier += 1;
            scale *= 1000.0;
        }

        let rounded = loop {
            let rounded = to_decimal(magnitude / scale)?.round_dp_with_strategy(
                options.maximum_fraction_digits as u32,
                RoundingStrategy::MidpointAwayFromZero,
            );
            // 999.95K rounds to 1000K; show it as 1M instead
            if rounded >= thousand && tier < suffixes.len() {
                tier += 1;
                scale *= 1000.0;
                continue;
            }
            break rounded;
        };

        let number = self.layout(rounded, options.minimum_fraction_digits, options.use_grouping);
        let sign = if amount < 0.0 && !rounded.is_zero() { "-" } else { "" };
        let suffix = match tier {
            0 => "",
            n => suffixes[n - 1],
        };
        Ok(format!(
            "{sign}{}{number}{suffix}",
            self.currency_prefix(DEFAULT_CURRENCY)
        ))
    }
}

fn to_decimal(value: f64) -> Result<Decimal, FormatError> {
    Decimal::from_f64(value).ok_or(FormatError::OutOfRange(value))
}

/// Three ASCII letters, case-insensitive
fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::options::FormatOverrides;

    const NBSP: char = '\u{a0}';

    fn fmt(amount: f64) -> String {
        LocaleFormatter::id_id()
            .format(amount, &FormatOptions::default())
            .unwrap()
    }

    fn fmt_with(amount: f64, overrides: FormatOverrides) -> Result<String, FormatError> {
        LocaleFormatter::id_id().format(amount, &FormatOptions::default().merge(&overrides))
    }

    fn compact(amount: f64) -> String {
        LocaleFormatter::id_id().format_compact(amount).unwrap()
    }

    #[test]
    fn test_whole_rupiah_grouping() {
        assert_eq!(fmt(0.0), format!("Rp{NBSP}0"));
        assert_eq!(fmt(999.0), format!("Rp{NBSP}999"));
        assert_eq!(fmt(1000.0), format!("Rp{NBSP}1.000"));
        assert_eq!(fmt(1_000_000.0), format!("Rp{NBSP}1.000.000"));
        assert_eq!(fmt(4_275_000_000.0), format!("Rp{NBSP}4.275.000.000"));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(fmt(0.5), format!("Rp{NBSP}1"));
        assert_eq!(fmt(1499.5), format!("Rp{NBSP}1.500"));
        assert_eq!(fmt(-2.5), format!("-Rp{NBSP}3"));
        assert_eq!(fmt(-0.4), format!("Rp{NBSP}0"));
    }

    #[test]
    fn test_negative_sign_precedes_symbol() {
        assert_eq!(fmt(-1_275_000_000.0), format!("-Rp{NBSP}1.275.000.000"));
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(
            fmt_with(1234.5, FormatOverrides::fraction_digits(2, 2)).unwrap(),
            format!("Rp{NBSP}1.234,50")
        );
        assert_eq!(
            fmt_with(1234.5678, FormatOverrides::fraction_digits(0, 2)).unwrap(),
            format!("Rp{NBSP}1.234,57")
        );
        assert_eq!(
            fmt_with(1234.0, FormatOverrides::fraction_digits(0, 2)).unwrap(),
            format!("Rp{NBSP}1.234")
        );
    }

    #[test]
    fn test_other_currencies_and_styles() {
        assert_eq!(
            fmt_with(12.5, FormatOverrides {
                currency: Some("usd".into()),
                maximum_fraction_digits: Some(2),
                ..Default::default()
            })
            .unwrap(),
            format!("US${NBSP}12,5")
        );
        assert_eq!(
            fmt_with(5000.0, FormatOverrides::currency("JPY")).unwrap(),
            format!("JPY{NBSP}5.000")
        );
        assert_eq!(
            fmt_with(1234567.0, FormatOverrides::style(Style::Decimal)).unwrap(),
            "1.234.567"
        );
        assert_eq!(
            fmt_with(0.6, FormatOverrides::style(Style::Percent)).unwrap(),
            "60%"
        );
        assert_eq!(
            fmt_with(1234567.0, FormatOverrides {
                use_grouping: Some(false),
                ..Default::default()
            })
            .unwrap(),
            format!("Rp{NBSP}1234567")
        );
    }

    #[test]
    fn test_invalid_options_are_errors() {
        assert!(matches!(
            fmt_with(1.0, FormatOverrides::fraction_digits(3, 1)),
            Err(FormatError::InvalidOptions(_))
        ));
        assert!(matches!(
            fmt_with(1.0, FormatOverrides::fraction_digits(0, 21)),
            Err(FormatError::InvalidOptions(_))
        ));
        assert!(matches!(
            fmt_with(1.0, FormatOverrides::currency("Rupiah")),
            Err(FormatError::UnsupportedCurrency(_))
        ));
        // The code is irrelevant outside the currency style
        assert!(fmt_with(1.0, FormatOverrides {
            style: Some(Style::Decimal),
            currency: Some(String::new()),
            ..Default::default()
        })
        .is_ok());
    }

    #[test]
    fn test_out_of_range_magnitude() {
        assert!(matches!(
            LocaleFormatter::id_id().format(1e30, &FormatOptions::default()),
            Err(FormatError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_compact_tiers() {
        assert_eq!(compact(500.0), format!("Rp{NBSP}500"));
        assert_eq!(compact(1500.0), format!("Rp{NBSP}1,5K"));
        assert_eq!(compact(2000.0), format!("Rp{NBSP}2K"));
        assert_eq!(compact(2_500_000.0), format!("Rp{NBSP}2,5M"));
        assert_eq!(compact(390_000_000.0), format!("Rp{NBSP}390M"));
        assert_eq!(compact(4_275_000_000.0), format!("Rp{NBSP}4,3B"));
        assert_eq!(compact(1.5e12), format!("Rp{NBSP}1,5T"));
        assert_eq!(compact(2.5e15), format!("Rp{NBSP}2.500T"));
    }

    #[test]
    fn test_compact_promotes_rounded_boundary() {
        assert_eq!(compact(999_950.0), format!("Rp{NBSP}1M"));
        assert_eq!(compact(999.96), format!("Rp{NBSP}1K"));
        assert_eq!(compact(999_940.0), format!("Rp{NBSP}999,9K"));
    }

    #[test]
    fn test_compact_negative() {
        assert_eq!(compact(-2500.0), format!("-Rp{NBSP}2,5K"));
        assert_eq!(compact(-0.01), format!("Rp{NBSP}0"));
    }
}
