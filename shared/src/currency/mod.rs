//! Currency normalization
//!
//! All mock figures are authored as USD literals; the dashboard shows
//! Indonesian Rupiah. This module converts and renders them consistently.
//!
//! - [`convert_to_local_currency`]: USD → whole Rupiah at 15 000
//! - [`format_currency`]: `Rp 1.000.000` (id-ID grouping, no decimals)
//! - [`format_compact_currency`]: `Rp 1,5K`, `Rp 390M`
//! - [`parse_currency`]: display string → integer
//!
//! None of them fail. Anything that is not a finite number renders as
//! `"Rp 0"` (or converts to `0`).
//!
//! # Example
//!
//! ```
//! use shared::currency::{convert_to_local_currency, format_currency, parse_currency};
//!
//! let revenue = convert_to_local_currency(285_000);
//! assert_eq!(revenue, 4_275_000_000);
//!
//! let display = format_currency(revenue);
//! assert_eq!(display, "Rp\u{a0}4.275.000.000");
//! assert_eq!(parse_currency(&display), revenue);
//!
//! assert_eq!(format_currency(f64::NAN), "Rp 0");
//! ```
//!
//! `parse_currency(&format_currency(x)) == x` only holds for whole amounts
//! without a compact suffix.

mod amount;
mod fallback;
mod formatter;
mod locale;
mod normalizer;
mod options;
mod parse;

use std::sync::LazyLock;

pub use amount::IntoAmount;
pub use fallback::ManualFormatter;
pub use formatter::CurrencyFormatter;
pub use locale::{ID_ID, LocaleData, LocaleFormatter};
pub use normalizer::{CurrencyNormalizer, DEFAULT_EXCHANGE_RATE, ZERO_DISPLAY};
pub use options::{DEFAULT_CURRENCY, FormatOptions, FormatOverrides, MAX_FRACTION_DIGITS, Style};
pub use parse::{parse_currency, parse_currency_value};

/// id-ID locale formatter, rate 15 000
static DEFAULT_NORMALIZER: LazyLock<CurrencyNormalizer> = LazyLock::new(CurrencyNormalizer::default);

/// Shared default normalizer
pub fn default_normalizer() -> &'static CurrencyNormalizer {
    &DEFAULT_NORMALIZER
}

/// USD → IDR at [`DEFAULT_EXCHANGE_RATE`], ties rounded toward +∞
pub fn convert_to_local_currency(amount: impl IntoAmount) -> i64 {
    normalizer::convert_with_rate(amount, DEFAULT_EXCHANGE_RATE)
}

/// USD → IDR at an explicit rate
pub fn convert_to_local_currency_with_rate(amount: impl IntoAmount, rate: f64) -> i64 {
    normalizer::convert_with_rate(amount, rate)
}

/// Whole-Rupiah display string
pub fn format_currency(amount: impl IntoAmount) -> String {
    DEFAULT_NORMALIZER.format_currency(amount)
}

/// Display string with option overrides
pub fn format_currency_with(amount: impl IntoAmount, overrides: &FormatOverrides) -> String {
    DEFAULT_NORMALIZER.format_currency_with(amount, overrides)
}

/// Compact display string
pub fn format_compact_currency(amount: impl IntoAmount) -> String {
    DEFAULT_NORMALIZER.format_compact_currency(amount)
}
